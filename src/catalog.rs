use crate::models::{Engagement, Service, ServiceOption};

/// Resolved price and duration for one engagement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub price: f64,
    pub duration_minutes: u32,
}

/// Resolves an engagement's totals against the service catalog.
///
/// An unresolvable service id yields zero totals rather than an error. That is
/// the documented fail-soft contract: engagements are allowed to reference
/// services that are no longer in the catalog. Option ids the service does not
/// carry are skipped.
pub fn resolve_totals(engagement: &Engagement, services: &[Service]) -> Totals {
    let Some(service) = services.iter().find(|service| service.id == engagement.service_id)
    else {
        return Totals {
            price: 0.0,
            duration_minutes: 0,
        };
    };

    let mut price = service.base_price;
    let mut duration = service.base_duration;
    for option in &service.options {
        if engagement.option_ids.iter().any(|id| id == &option.id) {
            price += option.extra_price;
            duration += option.extra_duration;
        }
    }

    Totals {
        price,
        duration_minutes: duration,
    }
}

pub fn service_catalog() -> Vec<Service> {
    vec![
        Service {
            id: "s1".to_string(),
            category: "Car".to_string(),
            name: "Full interior cleaning".to_string(),
            description: "Vacuuming, degreasing and protection of interior surfaces."
                .to_string(),
            base_price: 120.0,
            base_duration: 120,
            options: vec![
                ServiceOption {
                    id: "o1".to_string(),
                    label: "Fabric protection".to_string(),
                    extra_price: 35.0,
                    extra_duration: 30,
                },
                ServiceOption {
                    id: "o2".to_string(),
                    label: "Deodorizing treatment".to_string(),
                    extra_price: 15.0,
                    extra_duration: 15,
                },
            ],
            active: true,
        },
        Service {
            id: "s2".to_string(),
            category: "Sofa".to_string(),
            name: "Three-seat sofa stain removal".to_string(),
            description: "Steam cleaning and anti-stain treatment.".to_string(),
            base_price: 95.0,
            base_duration: 90,
            options: vec![ServiceOption {
                id: "o3".to_string(),
                label: "Waterproof coating".to_string(),
                extra_price: 25.0,
                extra_duration: 20,
            }],
            active: true,
        },
        Service {
            id: "s3".to_string(),
            category: "Textile".to_string(),
            name: "Wool rug cleaning".to_string(),
            description: "Deep vacuuming and mild shampoo.".to_string(),
            base_price: 130.0,
            base_duration: 150,
            options: vec![
                ServiceOption {
                    id: "o4".to_string(),
                    label: "Anti-dust-mite treatment".to_string(),
                    extra_price: 40.0,
                    extra_duration: 25,
                },
                ServiceOption {
                    id: "o5".to_string(),
                    label: "Accelerated drying".to_string(),
                    extra_price: 20.0,
                    extra_duration: 15,
                },
            ],
            active: true,
        },
    ]
}
