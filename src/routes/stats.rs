use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct SeriesPoint {
    label: &'static str,
    value: f64,
}

#[derive(Serialize)]
struct TopService {
    name: &'static str,
    count: u32,
    revenue: f64,
}

#[derive(Serialize)]
struct CityCount {
    city: &'static str,
    count: u32,
}

#[derive(Serialize)]
struct StatsSummary {
    revenue_series: Vec<SeriesPoint>,
    volume_series: Vec<SeriesPoint>,
    top_services: Vec<TopService>,
    average_duration: u32,
    cities: Vec<CityCount>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/stats/summary").route(web::get().to(summary)));
}

// Fixed figures, like the rest of the demo data set.
async fn summary() -> HttpResponse {
    HttpResponse::Ok().json(StatsSummary {
        revenue_series: vec![
            SeriesPoint { label: "Week 12", value: 3200.0 },
            SeriesPoint { label: "Week 13", value: 3450.0 },
            SeriesPoint { label: "Week 14", value: 3120.0 },
            SeriesPoint { label: "Week 15", value: 3680.0 },
        ],
        volume_series: vec![
            SeriesPoint { label: "January", value: 54.0 },
            SeriesPoint { label: "February", value: 48.0 },
            SeriesPoint { label: "March", value: 62.0 },
            SeriesPoint { label: "April", value: 35.0 },
        ],
        top_services: vec![
            TopService {
                name: "Full interior cleaning",
                count: 155,
                revenue: 18600.0,
            },
            TopService {
                name: "Three-seat sofa stain removal",
                count: 132,
                revenue: 14200.0,
            },
            TopService {
                name: "Wool rug cleaning",
                count: 84,
                revenue: 12540.0,
            },
        ],
        average_duration: 118,
        cities: vec![
            CityCount { city: "Bordeaux", count: 42 },
            CityCount { city: "Paris", count: 33 },
            CityCount { city: "Lille", count: 27 },
            CityCount { city: "Lyon", count: 21 },
        ],
    })
}
