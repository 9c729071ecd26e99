use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::catalog::{resolve_totals, service_catalog};
use crate::error::ApiError;
use crate::models::{
    Client, ClientInput, ClientStatus, Engagement, EngagementInput, Service, Slot,
    STATUS_DONE, STATUS_PLANNED,
};

/// In-memory store for the whole back office.
///
/// The service catalog is immutable reference data. Everything mutable lives
/// behind one `RwLock` so that every mutation, including the slot rebuild it
/// triggers, happens under a single write lock and readers always see a slot
/// list that matches the engagement list.
pub struct Store {
    services: Vec<Service>,
    inner: RwLock<Inner>,
}

struct Inner {
    clients: Vec<Client>,
    engagements: Vec<Engagement>,
    slots: Vec<Slot>,
    next_client_id: u64,
    next_engagement_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Store {
            services: service_catalog(),
            inner: RwLock::new(seed_inner()),
        }
    }

    /// Restores the seeded fixture state. Intended for tests.
    pub fn reset(&self) {
        *self.write() = seed_inner();
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // --- services ---

    pub fn list_services(&self, active: Option<bool>, category: Option<&str>) -> Vec<Service> {
        self.services
            .iter()
            .filter(|service| active.is_none_or(|active| service.active == active))
            .filter(|service| category.is_none_or(|category| service.category == category))
            .cloned()
            .collect()
    }

    pub fn get_service(&self, id: &str) -> Result<Service, ApiError> {
        self.services
            .iter()
            .find(|service| service.id == id)
            .cloned()
            .ok_or(ApiError::NotFound("service"))
    }

    // --- clients ---

    pub fn list_clients(
        &self,
        search: Option<&str>,
        city: Option<&str>,
        status: Option<ClientStatus>,
    ) -> Vec<Client> {
        let needle = search.map(str::to_lowercase);
        self.read()
            .clients
            .iter()
            .filter(|client| {
                needle
                    .as_deref()
                    .is_none_or(|needle| client.name.to_lowercase().contains(needle))
            })
            .filter(|client| city.is_none_or(|city| client.city == city))
            .filter(|client| status.is_none_or(|status| client.status == status))
            .cloned()
            .collect()
    }

    pub fn create_client(&self, input: ClientInput) -> Result<Client, ApiError> {
        input.validate()?;
        let mut inner = self.write();
        let id = format!("c{}", inner.next_client_id);
        inner.next_client_id += 1;
        let client = Client {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            city: input.city,
            status: input.status,
            tags: input.tags,
            last_service: Utc::now(),
        };
        inner.clients.push(client.clone());
        Ok(client)
    }

    pub fn get_client(&self, id: &str) -> Result<Client, ApiError> {
        self.read()
            .clients
            .iter()
            .find(|client| client.id == id)
            .cloned()
            .ok_or(ApiError::NotFound("client"))
    }

    pub fn update_client(&self, id: &str, input: ClientInput) -> Result<Client, ApiError> {
        input.validate()?;
        let mut inner = self.write();
        let client = inner
            .clients
            .iter_mut()
            .find(|client| client.id == id)
            .ok_or(ApiError::NotFound("client"))?;
        client.name = input.name;
        client.email = input.email;
        client.phone = input.phone;
        client.city = input.city;
        client.status = input.status;
        client.tags = input.tags;
        Ok(client.clone())
    }

    pub fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        let mut inner = self.write();
        let index = inner
            .clients
            .iter()
            .position(|client| client.id == id)
            .ok_or(ApiError::NotFound("client"))?;
        inner.clients.remove(index);
        Ok(())
    }

    // --- engagements ---

    pub fn list_engagements(&self, status: Option<&str>) -> Vec<Engagement> {
        self.read()
            .engagements
            .iter()
            .filter(|engagement| status.is_none_or(|status| engagement.status == status))
            .cloned()
            .collect()
    }

    pub fn get_engagement(&self, id: &str) -> Result<Engagement, ApiError> {
        self.read()
            .engagements
            .iter()
            .find(|engagement| engagement.id == id)
            .cloned()
            .ok_or(ApiError::NotFound("engagement"))
    }

    pub fn create_engagement(&self, input: EngagementInput) -> Result<Engagement, ApiError> {
        input.validate()?;
        let mut inner = self.write();
        let id = format!("e{}", inner.next_engagement_id);
        inner.next_engagement_id += 1;
        let engagement = Engagement {
            id,
            client_id: input.client_id,
            service_id: input.service_id,
            option_ids: input.option_ids,
            scheduled_at: input.scheduled_at,
            status: input.status,
        };
        inner.engagements.push(engagement.clone());
        inner.slots = build_slots(&inner.engagements, &self.services);
        Ok(engagement)
    }

    pub fn update_engagement(
        &self,
        id: &str,
        input: EngagementInput,
    ) -> Result<Engagement, ApiError> {
        input.validate()?;
        let mut inner = self.write();
        let engagement = inner
            .engagements
            .iter_mut()
            .find(|engagement| engagement.id == id)
            .ok_or(ApiError::NotFound("engagement"))?;
        engagement.client_id = input.client_id;
        engagement.service_id = input.service_id;
        engagement.option_ids = input.option_ids;
        engagement.scheduled_at = input.scheduled_at;
        engagement.status = input.status;
        let updated = engagement.clone();
        inner.slots = build_slots(&inner.engagements, &self.services);
        Ok(updated)
    }

    // --- slots ---

    pub fn list_slots(&self) -> Vec<Slot> {
        self.read().slots.clone()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

/// Derives the slot list from the engagement list: one slot per engagement,
/// in engagement order, with the window length taken from the resolved
/// duration. Pure, so rebuilding is idempotent.
pub fn build_slots(engagements: &[Engagement], services: &[Service]) -> Vec<Slot> {
    engagements
        .iter()
        .map(|engagement| {
            let totals = resolve_totals(engagement, services);
            let start = engagement.scheduled_at;
            let end = start + Duration::minutes(i64::from(totals.duration_minutes));
            Slot {
                id: format!("slot-{}", engagement.id),
                date: start,
                start,
                end,
                engagement_id: Some(engagement.id.clone()),
            }
        })
        .collect()
}

fn seed_inner() -> Inner {
    let engagements = seed_engagements();
    let slots = build_slots(&engagements, &service_catalog());
    Inner {
        clients: seed_clients(),
        next_client_id: 4,
        next_engagement_id: 4,
        engagements,
        slots,
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

fn seed_clients() -> Vec<Client> {
    vec![
        Client {
            id: "c1".to_string(),
            name: "Horizon Group".to_string(),
            email: "contact@horizon-group.example".to_string(),
            phone: "+33 5 45 12 32 10".to_string(),
            city: "Bordeaux".to_string(),
            status: ClientStatus::Active,
            tags: vec!["Premium".to_string(), "Annual contract".to_string()],
            last_service: at(2024, 4, 8, 0, 0),
        },
        Client {
            id: "c2".to_string(),
            name: "WashandGo North".to_string(),
            email: "support@washandgo-north.example".to_string(),
            phone: "+33 3 27 84 90 12".to_string(),
            city: "Lille".to_string(),
            status: ClientStatus::Active,
            tags: vec!["Industrial".to_string()],
            last_service: at(2024, 4, 4, 0, 0),
        },
        Client {
            id: "c3".to_string(),
            name: "Textiluxe".to_string(),
            email: "hello@textiluxe.example".to_string(),
            phone: "+33 1 88 91 22 03".to_string(),
            city: "Paris".to_string(),
            status: ClientStatus::Prospect,
            tags: vec!["Retail".to_string()],
            last_service: at(2024, 3, 30, 0, 0),
        },
    ]
}

fn seed_engagements() -> Vec<Engagement> {
    vec![
        Engagement {
            id: "e1".to_string(),
            client_id: "c1".to_string(),
            service_id: "s1".to_string(),
            option_ids: vec!["o1".to_string()],
            scheduled_at: at(2024, 4, 9, 9, 0),
            status: STATUS_PLANNED.to_string(),
        },
        Engagement {
            id: "e2".to_string(),
            client_id: "c2".to_string(),
            service_id: "s2".to_string(),
            option_ids: vec!["o3".to_string()],
            scheduled_at: at(2024, 4, 9, 13, 30),
            status: STATUS_PLANNED.to_string(),
        },
        Engagement {
            id: "e3".to_string(),
            client_id: "c3".to_string(),
            service_id: "s3".to_string(),
            option_ids: vec!["o4".to_string(), "o5".to_string()],
            scheduled_at: at(2024, 4, 8, 17, 30),
            status: STATUS_DONE.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn input(service_id: &str, options: &[&str], scheduled_at: DateTime<Utc>) -> EngagementInput {
        EngagementInput {
            client_id: "c1".to_string(),
            service_id: service_id.to_string(),
            option_ids: options.iter().map(|id| id.to_string()).collect(),
            scheduled_at,
            status: STATUS_PLANNED.to_string(),
        }
    }

    #[test]
    fn seed_slots_match_seed_engagements() {
        let store = Store::new();
        let slots = store.list_slots();
        let engagements = store.list_engagements(None);
        assert_eq!(slots.len(), engagements.len());
        let slot_refs: HashSet<_> = slots
            .iter()
            .filter_map(|slot| slot.engagement_id.clone())
            .collect();
        let engagement_ids: HashSet<_> =
            engagements.iter().map(|engagement| engagement.id.clone()).collect();
        assert_eq!(slot_refs, engagement_ids);
    }

    #[test]
    fn slot_window_length_equals_resolved_duration() {
        let store = Store::new();
        for engagement in store.list_engagements(None) {
            let totals = resolve_totals(&engagement, &service_catalog());
            let slot = store
                .list_slots()
                .into_iter()
                .find(|slot| slot.engagement_id.as_deref() == Some(engagement.id.as_str()))
                .expect("slot for engagement");
            assert_eq!(
                (slot.end - slot.start).num_minutes(),
                i64::from(totals.duration_minutes)
            );
        }
    }

    #[test]
    fn rebuild_is_idempotent() {
        let store = Store::new();
        let engagements = store.list_engagements(None);
        let services = service_catalog();
        let first = build_slots(&engagements, &services);
        let second = build_slots(&engagements, &services);
        assert_eq!(first, second);
        assert_eq!(first, store.list_slots());
    }

    #[test]
    fn create_engagement_appends_slot_with_derived_window() {
        let store = Store::new();
        let scheduled_at = at(2024, 4, 9, 9, 0);
        let engagement = store
            .create_engagement(input("s1", &["o1"], scheduled_at))
            .expect("create");
        assert_eq!(engagement.id, "e4");

        let slots = store.list_slots();
        assert_eq!(slots.len(), 4);
        let slot = slots.last().expect("new slot");
        assert_eq!(slot.id, "slot-e4");
        assert_eq!(slot.start, scheduled_at);
        // 120 base + 30 for o1 = 150 minutes.
        assert_eq!(slot.end, at(2024, 4, 9, 11, 30));
    }

    #[test]
    fn update_changes_only_the_matching_slot() {
        let store = Store::new();
        let before = store.list_slots();
        let engagement = store.get_engagement("e2").expect("seed engagement");

        store
            .update_engagement(
                "e2",
                EngagementInput {
                    client_id: engagement.client_id,
                    service_id: engagement.service_id,
                    option_ids: engagement.option_ids,
                    scheduled_at: at(2024, 4, 10, 8, 0),
                    status: engagement.status,
                },
            )
            .expect("update");

        let after = store.list_slots();
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(&after) {
            if old.engagement_id.as_deref() == Some("e2") {
                assert_eq!(new.start, at(2024, 4, 10, 8, 0));
                assert_eq!(new.end, at(2024, 4, 10, 9, 50));
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn update_unknown_engagement_is_not_found() {
        let store = Store::new();
        let err = store
            .update_engagement("e99", input("s1", &[], at(2024, 4, 9, 9, 0)))
            .unwrap_err();
        assert_eq!(err, ApiError::NotFound("engagement"));
    }

    #[test]
    fn engagement_with_unknown_service_gets_zero_length_slot() {
        let store = Store::new();
        let scheduled_at = at(2024, 5, 1, 10, 0);
        store
            .create_engagement(input("s99", &[], scheduled_at))
            .expect("create");
        let slot = store.list_slots().into_iter().last().expect("slot");
        assert_eq!(slot.start, scheduled_at);
        assert_eq!(slot.end, scheduled_at);
    }

    #[test]
    fn list_engagements_filters_by_exact_status() {
        let store = Store::new();
        let planned = store.list_engagements(Some(STATUS_PLANNED));
        assert_eq!(planned.len(), 2);
        let done = store.list_engagements(Some(STATUS_DONE));
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, "e3");
        assert!(store.list_engagements(Some("cancelled")).is_empty());
    }

    #[test]
    fn client_ids_stay_unique_after_delete_and_recreate() {
        let store = Store::new();
        store.delete_client("c3").expect("delete");
        let created = store
            .create_client(ClientInput {
                name: "Fresh Offices".to_string(),
                email: "desk@fresh-offices.example".to_string(),
                phone: "+33 4 11 22 33 44".to_string(),
                city: "Lyon".to_string(),
                status: ClientStatus::Prospect,
                tags: Vec::new(),
            })
            .expect("create");
        // A size-based id scheme would hand out c3 again here.
        assert_eq!(created.id, "c4");
    }

    #[test]
    fn client_search_is_case_insensitive_substring() {
        let store = Store::new();
        let hits = store.list_clients(Some("texti"), None, None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c3");
        assert!(store
            .list_clients(Some("texti"), None, Some(ClientStatus::Active))
            .is_empty());
        assert_eq!(store.list_clients(None, Some("Lille"), None).len(), 1);
    }

    #[test]
    fn client_crud_round_trip() {
        let store = Store::new();
        let fetched = store.get_client("c1").expect("seed client");
        assert_eq!(fetched.name, "Horizon Group");

        let updated = store
            .update_client(
                "c1",
                ClientInput {
                    name: "Horizon Group".to_string(),
                    email: "billing@horizon-group.example".to_string(),
                    phone: "+33 5 45 12 32 10".to_string(),
                    city: "Bordeaux".to_string(),
                    status: ClientStatus::Active,
                    tags: vec!["Premium".to_string()],
                },
            )
            .expect("update");
        assert_eq!(updated.email, "billing@horizon-group.example");
        // last_service survives updates untouched.
        assert_eq!(updated.last_service, at(2024, 4, 8, 0, 0));

        store.delete_client("c1").expect("delete");
        assert_eq!(store.get_client("c1"), Err(ApiError::NotFound("client")));
        assert_eq!(store.delete_client("c1"), Err(ApiError::NotFound("client")));
    }

    #[test]
    fn validation_rejects_before_mutation() {
        let store = Store::new();
        let err = store
            .create_client(ClientInput {
                name: "  ".to_string(),
                email: "not-an-email".to_string(),
                phone: String::new(),
                city: "Paris".to_string(),
                status: ClientStatus::Active,
                tags: Vec::new(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(store.list_clients(None, None, None).len(), 3);

        let err = store
            .create_engagement(EngagementInput {
                client_id: String::new(),
                service_id: "s1".to_string(),
                option_ids: Vec::new(),
                scheduled_at: at(2024, 4, 9, 9, 0),
                status: STATUS_PLANNED.to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(store.list_engagements(None).len(), 3);
        assert_eq!(store.list_slots().len(), 3);
    }

    #[test]
    fn reset_restores_the_seed_state() {
        let store = Store::new();
        store
            .create_engagement(input("s1", &[], at(2024, 5, 1, 9, 0)))
            .expect("create");
        store.delete_client("c2").expect("delete");

        store.reset();
        assert_eq!(store.list_engagements(None).len(), 3);
        assert_eq!(store.list_clients(None, None, None).len(), 3);
        assert_eq!(store.list_slots().len(), 3);
    }

    #[test]
    fn service_filters() {
        let store = Store::new();
        assert_eq!(store.list_services(None, None).len(), 3);
        assert!(store.list_services(Some(false), None).is_empty());
        let sofas = store.list_services(None, Some("Sofa"));
        assert_eq!(sofas.len(), 1);
        assert_eq!(sofas[0].id, "s2");
        assert_eq!(store.get_service("s9"), Err(ApiError::NotFound("service")));
    }
}
