use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const STATUS_PLANNED: &str = "planned";
pub const STATUS_DONE: &str = "done";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Prospect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOption {
    pub id: String,
    pub label: String,
    pub extra_price: f64,
    pub extra_duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub base_price: f64,
    pub base_duration: u32,
    pub options: Vec<ServiceOption>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub status: ClientStatus,
    pub tags: Vec<String>,
    pub last_service: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub status: ClientStatus,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ClientInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("name is required");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            errors.push("a valid email is required");
        }
        if self.phone.trim().is_empty() {
            errors.push("phone is required");
        }
        if self.city.trim().is_empty() {
            errors.push("city is required");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors.join(", ")))
        }
    }
}

/// Status is an opaque tag; `planned` and `done` are the known values but no
/// transition rules are enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Engagement {
    pub id: String,
    pub client_id: String,
    pub service_id: String,
    pub option_ids: Vec<String>,
    pub scheduled_at: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngagementInput {
    pub client_id: String,
    pub service_id: String,
    #[serde(default)]
    pub option_ids: Vec<String>,
    pub scheduled_at: DateTime<Utc>,
    pub status: String,
}

impl EngagementInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.client_id.trim().is_empty() {
            errors.push("client_id is required");
        }
        if self.service_id.trim().is_empty() {
            errors.push("service_id is required");
        }
        if self.status.trim().is_empty() {
            errors.push("status is required");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors.join(", ")))
        }
    }
}

/// A derived calendar window. Never mutated directly: the whole collection is
/// rebuilt from the engagement list on every engagement create or update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub id: String,
    pub date: DateTime<Utc>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub engagement_id: Option<String>,
}
