use chrono::{DateTime, Utc};
use serde::Serialize;

/// An event read from an external calendar. Opaque to the store: slots are
/// never derived from it and nothing here writes back to the calendar.
#[derive(Debug, Clone, Serialize)]
pub struct ExternalEvent {
    pub id: String,
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Read-only feed of external calendar events. The real integration lives
/// outside this service; implementations must not block on the store.
pub trait CalendarFeed: Send + Sync {
    fn events(&self) -> Vec<ExternalEvent>;
}

/// Feed used when no calendar integration is configured.
pub struct EmptyCalendar;

impl CalendarFeed for EmptyCalendar {
    fn events(&self) -> Vec<ExternalEvent> {
        Vec::new()
    }
}
