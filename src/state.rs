use std::sync::Arc;

use crate::calendar::{CalendarFeed, EmptyCalendar};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub calendar: Arc<dyn CalendarFeed>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_calendar(Arc::new(EmptyCalendar))
    }

    pub fn with_calendar(calendar: Arc<dyn CalendarFeed>) -> Self {
        AppState {
            store: Arc::new(Store::new()),
            calendar,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}
