use crate::models::CalendarData;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Mutex<CalendarData>>,
}

impl AppState {
    pub fn new(data: CalendarData) -> Self {
        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }
}
