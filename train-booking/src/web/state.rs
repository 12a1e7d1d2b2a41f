//! Application state for the web layer.

use std::sync::Arc;

use crate::booking::BookingService;
use crate::store::InMemoryTrainStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Booking facade over the train store
    pub booking: Arc<BookingService<InMemoryTrainStore>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(booking: BookingService<InMemoryTrainStore>) -> Self {
        Self {
            booking: Arc::new(booking),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BookingService::new(InMemoryTrainStore::new()))
    }
}
