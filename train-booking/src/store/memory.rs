//! In-memory train store.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{NewTrain, Ticket, Train, TrainId};

use super::{NewTicket, StoreError, TrainStore};

#[derive(Debug, Default)]
struct Inner {
    /// Last id handed out; ids start at 1.
    last_id: u64,
    trains: BTreeMap<TrainId, Arc<Train>>,
}

/// Thread-safe in-memory store.
///
/// Trains are held as `Arc<Train>`. Booking a ticket copies the train if a
/// reader still holds the old snapshot, so readers never see a half-applied
/// append.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrainStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryTrainStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored trains.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.trains.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.trains.is_empty()
    }
}

impl TrainStore for InMemoryTrainStore {
    async fn create_train(&self, params: NewTrain) -> Result<Arc<Train>, StoreError> {
        let mut guard = self.inner.write().await;

        let id = TrainId(guard.last_id + 1);
        let train = Arc::new(Train::new(id, params)?);
        guard.last_id = id.0;
        guard.trains.insert(id, train.clone());

        debug!(train = %id, stations = train.route().len(), "created train");
        Ok(train)
    }

    async fn get_train_by_id(&self, id: TrainId) -> Result<Arc<Train>, StoreError> {
        let guard = self.inner.read().await;
        guard
            .trains
            .get(&id)
            .cloned()
            .ok_or(StoreError::TrainNotFound(id))
    }

    async fn get_all_trains(&self) -> Vec<Arc<Train>> {
        let guard = self.inner.read().await;
        guard.trains.values().cloned().collect()
    }

    async fn add_ticket(&self, id: TrainId, ticket: NewTicket) -> Result<Ticket, StoreError> {
        let mut guard = self.inner.write().await;
        let train = guard
            .trains
            .get_mut(&id)
            .ok_or(StoreError::TrainNotFound(id))?;

        let booked = Arc::make_mut(train)
            .book(ticket.from, ticket.to, ticket.passengers)?
            .clone();

        debug!(
            train = %id,
            from = %booked.from(),
            to = %booked.to(),
            passengers = booked.passenger_count(),
            "booked ticket"
        );
        Ok(booked)
    }
}
