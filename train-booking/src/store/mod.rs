//! Train storage.
//!
//! The booking queries never talk to storage directly: the facade in
//! `crate::booking` pulls an `Arc<Train>` snapshot from a [`TrainStore`] and
//! hands it to the pure query functions.

mod error;
mod memory;

use std::future::Future;
use std::sync::Arc;

use crate::domain::{NewTrain, Passenger, Station, Ticket, Train, TrainId};

pub use error::StoreError;
pub use memory::InMemoryTrainStore;

/// Parameters for booking a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    /// Boarding station
    pub from: Station,
    /// Destination station
    pub to: Station,
    /// Passengers travelling on the ticket
    pub passengers: Vec<Passenger>,
}

/// Storage for trains and their tickets.
///
/// Implementations assign train ids, keep routes immutable and serialise
/// ticket appends. Snapshots returned from the getters do not change when
/// later tickets are booked.
pub trait TrainStore: Send + Sync {
    /// Validate and store a new train, assigning its id.
    fn create_train(
        &self,
        params: NewTrain,
    ) -> impl Future<Output = Result<Arc<Train>, StoreError>> + Send;

    /// Fetch a snapshot of one train.
    fn get_train_by_id(
        &self,
        id: TrainId,
    ) -> impl Future<Output = Result<Arc<Train>, StoreError>> + Send;

    /// Fetch snapshots of every train, in ascending id order.
    fn get_all_trains(&self) -> impl Future<Output = Vec<Arc<Train>>> + Send;

    /// Validate a ticket against the train's route and append it.
    fn add_ticket(
        &self,
        id: TrainId,
        ticket: NewTicket,
    ) -> impl Future<Output = Result<Ticket, StoreError>> + Send;
}
