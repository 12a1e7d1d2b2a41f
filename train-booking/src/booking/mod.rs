//! Booking facade.
//!
//! Resolves train ids through a [`TrainStore`](crate::store::TrainStore)
//! and runs the seat ledger and schedule queries on the returned snapshot.

mod error;
mod service;

pub use error::{BookingError, QueryError};
pub use service::BookingService;
