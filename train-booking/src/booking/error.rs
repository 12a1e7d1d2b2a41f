//! Booking error types.

use crate::domain::{DomainError, Station, TrainId};
use crate::store::StoreError;

/// Errors from the four booking queries.
///
/// Both are validation outcomes, never transient: callers should treat them
/// as terminal for the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A station argument is not on the train's route
    #[error("train does not pass through station {0}")]
    StationNotOnRoute(Station),

    /// The train id does not resolve
    #[error("train {0} not found")]
    TrainNotFound(TrainId),
}

/// Errors from the booking facade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// Query failed
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Train or ticket failed validation
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TrainNotFound(id) => BookingError::Query(QueryError::TrainNotFound(id)),
            StoreError::Invalid(e) => BookingError::Invalid(e),
        }
    }
}
