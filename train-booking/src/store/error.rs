//! Store error types.

use crate::domain::{DomainError, TrainId};

/// Errors returned by a [`TrainStore`](super::TrainStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No train has this id
    #[error("train {0} not found")]
    TrainNotFound(TrainId),

    /// The train or ticket failed validation
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;

    #[test]
    fn error_display() {
        let err = StoreError::TrainNotFound(TrainId(4));
        assert_eq!(err.to_string(), "train 4 not found");

        let err = StoreError::from(DomainError::DuplicateStation(Station::Pune));
        assert_eq!(err.to_string(), "station PUNE appears more than once in route");
    }
}
