//! Domain error types.
//!
//! These errors represent validation failures when building trains and
//! tickets. Query-time failures live in `crate::booking`.

use super::Station;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route has no stations
    #[error("route must have at least one station")]
    EmptyRoute,

    /// Route visits a station more than once
    #[error("station {0} appears more than once in route")]
    DuplicateStation(Station),

    /// Train was given no seats
    #[error("train must have at least one seat")]
    ZeroCapacity,

    /// Ticket carries no passengers
    #[error("ticket must have at least one passenger")]
    NoPassengers,

    /// Ticket carries more passengers than a seat count can hold
    #[error("ticket has too many passengers: {0}")]
    TooManyPassengers(usize),

    /// Ticket station is not on the train's route
    #[error("station {0} is not on this train's route")]
    StationNotOnRoute(Station),

    /// Ticket boards at or after its destination
    #[error("ticket from {from} to {to} does not travel forward along the route")]
    BackwardsTicket { from: Station, to: Station },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyRoute;
        assert_eq!(err.to_string(), "route must have at least one station");

        let err = DomainError::DuplicateStation(Station::Agra);
        assert_eq!(err.to_string(), "station AGRA appears more than once in route");

        let err = DomainError::ZeroCapacity;
        assert_eq!(err.to_string(), "train must have at least one seat");

        let err = DomainError::NoPassengers;
        assert_eq!(err.to_string(), "ticket must have at least one passenger");

        let err = DomainError::TooManyPassengers(5_000_000_000);
        assert_eq!(err.to_string(), "ticket has too many passengers: 5000000000");

        let err = DomainError::StationNotOnRoute(Station::Patna);
        assert_eq!(err.to_string(), "station PATNA is not on this train's route");

        let err = DomainError::BackwardsTicket {
            from: Station::Pune,
            to: Station::Mumbai,
        };
        assert_eq!(
            err.to_string(),
            "ticket from PUNE to MUMBAI does not travel forward along the route"
        );
    }
}
