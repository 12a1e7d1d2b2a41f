//! Ticket and passenger types.
//!
//! A `Ticket` books one or more seats on a single train between two
//! stations of its route. The span is resolved against the route once, at
//! booking time, and carried with the ticket.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::route::Route;
use super::span::Span;
use super::station::Station;
use super::train::TrainId;

/// A passenger travelling on a ticket. Each passenger occupies one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passenger {
    /// Age in whole years
    pub age: u32,
}

impl Passenger {
    /// Creates a passenger of the given age.
    pub fn new(age: u32) -> Self {
        Self { age }
    }
}

/// A booking between two stations on one train's route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    train_id: TrainId,
    from: Station,
    to: Station,
    span: Span,
    passengers: Vec<Passenger>,
    seats: u32,
}

impl Ticket {
    /// Validate and build a ticket against a train's route.
    ///
    /// Both stations must be on `route`, `from` must come strictly before
    /// `to`, and at least one passenger is required. The passenger count
    /// must fit in a `u32`. Seat capacity is not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_booking::domain::{Passenger, Route, Station, Ticket, TrainId};
    ///
    /// let route = Route::new(vec![Station::Delhi, Station::Agra, Station::Bhopal]).unwrap();
    ///
    /// let ticket = Ticket::new(
    ///     &route,
    ///     TrainId(1),
    ///     Station::Delhi,
    ///     Station::Bhopal,
    ///     vec![Passenger::new(30), Passenger::new(64)],
    /// )
    /// .unwrap();
    /// assert_eq!(ticket.passenger_count(), 2);
    ///
    /// // Travelling backwards is rejected
    /// let backwards = Ticket::new(
    ///     &route,
    ///     TrainId(1),
    ///     Station::Bhopal,
    ///     Station::Agra,
    ///     vec![Passenger::new(30)],
    /// );
    /// assert!(backwards.is_err());
    /// ```
    pub fn new(
        route: &Route,
        train_id: TrainId,
        from: Station,
        to: Station,
        passengers: Vec<Passenger>,
    ) -> Result<Self, DomainError> {
        let seats = seat_count(passengers.len())?;

        let start = route
            .position_of(from)
            .ok_or(DomainError::StationNotOnRoute(from))?;
        let end = route
            .position_of(to)
            .ok_or(DomainError::StationNotOnRoute(to))?;

        if start >= end {
            return Err(DomainError::BackwardsTicket { from, to });
        }

        Ok(Self {
            train_id,
            from,
            to,
            span: Span::new(start, end),
            passengers,
            seats,
        })
    }

    /// The train this ticket is booked on.
    pub fn train_id(&self) -> TrainId {
        self.train_id
    }

    /// Boarding station.
    pub fn from(&self) -> Station {
        self.from
    }

    /// Destination station.
    pub fn to(&self) -> Station {
        self.to
    }

    /// Positions occupied on the train's route, `[boarding, destination)`.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Passengers on this ticket (never empty).
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Number of seats this ticket occupies.
    pub fn passenger_count(&self) -> u32 {
        self.seats
    }

    /// Age of the oldest passenger on this ticket.
    pub fn oldest_age(&self) -> Option<u32> {
        self.passengers.iter().map(|p| p.age).max()
    }
}

/// Seats taken by `len` passengers.
fn seat_count(len: usize) -> Result<u32, DomainError> {
    if len == 0 {
        return Err(DomainError::NoPassengers);
    }
    u32::try_from(len).map_err(|_| DomainError::TooManyPassengers(len))
}
