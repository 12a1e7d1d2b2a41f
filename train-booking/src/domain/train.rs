//! Train types.
//!
//! A `Train` owns its immutable `Route`, its seat capacity, its departure
//! time and the append-only list of tickets booked on it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::route::Route;
use super::station::Station;
use super::ticket::{Passenger, Ticket};
use super::time::ClockTime;

/// Identifier assigned to a train by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainId(pub u64);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters for creating a train, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrain {
    /// Stations in the order the train visits them
    pub route: Vec<Station>,
    /// Departure time from the first station
    pub departure: ClockTime,
    /// Total number of seats
    pub capacity: u32,
}

/// A train running a fixed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    id: TrainId,
    route: Route,
    capacity: u32,
    departure: ClockTime,
    tickets: Vec<Ticket>,
}

impl Train {
    /// Build a train with no tickets.
    ///
    /// Fails if the route is invalid or the capacity is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_booking::domain::{ClockTime, NewTrain, Station, Train, TrainId};
    ///
    /// let train = Train::new(
    ///     TrainId(1),
    ///     NewTrain {
    ///         route: vec![Station::Mumbai, Station::Pune],
    ///         departure: ClockTime::parse_hhmm("06:15").unwrap(),
    ///         capacity: 120,
    ///     },
    /// )
    /// .unwrap();
    /// assert_eq!(train.capacity(), 120);
    /// assert!(train.tickets().is_empty());
    /// ```
    pub fn new(id: TrainId, params: NewTrain) -> Result<Self, DomainError> {
        if params.capacity == 0 {
            return Err(DomainError::ZeroCapacity);
        }

        Ok(Self {
            id,
            route: Route::new(params.route)?,
            capacity: params.capacity,
            departure: params.departure,
            tickets: Vec::new(),
        })
    }

    /// Book a ticket on this train and append it to the ticket list.
    ///
    /// The ticket is validated against this train's route. Overbooking is
    /// allowed.
    pub fn book(
        &mut self,
        from: Station,
        to: Station,
        passengers: Vec<Passenger>,
    ) -> Result<&Ticket, DomainError> {
        let ticket = Ticket::new(&self.route, self.id, from, to, passengers)?;
        self.tickets.push(ticket);
        Ok(&self.tickets[self.tickets.len() - 1])
    }

    /// Returns the train id.
    pub fn id(&self) -> TrainId {
        self.id
    }

    /// Returns the route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns the total number of seats.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the departure time from the first station.
    pub fn departure(&self) -> ClockTime {
        self.departure
    }

    /// Returns all tickets in booking order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }
}
