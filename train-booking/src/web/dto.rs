//! Data transfer objects for web requests and responses.
//!
//! Station and time fields arrive as plain strings and are parsed by the
//! handlers, so malformed values become 400 responses with a readable
//! message.

use serde::{Deserialize, Serialize};

use crate::domain::{Passenger, Station, TrainId};

/// Request to add a train.
#[derive(Debug, Deserialize)]
pub struct AddTrainRequest {
    /// Station names in route order
    pub route: Vec<String>,

    /// Departure time in HH:MM format
    pub departure_time: String,

    /// Total number of seats
    pub seats: u32,
}

/// Response after adding a train.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AddTrainResponse {
    pub train_id: TrainId,
}

/// Request to book a ticket.
#[derive(Debug, Deserialize)]
pub struct BookTicketRequest {
    /// Boarding station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Passengers on the ticket
    pub passengers: Vec<Passenger>,
}

/// A booked ticket.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TicketResponse {
    pub train_id: TrainId,
    pub from: Station,
    pub to: Station,
    pub passengers: u32,
}

/// Query parameters for seat availability.
#[derive(Debug, Deserialize)]
pub struct SeatAvailabilityQuery {
    pub from: String,
    pub to: String,
}

/// Seat availability between two stations.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SeatAvailabilityResponse {
    pub train_id: TrainId,
    pub from: Station,
    pub to: Station,

    /// Negative when the stretch is overbooked
    pub available_seats: i64,
}

/// Query parameters for boarding counts.
#[derive(Debug, Deserialize)]
pub struct BoardingQuery {
    pub station: String,
}

/// Passengers boarding at a station.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BoardingCountResponse {
    pub train_id: TrainId,
    pub station: Station,
    pub boarding_count: u32,
}

/// Oldest passenger on a train.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OldestPassengerResponse {
    pub train_id: TrainId,

    /// 0 when nobody is booked
    pub oldest_age: u32,
}

/// Query parameters for trains passing a station.
#[derive(Debug, Deserialize)]
pub struct PassingTrainsQuery {
    pub station: String,

    /// Window start, HH:MM, inclusive
    pub start: String,

    /// Window end, HH:MM, inclusive
    pub end: String,
}

/// Trains passing a station within a window.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PassingTrainsResponse {
    pub train_ids: Vec<TrainId>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
