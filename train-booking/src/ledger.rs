//! Seat ledger queries.
//!
//! Every answer is derived from the train's capacity and its booked
//! tickets; nothing is stored per segment. A ticket counts against a query
//! only when its half-open span overlaps the query span (see
//! [`crate::domain::overlaps`]).

use tracing::trace;

use crate::booking::QueryError;
use crate::domain::{Station, Train};

/// Seats free for the whole of a journey from `from` to `to`.
///
/// Starts from the train's capacity and subtracts the passengers of every
/// ticket whose span overlaps `[from, to)`. The result is negative when the
/// train is overbooked on that stretch.
///
/// # Examples
///
/// ```
/// use train_booking::domain::{ClockTime, NewTrain, Passenger, Station, Train, TrainId};
/// use train_booking::ledger::available_seats;
/// use Station::*;
///
/// let mut train = Train::new(
///     TrainId(1),
///     NewTrain {
///         route: vec![Delhi, Agra, Bhopal, Nagpur],
///         departure: ClockTime::parse_hhmm("08:00").unwrap(),
///         capacity: 2,
///     },
/// )
/// .unwrap();
/// train.book(Delhi, Bhopal, vec![Passenger::new(30)]).unwrap();
/// train.book(Agra, Nagpur, vec![Passenger::new(45)]).unwrap();
///
/// assert_eq!(available_seats(&train, Delhi, Nagpur).unwrap(), 0);
/// assert_eq!(available_seats(&train, Bhopal, Nagpur).unwrap(), 1);
/// ```
pub fn available_seats(train: &Train, from: Station, to: Station) -> Result<i64, QueryError> {
    let route = train.route();
    let query = route.span_between(from, to).ok_or_else(|| {
        let missing = if route.contains(from) { to } else { from };
        QueryError::StationNotOnRoute(missing)
    })?;
    let mut available = i64::from(train.capacity());

    for ticket in train.tickets() {
        if ticket.span().overlaps(&query) {
            trace!(
                train = %train.id(),
                from = %ticket.from(),
                to = %ticket.to(),
                seats = ticket.passenger_count(),
                "ticket occupies query span"
            );
            available -= i64::from(ticket.passenger_count());
        }
    }

    Ok(available)
}

/// Number of passengers boarding at `station`.
///
/// Counts passengers on tickets whose boarding station is exactly
/// `station`. Fails if the train does not call there.
pub fn boarding_count_at(train: &Train, station: Station) -> Result<u32, QueryError> {
    if !train.route().contains(station) {
        return Err(QueryError::StationNotOnRoute(station));
    }

    Ok(train
        .tickets()
        .iter()
        .filter(|t| t.from() == station)
        .map(|t| t.passenger_count())
        .sum())
}

/// Age of the oldest passenger anywhere on the train, or 0 if nobody is
/// booked.
pub fn oldest_passenger_age(train: &Train) -> u32 {
    train
        .tickets()
        .iter()
        .filter_map(|t| t.oldest_age())
        .max()
        .unwrap_or(0)
}
