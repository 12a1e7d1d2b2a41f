//! Route and position types.
//!
//! A `Route` is the ordered list of stations a train visits. Route order is
//! the only source of "before/after" between stations, so every query turns
//! stations into `RoutePosition`s through `Route::position_of` before
//! comparing them.

use std::collections::HashMap;

use super::error::DomainError;
use super::span::Span;
use super::station::Station;

/// Zero-based position of a station within a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePosition(pub usize);

/// An immutable, ordered sequence of distinct stations.
///
/// The station → position map is built once at construction, so lookups do
/// not rescan the route.
///
/// # Examples
///
/// ```
/// use train_booking::domain::{Route, RoutePosition, Station};
///
/// let route = Route::new(vec![Station::Delhi, Station::Agra, Station::Bhopal]).unwrap();
/// assert_eq!(route.position_of(Station::Agra), Some(RoutePosition(1)));
/// assert_eq!(route.position_of(Station::Mumbai), None);
///
/// // Stations may appear at most once
/// assert!(Route::new(vec![Station::Delhi, Station::Agra, Station::Delhi]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<Station>,
    positions: HashMap<Station, RoutePosition>,
}

impl Route {
    /// Build a route from an ordered list of stations.
    ///
    /// Fails if the list is empty or repeats a station. A single-station
    /// route is valid; it cannot carry a ticket but still appears in
    /// schedule queries at its departure time.
    pub fn new(stations: Vec<Station>) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        let mut positions = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            if positions.insert(*station, RoutePosition(idx)).is_some() {
                return Err(DomainError::DuplicateStation(*station));
            }
        }

        Ok(Self {
            stations,
            positions,
        })
    }

    /// Returns the position of `station`, or `None` if the route skips it.
    pub fn position_of(&self, station: Station) -> Option<RoutePosition> {
        self.positions.get(&station).copied()
    }

    /// Does the route call at `station`?
    pub fn contains(&self, station: Station) -> bool {
        self.positions.contains_key(&station)
    }

    /// Returns the half-open span from `from` to `to`.
    ///
    /// Returns `None` if either station is not on the route. The span is
    /// returned as given even if `from` comes after `to`.
    pub fn span_between(&self, from: Station, to: Station) -> Option<Span> {
        Some(Span::new(self.position_of(from)?, self.position_of(to)?))
    }

    /// Returns the stations in route order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the first station.
    pub fn origin(&self) -> Station {
        self.stations[0]
    }

    /// Returns the last station.
    pub fn terminus(&self) -> Station {
        self.stations[self.stations.len() - 1]
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false: routes have at least one station.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
