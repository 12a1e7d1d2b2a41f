//! Schedule queries.
//!
//! Arrival times are not timetabled: a train reaches the station at route
//! position `i` exactly `i` hours after it departs, with the minute held
//! from the departure time. Times are compared as minutes since midnight on
//! a single day, so an arrival that would fall after midnight lies outside
//! every window.

use crate::domain::{ClockTime, Station, Train, TrainId};

/// Minutes since midnight at which `train` reaches `station`.
///
/// Returns `None` if the route does not call at `station`. The value is not
/// wrapped at midnight.
///
/// # Examples
///
/// ```
/// use train_booking::domain::{ClockTime, NewTrain, Station, Train, TrainId};
/// use train_booking::schedule::arrival_at;
///
/// let train = Train::new(
///     TrainId(1),
///     NewTrain {
///         route: vec![Station::Delhi, Station::Agra, Station::Bhopal],
///         departure: ClockTime::parse_hhmm("22:30").unwrap(),
///         capacity: 10,
///     },
/// )
/// .unwrap();
///
/// assert_eq!(arrival_at(&train, Station::Delhi), Some(22 * 60 + 30));
/// assert_eq!(arrival_at(&train, Station::Bhopal), Some(24 * 60 + 30));
/// assert_eq!(arrival_at(&train, Station::Pune), None);
/// ```
pub fn arrival_at(train: &Train, station: Station) -> Option<u32> {
    let pos = train.route().position_of(station)?;
    let departure = train.departure();
    Some((departure.hour() + pos.0 as u32) * 60 + departure.minute())
}

/// Trains that reach `station` between `start` and `end`, both inclusive.
///
/// Trains whose route skips `station` are left out. Each train appears at
/// most once, in the order `trains` yields them. An inverted window
/// (`start` after `end`) matches nothing.
pub fn trains_through_station_in_window<'a, I>(
    trains: I,
    station: Station,
    start: ClockTime,
    end: ClockTime,
) -> Vec<TrainId>
where
    I: IntoIterator<Item = &'a Train>,
{
    let window = start.minutes_since_midnight()..=end.minutes_since_midnight();

    trains
        .into_iter()
        .filter(|train| arrival_at(train, station).is_some_and(|t| window.contains(&t)))
        .map(Train::id)
        .collect()
}
