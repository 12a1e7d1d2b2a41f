//! Station types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a name that is not a known station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station: {name:?}")]
pub struct InvalidStation {
    name: String,
}

/// A station from the fixed network.
///
/// The set is closed: every route, ticket and query refers to one of these
/// values, so there is no separate station registry to validate against.
///
/// # Examples
///
/// ```
/// use train_booking::domain::Station;
///
/// let delhi = Station::parse("DELHI").unwrap();
/// assert_eq!(delhi, Station::Delhi);
/// assert_eq!(delhi.as_str(), "DELHI");
///
/// // Surrounding whitespace and case are ignored
/// assert_eq!(Station::parse(" pune ").unwrap(), Station::Pune);
///
/// // Unknown names are rejected
/// assert!(Station::parse("ATLANTIS").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Station {
    Agra,
    Ahmedabad,
    Bangalore,
    Bhopal,
    Chandigarh,
    Chennai,
    Delhi,
    Hyderabad,
    Jaipur,
    Kanpur,
    Kolkata,
    Lucknow,
    Mumbai,
    Nagpur,
    Patna,
    Pune,
}

impl Station {
    /// Every station, in declaration order.
    pub const ALL: [Station; 16] = [
        Station::Agra,
        Station::Ahmedabad,
        Station::Bangalore,
        Station::Bhopal,
        Station::Chandigarh,
        Station::Chennai,
        Station::Delhi,
        Station::Hyderabad,
        Station::Jaipur,
        Station::Kanpur,
        Station::Kolkata,
        Station::Lucknow,
        Station::Mumbai,
        Station::Nagpur,
        Station::Patna,
        Station::Pune,
    ];

    /// Parse a station name.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|station| station.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidStation {
                name: s.to_string(),
            })
    }

    /// Returns the canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Station::Agra => "AGRA",
            Station::Ahmedabad => "AHMEDABAD",
            Station::Bangalore => "BANGALORE",
            Station::Bhopal => "BHOPAL",
            Station::Chandigarh => "CHANDIGARH",
            Station::Chennai => "CHENNAI",
            Station::Delhi => "DELHI",
            Station::Hyderabad => "HYDERABAD",
            Station::Jaipur => "JAIPUR",
            Station::Kanpur => "KANPUR",
            Station::Kolkata => "KOLKATA",
            Station::Lucknow => "LUCKNOW",
            Station::Mumbai => "MUMBAI",
            Station::Nagpur => "NAGPUR",
            Station::Patna => "PATNA",
            Station::Pune => "PUNE",
        }
    }
}

impl FromStr for Station {
    type Err = InvalidStation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
