//! Clock time handling.
//!
//! Departure times and query windows are plain times of day. Seconds and
//! sub-second components are always zero, and the booking model assumes
//! every journey happens on a single calendar day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day with minute precision.
///
/// # Examples
///
/// ```
/// use train_booking::domain::ClockTime;
///
/// let time = ClockTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(time.hour(), 14);
/// assert_eq!(time.minute(), 30);
/// assert_eq!(time.minutes_since_midnight(), 870);
/// assert_eq!(time.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    time: NaiveTime,
}

impl ClockTime {
    /// Create a time from hour and minute, if both are in range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self { time })
    }

    /// Parse a time from "HH:MM" or "HH:MM:SS" format.
    ///
    /// The seconds field, when present, must be "00".
    ///
    /// # Examples
    ///
    /// ```
    /// use train_booking::domain::ClockTime;
    ///
    /// // Valid times
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    /// assert!(ClockTime::parse_hhmm("09:15:00").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("14:3").is_err());
    /// assert!(ClockTime::parse_hhmm("25:00").is_err());
    /// assert!(ClockTime::parse_hhmm("10:00:30").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        match bytes.len() {
            5 => {}
            8 => {
                if bytes[5] != b':' {
                    return Err(TimeError::new("expected colon at position 5"));
                }
                if &bytes[6..8] != b"00" {
                    return Err(TimeError::new("seconds must be 00"));
                }
            }
            _ => return Err(TimeError::new("expected HH:MM format")),
        }

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns `hour * 60 + minute`.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(time("00:00").minutes_since_midnight(), 0);
        assert_eq!(time("23:59").minutes_since_midnight(), 1439);
        assert_eq!(time("10:30").minutes_since_midnight(), 630);
        assert_eq!(time("10:30:00"), time("10:30"));
    }

    #[test]
    fn reject_malformed() {
        assert!(ClockTime::parse_hhmm("").is_err());
        assert!(ClockTime::parse_hhmm("10-30").is_err());
        assert!(ClockTime::parse_hhmm("ab:cd").is_err());
        assert!(ClockTime::parse_hhmm("10:30:0").is_err());
        assert!(ClockTime::parse_hhmm("10:30-00").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert_eq!(
            ClockTime::parse_hhmm("24:00").unwrap_err().to_string(),
            "invalid time: hour must be 0-23"
        );
        assert_eq!(
            ClockTime::parse_hhmm("12:60").unwrap_err().to_string(),
            "invalid time: minute must be 0-59"
        );
    }

    #[test]
    fn reject_nonzero_seconds() {
        assert_eq!(
            ClockTime::parse_hhmm("12:00:01").unwrap_err().to_string(),
            "invalid time: seconds must be 00"
        );
    }

    #[test]
    fn ordering_follows_clock() {
        assert!(time("09:59") < time("10:00"));
        assert!(time("00:01") > time("00:00"));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(time("07:05").to_string(), "07:05");
        assert_eq!(format!("{:?}", time("07:05")), "ClockTime(07:05)");
    }

    #[test]
    fn serde_as_string() {
        let json = serde_json::to_string(&time("06:40")).unwrap();
        assert_eq!(json, "\"06:40\"");

        let back: ClockTime = serde_json::from_str("\"18:05\"").unwrap();
        assert_eq!(back, time("18:05"));

        assert!(serde_json::from_str::<ClockTime>("\"18:5\"").is_err());
    }
}
