//! Clock-time arithmetic for timetable entries.
//!
//! Timetables give times as "HH:MM" strings on a single 24-hour clock, with no
//! date attached. Durations that run past midnight wrap around, so a leg from
//! 23:00 to 01:00 takes two hours.

use std::{fmt, str::FromStr};

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned when a clock time is not in "HH:MM" form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time {text:?}: expected HH:MM")]
pub struct ParseError {
    text: String,
}

impl ParseError {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }

    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A time of day with minute resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time from "HH:MM" format.
    ///
    /// ```
    /// use flight_routes::time::ClockTime;
    ///
    /// assert!(ClockTime::parse("00:00").is_ok());
    /// assert!(ClockTime::parse("23:59").is_ok());
    /// assert!(ClockTime::parse("1430").is_err());
    /// assert!(ClockTime::parse("24:00").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        NaiveTime::parse_from_str(text.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| ParseError::new(text))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    fn minutes_from_midnight(self) -> i64 {
        i64::from(self.hour()) * 60 + i64::from(self.minute())
    }

    /// Hours since midnight as a real number, e.g. 14:30 is 14.5.
    pub fn decimal_hours(self) -> f64 {
        f64::from(self.hour()) + f64::from(self.minute()) / 60.0
    }

    /// Whole minutes from `earlier` to `self`, wrapping past midnight.
    pub fn minutes_since(self, earlier: ClockTime) -> u32 {
        let minutes =
            (self.minutes_from_midnight() - earlier.minutes_from_midnight()).rem_euclid(MINUTES_PER_DAY);
        // rem_euclid keeps this in 0..1440
        minutes as u32
    }

    /// Hours from `earlier` to `self`, wrapping past midnight. Always in [0, 24).
    pub fn elapsed_since(self, earlier: ClockTime) -> f64 {
        f64::from(self.minutes_since(earlier)) / 60.0
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Converts "HH:MM" text to hours since midnight.
pub fn to_decimal_hours(text: &str) -> Result<f64, ParseError> {
    ClockTime::parse(text).map(ClockTime::decimal_hours)
}

/// Hours between two "HH:MM" times, adding a day when `later` is before `earlier`.
pub fn elapsed(later: &str, earlier: &str) -> Result<f64, ParseError> {
    Ok(ClockTime::parse(later)?.elapsed_since(ClockTime::parse(earlier)?))
}
