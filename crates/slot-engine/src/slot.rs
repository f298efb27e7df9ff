//! The quantized [`TimeSlot`] value type.
//!
//! A slot is a wall-clock time of day on the 15-minute booking grid, stored
//! as minutes since midnight. The canonical interchange form is a
//! zero-padded `HH:MM` string.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SlotError;

/// Length of one booking slot in minutes. Every period boundary and every
/// service duration is a multiple of this.
pub const SLOT_INTERVAL_MINUTES: u16 = 15;

/// A time of day on the booking grid. Ordering follows the clock.
///
/// Resolver arithmetic may carry a slot past 23:45; such values format
/// consistently (`24:00`, `24:15`, ...) but never parse back, which keeps
/// them out of any persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    minutes: u16,
}

impl TimeSlot {
    /// Build a slot from an hour and a minute already known to be on the
    /// grid.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimeSlot` when the hour is past 23, the
    /// minute is past 59, or the minute is not a multiple of 15.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, SlotError> {
        if hour > 23 || minute > 59 || minute % SLOT_INTERVAL_MINUTES != 0 {
            return Err(SlotError::InvalidTimeSlot(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Crate-internal constructor for values produced by window constants
    /// and resolver arithmetic, which are on the grid by construction.
    pub(crate) const fn from_raw(minutes: u16) -> Self {
        Self { minutes }
    }

    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(self) -> u16 {
        self.minutes % 60
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }

    /// The slot `minutes` later. Carries past :59 and past 23:45 without
    /// bound; callers intersect results with a generated sequence before
    /// display.
    pub(crate) fn advance(self, minutes: u16) -> Self {
        Self {
            minutes: self.minutes + minutes,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = SlotError;

    /// Parse `HH:MM`, or `HH:MM:00` as stored appointment rows carry it.
    /// A seconds field other than `00` is rejected, not truncated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidTimeSlot(s.to_string());

        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map_err(|_| invalid())?;
        if time.second() != 0 {
            return Err(invalid());
        }

        Self::from_hm(time.hour() as u16, time.minute() as u16).map_err(|_| invalid())
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
