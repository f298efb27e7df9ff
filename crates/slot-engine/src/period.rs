//! The fixed half-day booking windows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SlotError;
use crate::slot::{TimeSlot, SLOT_INTERVAL_MINUTES};

const MORNING_FIRST: u16 = 9 * 60;
const MORNING_LAST: u16 = 13 * 60 + 45;
const AFTERNOON_FIRST: u16 = 14 * 60;
const AFTERNOON_LAST: u16 = 19 * 60;

/// Half-day booking window. The two windows never overlap and each is
/// evenly divided by the slot interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    /// Starts from 09:00 through 13:45.
    Morning,
    /// Starts from 14:00 through 19:00.
    Afternoon,
}

impl Period {
    /// First bookable start of the window.
    pub fn first_slot(self) -> TimeSlot {
        match self {
            Period::Morning => TimeSlot::from_raw(MORNING_FIRST),
            Period::Afternoon => TimeSlot::from_raw(AFTERNOON_FIRST),
        }
    }

    /// Last bookable start of the window.
    pub fn last_slot(self) -> TimeSlot {
        match self {
            Period::Morning => TimeSlot::from_raw(MORNING_LAST),
            Period::Afternoon => TimeSlot::from_raw(AFTERNOON_LAST),
        }
    }

    /// The full quantized start sequence of the window, in clock order.
    pub fn slots(self) -> Vec<TimeSlot> {
        let first = self.first_slot().minutes_since_midnight();
        let last = self.last_slot().minutes_since_midnight();
        (first..=last)
            .step_by(SLOT_INTERVAL_MINUTES as usize)
            .map(TimeSlot::from_raw)
            .collect()
    }

    /// The period whose window contains `slot`, if any.
    ///
    /// Stored appointments carry only a start time; the editing screen
    /// recovers the period from it.
    pub fn containing(slot: TimeSlot) -> Option<Period> {
        let minutes = slot.minutes_since_midnight();
        if (MORNING_FIRST..=MORNING_LAST).contains(&minutes) {
            Some(Period::Morning)
        } else if (AFTERNOON_FIRST..=AFTERNOON_LAST).contains(&minutes) {
            Some(Period::Afternoon)
        } else {
            None
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Period::Morning => "MORNING",
            Period::Afternoon => "AFTERNOON",
        };
        f.write_str(name)
    }
}

impl FromStr for Period {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MORNING" => Ok(Period::Morning),
            "AFTERNOON" => Ok(Period::Afternoon),
            other => Err(SlotError::InvalidPeriod(other.to_string())),
        }
    }
}
