//! Candidate slot generation for a day and half-day period.
//!
//! Produces the ordered sequence of bookable start times, already filtered
//! for starts the clock has overtaken.

use std::cmp::Ordering;

use chrono::{NaiveDate, Timelike};

use crate::clock::Clock;
use crate::period::Period;
use crate::slot::TimeSlot;

/// Generate the ordered candidate starts for `period` on `day`.
///
/// Both `period` and `day` are optional because the booking flow reaches
/// this point before either has been chosen; an unset step yields an empty
/// list rather than an error.
///
/// A start is dropped once its datetime on `day` is at or before the
/// clock's reading: future days are never filtered, today drains as time
/// passes, and a day already behind the clock drains completely through the
/// same comparison.
///
/// The result is strictly increasing, duplicate-free, and identical across
/// calls with the same inputs and the same clock reading.
pub fn generate_slots<C: Clock>(
    period: Option<Period>,
    day: Option<NaiveDate>,
    clock: &C,
) -> Vec<TimeSlot> {
    let (period, day) = match (period, day) {
        (Some(period), Some(day)) => (period, day),
        _ => return Vec::new(),
    };

    let now = clock.now();
    // Second precision is irrelevant on a 15-minute grid: a start has
    // passed exactly when its minute of day has been reached.
    let elapsed = (now.time().hour() * 60 + now.time().minute()) as u16;

    period
        .slots()
        .into_iter()
        .filter(|slot| match day.cmp(&now.date()) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => slot.minutes_since_midnight() > elapsed,
        })
        .collect()
}
