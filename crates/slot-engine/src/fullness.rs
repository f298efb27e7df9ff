//! Whole-day capacity classification.
//!
//! A day is full when no candidate start in either period could host even
//! the shortest service on the menu. Composes the period sequences with the
//! availability resolver; no expansion logic of its own.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::availability::is_slot_available;
use crate::period::Period;
use crate::service::ServiceKind;
use crate::slot::TimeSlot;

/// Whether a day with the given confirmed booking starts has zero capacity
/// left for the shortest service.
///
/// Evaluated against the full morning and afternoon sequences. Fullness is
/// a property of the day's timetable, not of the time of asking, so no
/// past-slot filtering applies.
pub fn is_day_full(booked_starts: &[TimeSlot]) -> bool {
    let probe = ServiceKind::shortest();

    [Period::Morning, Period::Afternoon]
        .into_iter()
        .flat_map(Period::slots)
        .all(|slot| !is_slot_available(slot, probe, booked_starts))
}

/// The sorted subset of days whose bookings leave no capacity at all.
///
/// `bookings` maps each day to its confirmed starts; days absent from the
/// map are trivially not full. The calendar marks the returned days as
/// booked out.
pub fn full_days(bookings: &BTreeMap<NaiveDate, Vec<TimeSlot>>) -> Vec<NaiveDate> {
    bookings
        .iter()
        .filter(|(_, starts)| is_day_full(starts))
        .map(|(day, _)| *day)
        .collect()
}
