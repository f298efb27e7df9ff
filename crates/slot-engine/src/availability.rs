//! Blocked-slot expansion and point availability queries.
//!
//! Translates a day's confirmed booking starts into the set of starts a new
//! booking may not use, and answers whether one candidate start can still
//! host a service of a given duration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::service::ServiceKind;
use crate::slot::{TimeSlot, SLOT_INTERVAL_MINUTES};

/// Outcome of a point availability query, with the offending booking kept
/// for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityVerdict {
    /// Whether the candidate can host the requested service.
    pub available: bool,
    /// The earliest booked start whose blocked run reaches into the
    /// candidate's coverage window. `None` when available.
    pub conflict: Option<TimeSlot>,
}

/// How many consecutive grid slots a booking of `service` occupies.
fn span(service: ServiceKind) -> u16 {
    (service.duration_minutes() / SLOT_INTERVAL_MINUTES as u32) as u16
}

/// The run of slots a booking of `service` starting at `start` covers,
/// the start itself included.
fn coverage(start: TimeSlot, service: ServiceKind) -> impl Iterator<Item = TimeSlot> {
    (0..span(service)).map(move |step| start.advance(step * SLOT_INTERVAL_MINUTES))
}

/// Expand each booked start into the run of starts it blocks and union the
/// runs.
///
/// Each start blocks `duration / 15` consecutive slots including itself.
/// Note that the duration used is the *requested* service's, not that of
/// the booking which produced the start: an existing 60-minute appointment
/// checked against a 30-minute request blocks only two slots. Every booking
/// surface computes the set this way; changing the rule changes what every
/// dropdown shows, so it stays as-is.
///
/// Minutes carry past :59 into the next hour with no upper bound; callers
/// intersect the result with a generated sequence before display.
pub fn blocked_slots(booked_starts: &[TimeSlot], service: ServiceKind) -> BTreeSet<TimeSlot> {
    let mut blocked = BTreeSet::new();
    for start in booked_starts {
        for slot in coverage(*start, service) {
            blocked.insert(slot);
        }
    }
    blocked
}

/// Point query with diagnostics: can a booking of `service` start at
/// `candidate` without touching any blocked slot?
///
/// Every slot in the candidate's own coverage window must be clear, not
/// just the start; dropdown rendering only needs start membership in
/// [`blocked_slots`], but the save path needs the whole window.
pub fn check_slot(
    candidate: TimeSlot,
    service: ServiceKind,
    booked_starts: &[TimeSlot],
) -> AvailabilityVerdict {
    let window: Vec<TimeSlot> = coverage(candidate, service).collect();

    let conflict = booked_starts
        .iter()
        .copied()
        .filter(|start| coverage(*start, service).any(|blocked| window.contains(&blocked)))
        .min();

    AvailabilityVerdict {
        available: conflict.is_none(),
        conflict,
    }
}

/// Boolean projection of [`check_slot`].
pub fn is_slot_available(
    candidate: TimeSlot,
    service: ServiceKind,
    booked_starts: &[TimeSlot],
) -> bool {
    check_slot(candidate, service, booked_starts).available
}
