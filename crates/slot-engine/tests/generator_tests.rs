//! Tests for candidate slot generation.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::{generate_slots, FixedClock, Period, TimeSlot};

/// Helper to parse an `HH:MM` slot.
fn slot(s: &str) -> TimeSlot {
    s.parse().unwrap()
}

/// Helper to parse a `YYYY-MM-DD` day.
fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Helper to pin the clock to a `YYYY-MM-DDTHH:MM:SS` instant.
fn clock(s: &str) -> FixedClock {
    FixedClock::new(NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap())
}

// ── Window boundaries ────────────────────────────────────────────────────────

#[test]
fn morning_on_a_future_day_runs_0900_through_1345() {
    let slots = generate_slots(
        Some(Period::Morning),
        Some(day("2026-08-10")),
        &clock("2026-08-04T12:00:00"),
    );

    assert_eq!(slots.len(), 20, "09:00..13:45 step 15 is 20 starts");
    assert_eq!(slots[0], slot("09:00"));
    assert_eq!(slots[slots.len() - 1], slot("13:45"));
}

#[test]
fn afternoon_on_a_future_day_runs_1400_through_1900() {
    let slots = generate_slots(
        Some(Period::Afternoon),
        Some(day("2026-08-10")),
        &clock("2026-08-04T12:00:00"),
    );

    assert_eq!(slots.len(), 21, "14:00..19:00 step 15 is 21 starts");
    assert_eq!(slots[0], slot("14:00"));
    assert_eq!(slots[slots.len() - 1], slot("19:00"));
}

#[test]
fn morning_stops_before_1400_and_afternoon_before_1915() {
    let now = clock("2026-08-04T12:00:00");
    let future = Some(day("2026-08-10"));

    let morning = generate_slots(Some(Period::Morning), future, &now);
    assert!(!morning.contains(&slot("14:00")));

    let afternoon = generate_slots(Some(Period::Afternoon), future, &now);
    assert!(!afternoon.contains(&slot("19:15")));
    assert!(!afternoon.contains(&slot("13:45")));
}

// ── Unset inputs ─────────────────────────────────────────────────────────────

#[test]
fn no_period_selected_yields_empty() {
    let slots = generate_slots(None, Some(day("2026-08-10")), &clock("2026-08-04T12:00:00"));
    assert!(slots.is_empty(), "no period chosen yet is not an error");
}

#[test]
fn no_day_selected_yields_empty() {
    let slots = generate_slots(Some(Period::Morning), None, &clock("2026-08-04T12:00:00"));
    assert!(slots.is_empty(), "no day chosen yet is not an error");
}

// ── The today cutoff ─────────────────────────────────────────────────────────

#[test]
fn today_drops_starts_at_or_before_now() {
    let slots = generate_slots(
        Some(Period::Morning),
        Some(day("2026-08-04")),
        &clock("2026-08-04T12:00:00"),
    );

    assert!(!slots.contains(&slot("11:45")));
    assert!(!slots.contains(&slot("12:00")), "12:00 is not after 12:00");
    assert!(slots.contains(&slot("12:15")));
    assert_eq!(slots[0], slot("12:15"));
    assert_eq!(slots.len(), 7, "12:15..13:45 step 15 is 7 starts");
}

#[test]
fn today_at_opening_time_drops_only_the_first_start() {
    let slots = generate_slots(
        Some(Period::Morning),
        Some(day("2026-08-04")),
        &clock("2026-08-04T09:00:00"),
    );

    assert_eq!(slots[0], slot("09:15"));
    assert_eq!(slots.len(), 19);
}

#[test]
fn mid_interval_clock_drops_the_surrounding_start() {
    // 12:07 has overtaken 12:00 but not 12:15.
    let slots = generate_slots(
        Some(Period::Morning),
        Some(day("2026-08-04")),
        &clock("2026-08-04T12:07:00"),
    );

    assert!(!slots.contains(&slot("12:00")));
    assert_eq!(slots[0], slot("12:15"));
}

#[test]
fn future_day_is_never_filtered() {
    let slots = generate_slots(
        Some(Period::Afternoon),
        Some(day("2026-08-05")),
        &clock("2026-08-04T23:59:00"),
    );
    assert_eq!(slots.len(), 21);
}

#[test]
fn past_day_drains_completely() {
    let slots = generate_slots(
        Some(Period::Afternoon),
        Some(day("2026-08-03")),
        &clock("2026-08-04T08:00:00"),
    );
    assert!(slots.is_empty(), "a day behind the clock has no starts left");
}

// ── Sequence guarantees ──────────────────────────────────────────────────────

#[test]
fn sequence_is_strictly_increasing() {
    for period in [Period::Morning, Period::Afternoon] {
        let slots = generate_slots(
            Some(period),
            Some(day("2026-08-10")),
            &clock("2026-08-04T12:00:00"),
        );
        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1], "{} must precede {}", pair[0], pair[1]);
        }
    }
}

#[test]
fn same_inputs_and_clock_yield_identical_sequences() {
    let now = clock("2026-08-04T10:30:00");
    let today = Some(day("2026-08-04"));

    let first = generate_slots(Some(Period::Morning), today, &now);
    let second = generate_slots(Some(Period::Morning), today, &now);
    assert_eq!(first, second);
}
