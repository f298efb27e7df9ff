//! Injected time source for "has this slot already passed" checks.
//!
//! The generator never reads the ambient wall clock; callers hand it a
//! [`Clock`] so that slot generation stays a pure function of its inputs.

use chrono::{Local, NaiveDateTime};

/// Source of the current date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local wall clock. Production wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant. Used by tests, by batch jobs evaluating
/// future days, and by CLI runs that need reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
