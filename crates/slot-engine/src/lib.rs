//! # slot-engine
//!
//! Deterministic slot availability and scheduling for a single-chair
//! barbershop.
//!
//! The engine answers the four questions every booking surface keeps
//! asking: which start times exist for a half-day period, which of them are
//! blocked by confirmed bookings, whether one candidate start can still
//! host a requested service, and whether a whole day is out of capacity.
//! Every answer is a pure function of the explicit inputs plus an injected
//! [`Clock`]; the engine performs no I/O and keeps no state between calls.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{blocked_slots, is_slot_available, ServiceKind, TimeSlot};
//!
//! let booked: Vec<TimeSlot> = vec!["10:00".parse().unwrap()];
//!
//! // A 30-minute beard trim at 10:00 blocks 10:00 and 10:15.
//! let blocked = blocked_slots(&booked, ServiceKind::Beard);
//! assert_eq!(blocked.len(), 2);
//!
//! // A 60-minute haircut starting 09:45 would run into the booking.
//! assert!(!is_slot_available("09:45".parse().unwrap(), ServiceKind::Haircut, &booked));
//! assert!(is_slot_available("11:00".parse().unwrap(), ServiceKind::Haircut, &booked));
//! ```
//!
//! ## Modules
//!
//! - [`service`] -- the service catalog and its durations
//! - [`period`] -- the fixed morning/afternoon booking windows
//! - [`slot`] -- the quantized [`TimeSlot`] value type
//! - [`generator`] -- candidate sequences with the today cutoff
//! - [`availability`] -- blocked-slot expansion and point queries
//! - [`fullness`] -- whole-day capacity classification
//! - [`clock`] -- the injected time source
//! - [`day`] -- calendar-day parsing
//! - [`error`] -- error types

pub mod availability;
pub mod clock;
pub mod day;
pub mod error;
pub mod fullness;
pub mod generator;
pub mod period;
pub mod service;
pub mod slot;

pub use availability::{blocked_slots, check_slot, is_slot_available, AvailabilityVerdict};
pub use clock::{Clock, FixedClock, SystemClock};
pub use day::parse_day;
pub use error::SlotError;
pub use fullness::{full_days, is_day_full};
pub use generator::generate_slots;
pub use period::Period;
pub use service::ServiceKind;
pub use slot::{TimeSlot, SLOT_INTERVAL_MINUTES};
