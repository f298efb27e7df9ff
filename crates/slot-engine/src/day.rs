//! Calendar-day parsing at the wire boundary.

use chrono::NaiveDate;

use crate::error::{Result, SlotError};

/// Parse an ISO `YYYY-MM-DD` calendar day.
///
/// # Errors
/// Returns `SlotError::InvalidDay` when the string is not a valid ISO date.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| SlotError::InvalidDay(s.to_string()))
}
