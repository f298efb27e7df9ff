//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time slot: {0}")]
    InvalidTimeSlot(String),

    #[error("Invalid calendar day: {0}")]
    InvalidDay(String),

    #[error("Invalid service: {0}")]
    InvalidService(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Reserved for configurable period windows; never produced today.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
