//! The service catalog -- every bookable service and its duration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// A bookable service. The catalog is closed: every variant maps to exactly
/// one positive duration, so duration lookup has no error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceKind {
    Haircut,
    Beard,
    HaircutAndBeard,
}

impl ServiceKind {
    /// Every service offered, in menu order.
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::Haircut,
        ServiceKind::Beard,
        ServiceKind::HaircutAndBeard,
    ];

    /// Duration in minutes. Always positive and always a multiple of the
    /// 15-minute slot interval.
    pub fn duration_minutes(self) -> u32 {
        match self {
            ServiceKind::Beard => 30,
            ServiceKind::Haircut | ServiceKind::HaircutAndBeard => 60,
        }
    }

    /// The shortest service on the menu. A day with no room left for this
    /// one has no room for anything.
    pub fn shortest() -> ServiceKind {
        let mut shortest = ServiceKind::ALL[0];
        for service in ServiceKind::ALL {
            if service.duration_minutes() < shortest.duration_minutes() {
                shortest = service;
            }
        }
        shortest
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceKind::Haircut => "HAIRCUT",
            ServiceKind::Beard => "BEARD",
            ServiceKind::HaircutAndBeard => "HAIRCUT_AND_BEARD",
        };
        f.write_str(name)
    }
}

impl FromStr for ServiceKind {
    type Err = SlotError;

    /// Parse the wire tag. The `HAIRCUT+BEARD` spelling used by older
    /// clients is accepted on input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HAIRCUT" => Ok(ServiceKind::Haircut),
            "BEARD" => Ok(ServiceKind::Beard),
            "HAIRCUT_AND_BEARD" | "HAIRCUT+BEARD" => Ok(ServiceKind::HaircutAndBeard),
            other => Err(SlotError::InvalidService(other.to_string())),
        }
    }
}
