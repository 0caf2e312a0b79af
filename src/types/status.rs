//! Canonical duty-status vocabulary and lane assignment

use serde::{Deserialize, Serialize};

use crate::{LogError, Result};

/// The four regulator-defined duty statuses, in paper-grid row order.
///
/// Each status occupies a fixed lane on the 24-hour log grid, top to bottom:
/// Off Duty, Sleeper Berth, Driving, On Duty (not driving).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DutyStatus {
    #[serde(rename = "OFF")]
    Off,
    #[serde(rename = "SB")]
    Sleeper,
    #[serde(rename = "DRIVING")]
    Driving,
    #[serde(rename = "ON")]
    On,
}

/// Number of lanes on the log grid, one per duty status.
pub const LANE_COUNT: usize = 4;

impl DutyStatus {
    /// All statuses in lane order.
    pub const ALL: [DutyStatus; LANE_COUNT] =
        [DutyStatus::Off, DutyStatus::Sleeper, DutyStatus::Driving, DutyStatus::On];

    /// Normalize a raw upstream status label into the canonical vocabulary.
    ///
    /// Synonyms are matched case-sensitively: `"SLEEPER"` and `"SB"` map to
    /// [`DutyStatus::Sleeper`], `"ON-DUTY"` and `"ON"` to [`DutyStatus::On`],
    /// `"DRIVING"` to [`DutyStatus::Driving`]. Anything else, including
    /// `"OFF"`, the empty string, and garbage, maps to [`DutyStatus::Off`].
    ///
    /// This is a total function: a single malformed label must not abort
    /// rendering of an otherwise valid day. Use [`DutyStatus::parse_strict`]
    /// to fail fast instead.
    pub fn normalize(raw: &str) -> DutyStatus {
        match raw {
            "SLEEPER" | "SB" => DutyStatus::Sleeper,
            "ON-DUTY" | "ON" => DutyStatus::On,
            "DRIVING" => DutyStatus::Driving,
            _ => DutyStatus::Off,
        }
    }

    /// Parse a raw status label, rejecting anything outside the synonym table.
    ///
    /// Unlike [`DutyStatus::normalize`], an unknown label is an
    /// [`UnrecognizedStatus`](LogError::UnrecognizedStatus) error rather than
    /// a silent default to `OFF`. Intended for data-quality validation.
    pub fn parse_strict(raw: &str) -> Result<DutyStatus> {
        match raw {
            "OFF" => Ok(DutyStatus::Off),
            "SLEEPER" | "SB" => Ok(DutyStatus::Sleeper),
            "ON-DUTY" | "ON" => Ok(DutyStatus::On),
            "DRIVING" => Ok(DutyStatus::Driving),
            other => Err(LogError::unrecognized_status(other)),
        }
    }

    /// Fixed lane index on the log grid, top to bottom.
    pub fn lane(self) -> u8 {
        match self {
            DutyStatus::Off => 0,
            DutyStatus::Sleeper => 1,
            DutyStatus::Driving => 2,
            DutyStatus::On => 3,
        }
    }

    /// Row caption as printed on the paper log grid.
    pub fn label(self) -> &'static str {
        match self {
            DutyStatus::Off => "1. OFF DUTY",
            DutyStatus::Sleeper => "2. SLEEPER BERTH",
            DutyStatus::Driving => "3. DRIVING",
            DutyStatus::On => "4. ON DUTY (Not Driving)",
        }
    }

    /// Canonical wire token for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::Off => "OFF",
            DutyStatus::Sleeper => "SB",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::On => "ON",
        }
    }

    /// Whether time in this status counts as on-duty under the cycle rules.
    pub fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::On)
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
