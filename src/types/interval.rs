//! Duty interval types: wire form and validated canonical form

use serde::{Deserialize, Serialize};

use super::DutyStatus;
use crate::{LogError, Result};

/// One duty entry exactly as produced by the upstream trip planner.
///
/// Field names match the planner's JSON (`{"status","start","end"}`); the
/// status label may be any of the accepted synonyms and the bounds are
/// unvalidated fractional hour offsets from day start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInterval {
    pub status: String,
    pub start: f64,
    pub end: f64,
}

impl RawInterval {
    pub fn new(status: impl Into<String>, start: f64, end: f64) -> Self {
        Self { status: status.into(), start, end }
    }

    /// Resolve into a validated [`DutyInterval`], normalizing the label.
    ///
    /// Unknown labels map to `OFF`; malformed bounds are rejected.
    pub fn resolve(&self) -> Result<DutyInterval> {
        DutyInterval::new(DutyStatus::normalize(&self.status), self.start, self.end)
    }

    /// Strict resolution: unknown labels are rejected instead of defaulted.
    pub fn resolve_strict(&self) -> Result<DutyInterval> {
        DutyInterval::new(DutyStatus::parse_strict(&self.status)?, self.start, self.end)
    }
}

/// One contiguous period of a single duty status within a day.
///
/// Bounds are fractional hours from day start. Construction rejects
/// non-numeric values and empty or reversed spans; it does NOT reject values
/// outside `[0, 24]` — the permissive default renders those as given, and
/// strict ordering catches them when requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DutyInterval {
    pub status: DutyStatus,
    pub start: f64,
    pub end: f64,
}

impl DutyInterval {
    pub fn new(status: DutyStatus, start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(LogError::malformed_interval(format!(
                "non-numeric bounds {start}..{end} for status {status}"
            )));
        }
        if start >= end {
            return Err(LogError::malformed_interval(format!(
                "start {start} is not before end {end} for status {status}"
            )));
        }
        Ok(Self { status, start, end })
    }

    /// Duration of this interval in hours.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the interval lies fully inside the 24-hour grid.
    pub fn within_day(&self) -> bool {
        self.start >= 0.0 && self.end <= 24.0
    }
}
