//! Per-day log records and trip-level context

use serde::{Deserialize, Serialize};

use super::RawInterval;

/// One 24-hour period of duty entries, the unit of work for the engine.
///
/// Serde field names (`day`, `date`, `logs`) match the trip planner's
/// `eld_logs` JSON. The derived path and summary are view artifacts computed
/// on demand; they are never stored on this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
    /// 1-based sequential index within the trip.
    #[serde(rename = "day")]
    pub day_number: u32,

    /// Calendar label supplied by the planner, opaque to the engine.
    pub date: String,

    /// Duty entries for the day, in planner emission order.
    #[serde(rename = "logs")]
    pub intervals: Vec<RawInterval>,
}

impl DayLog {
    pub fn new(day_number: u32, date: impl Into<String>, intervals: Vec<RawInterval>) -> Self {
        Self { day_number, date: date.into(), intervals }
    }
}

/// Read-only ambient data borrowed by the summary calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TripContext {
    /// Hours already accrued against the 8-day/70-hour cycle window (0-70).
    pub cycle_hours_used_before_trip: f64,
}

impl TripContext {
    pub fn new(cycle_hours_used_before_trip: f64) -> Self {
        Self { cycle_hours_used_before_trip }
    }
}

/// Where along the route a stop marker was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopKind {
    #[serde(rename = "REST")]
    Rest,
    #[serde(rename = "FUEL")]
    Fuel,
}

/// A rest or fuel stop recorded by the trip planner, positioned by trip miles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopEvent {
    #[serde(rename = "type")]
    pub kind: StopKind,
    #[serde(rename = "distance_miles")]
    pub trip_miles: f64,
}

/// A complete deserialized trip record as handed over by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Per-day duty logs, normally already in day order.
    pub days: Vec<DayLog>,

    /// Cycle hours used before the trip began (0-70).
    #[serde(rename = "current_cycle_used")]
    pub cycle_hours_used: f64,

    /// Display caption only; not processed by the engine.
    #[serde(default)]
    pub start_location: String,

    /// Rest and fuel stops along the route.
    #[serde(default)]
    pub stops: Vec<StopEvent>,
}

impl TripRecord {
    /// Trip context borrowed by per-day summaries.
    pub fn context(&self) -> TripContext {
        TripContext::new(self.cycle_hours_used)
    }
}
