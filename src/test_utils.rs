//! Shared fixture builders for unit tests and benches.

#![cfg(any(test, feature = "benchmark"))]

use crate::{DayLog, RawInterval, TripContext, TripRecord};

/// A fully covered, well-formed day: off, drive, service, off.
pub fn standard_day(day_number: u32) -> DayLog {
    DayLog::new(
        day_number,
        format!("Day {day_number}"),
        vec![
            RawInterval::new("OFF", 0.0, 6.0),
            RawInterval::new("DRIVING", 6.0, 14.0),
            RawInterval::new("ON", 14.0, 15.0),
            RawInterval::new("OFF", 15.0, 24.0),
        ],
    )
}

/// A synthetic multi-day trip record with the given day count.
pub fn synthetic_trip(day_count: u32) -> TripRecord {
    TripRecord {
        days: (1..=day_count).map(standard_day).collect(),
        cycle_hours_used: 20.0,
        start_location: "Testville".to_string(),
        stops: Vec::new(),
    }
}

/// Context matching [`synthetic_trip`].
pub fn synthetic_context() -> TripContext {
    TripContext::new(20.0)
}
