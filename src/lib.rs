//! Type-safe Rust library for FMCSA Hours-of-Service duty logs.
//!
//! Dutygrid turns a multi-day trip's duty-status intervals into the
//! regulator-style daily log: a single staircase trace across the four duty
//! lanes plus per-day driving, on-duty, and cycle-hour totals.
//!
//! # Features
//!
//! - **Timeline Engine**: normalization, deterministic ordering, and
//!   lane-aware path construction in logical `(hour, lane)` space
//! - **Daily Summaries**: driving / on-duty / cycle-remaining totals at
//!   fixed two-decimal precision
//! - **Permissive by Default**: one bad record never blanks the whole log;
//!   strict validation is an explicit opt-in
//! - **Trip Simulation**: an Hours-of-Service planner that produces duty
//!   logs from route distances under the 11h/14h/70h rules
//!
//! # Quick Start
//!
//! ```rust
//! use dutygrid::{DutyGrid, EngineOptions, RoutePlan};
//!
//! let trip = DutyGrid::simulate(&RoutePlan::from_total(600.0), 12.0);
//! let views = DutyGrid::assemble(&trip, &EngineOptions::permissive()).unwrap();
//!
//! for day in &views {
//!     println!("Day {}: {:.2}h driving", day.day_number, day.summary.total_driving_hours);
//! }
//! assert_eq!(views[0].summary.cycle_hours_remaining, 58.0);
//! ```

// Core types and error handling
mod error;
pub mod types;

// The timeline engine and its collaborators
pub mod assembler;
pub mod engine;
pub mod planner;
pub mod render;

#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

// Core exports
pub use error::*;
pub use types::*;

// Engine exports
pub use assembler::{DayView, assemble, build_day_view};
pub use engine::{
    EngineOptions, GapPolicy, ValidationMode, build_path, order_intervals, summarize,
};

// Collaborator exports
pub use planner::{HosSimulator, RoutePlan, plan_trip};
pub use render::{ChartGeometry, svg_path_data};

/// Unified entry point for duty-log processing.
///
/// # Examples
///
/// ## Assemble views for a trip record
/// ```rust
/// use dutygrid::{DutyGrid, EngineOptions, RoutePlan};
///
/// let trip = DutyGrid::simulate(&RoutePlan::new(600.0, 600.0), 0.0);
/// let views = DutyGrid::assemble(&trip, &EngineOptions::permissive()).unwrap();
/// assert!(!views.is_empty());
/// ```
pub struct DutyGrid;

impl DutyGrid {
    /// Assemble per-day log views for a complete trip record.
    ///
    /// Runs every day through normalization, ordering, path building, and
    /// summarization under the given options.
    ///
    /// # Errors
    ///
    /// Returns the first day's engine error: malformed intervals in any
    /// mode, plus out-of-bounds, overlap, and unrecognized-label errors
    /// under [`ValidationMode::Strict`].
    pub fn assemble(trip: &TripRecord, options: &EngineOptions) -> Result<Vec<DayView>> {
        assembler::assemble(&trip.days, &trip.context(), options)
    }

    /// Simulate a trip over the given route and package it as a trip record.
    ///
    /// The planner drives both route legs under the Hours-of-Service limits,
    /// inserting rests, fuel stops, and the pickup/dropoff service hours.
    pub fn simulate(plan: &RoutePlan, cycle_hours_used: f64) -> TripRecord {
        planner::plan_trip(plan, cycle_hours_used)
    }
}
