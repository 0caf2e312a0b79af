//! Daily duration totals and the reportable summary

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::{DutyInterval, DutyStatus, LANE_COUNT, TripContext};

/// Hours remaining in a fresh 8-day cycle window.
pub const CYCLE_LIMIT_HOURS: f64 = 70.0;

/// Round to the fixed two-decimal display precision.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accumulated hours per duty status, indexed by lane.
///
/// Built by folding interval durations; `Add` makes totals over disjoint
/// interval partitions compose elementwise, so per-chunk summaries can be
/// combined without re-walking the day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusTotals([f64; LANE_COUNT]);

impl StatusTotals {
    /// Fold interval durations into per-status totals.
    ///
    /// Overlapping intervals double-count their overlapped region; the
    /// permissive validation policy passes them through untouched and the
    /// totals reflect exactly what was given.
    pub fn accumulate<'a, I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = &'a DutyInterval>,
    {
        intervals.into_iter().fold(Self::default(), |totals, iv| {
            totals + Self::single(iv.status, iv.duration())
        })
    }

    fn single(status: DutyStatus, hours: f64) -> Self {
        let mut lanes = [0.0; LANE_COUNT];
        lanes[status.lane() as usize] = hours;
        Self(lanes)
    }

    /// Total hours recorded for one status.
    pub fn hours(&self, status: DutyStatus) -> f64 {
        self.0[status.lane() as usize]
    }
}

impl Add for StatusTotals {
    type Output = StatusTotals;

    fn add(self, rhs: StatusTotals) -> StatusTotals {
        let mut lanes = self.0;
        for (lane, value) in lanes.iter_mut().zip(rhs.0) {
            *lane += value;
        }
        StatusTotals(lanes)
    }
}

impl AddAssign for StatusTotals {
    fn add_assign(&mut self, rhs: StatusTotals) {
        *self = *self + rhs;
    }
}

/// Reportable per-day numbers, all at fixed two-decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub total_driving_hours: f64,
    pub total_on_duty_hours: f64,
    pub cycle_hours_remaining: f64,
}

impl DailySummary {
    /// Build the reportable summary from accumulated totals and trip context.
    ///
    /// On-duty time combines driving and on-duty-not-driving per the
    /// regulatory definition. `cycle_hours_remaining` is reported unclamped:
    /// a driver past the 70-hour limit shows a negative remainder.
    pub fn from_totals(totals: StatusTotals, ctx: &TripContext) -> Self {
        let driving = totals.hours(DutyStatus::Driving);
        let on_duty = driving + totals.hours(DutyStatus::On);
        Self {
            total_driving_hours: round2(driving),
            total_on_duty_hours: round2(on_duty),
            cycle_hours_remaining: round2(CYCLE_LIMIT_HOURS - ctx.cycle_hours_used_before_trip),
        }
    }
}
