//! Daily summary calculation

use crate::{DailySummary, DutyInterval, StatusTotals, TripContext};

/// Aggregate a day's interval durations into the reportable summary.
///
/// Durations fold into per-status totals; driving and on-duty-not-driving
/// combine into the on-duty figure. Overlapping intervals, if the permissive
/// ordering passed them through, double-count their overlapped region — the
/// totals reflect the data as given, they do not repair it.
///
/// The interval order does not affect the result, so callers may summarize
/// the planner's raw order or the sorted order interchangeably.
pub fn summarize(intervals: &[DutyInterval], ctx: &TripContext) -> DailySummary {
    DailySummary::from_totals(StatusTotals::accumulate(intervals), ctx)
}
