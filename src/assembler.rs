//! Multi-day log assembly for the presentation layer

use tracing::debug;

use crate::{
    DailySummary, DayLog, DutyInterval, EngineOptions, Result, TimelinePath, TripContext,
    ValidationMode, build_path, order_intervals, summarize,
};

/// One fully computed day, packaged for the presentation collaborator.
///
/// Carries the original `day_number`/`date` passthrough for labeling plus the
/// derived path and summary. Recomputable at any time from the source
/// [`DayLog`]; nothing here is durable state.
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub day_number: u32,
    pub date: String,
    pub path: TimelinePath,
    pub summary: DailySummary,
}

/// Run one day through the full pipeline: normalize, order, then build the
/// path and summary.
///
/// Any engine error aborts this day's computation; no partial geometry is
/// returned. Callers that prefer to skip a bad day rather than abort the
/// whole trip view invoke this per day and apply their own recovery policy.
pub fn build_day_view(
    day: &DayLog,
    ctx: &TripContext,
    options: &EngineOptions,
) -> Result<DayView> {
    let resolved = resolve_intervals(day, options.validation)?;
    let ordered = order_intervals(&resolved, options.validation)?;
    let path = build_path(&ordered, options.gap_policy);
    let summary = summarize(&ordered, ctx);
    debug!(
        day = day.day_number,
        intervals = ordered.len(),
        vertices = path.len(),
        "built day view"
    );
    Ok(DayView { day_number: day.day_number, date: day.date.clone(), path, summary })
}

/// Assemble every day of a trip, in day order.
///
/// Trip days normally arrive sequential already, but the transport layer is
/// not trusted to preserve that: days are re-sorted by `day_number` ascending
/// before assembly. Fails fast on the first day that does not compute.
///
/// Stateless between calls; each run recomputes fully from the supplied logs.
pub fn assemble(
    days: &[DayLog],
    ctx: &TripContext,
    options: &EngineOptions,
) -> Result<Vec<DayView>> {
    debug!(days = days.len(), "assembling trip log views");
    let mut in_order: Vec<&DayLog> = days.iter().collect();
    in_order.sort_by_key(|day| day.day_number);

    in_order.into_iter().map(|day| build_day_view(day, ctx, options)).collect()
}

fn resolve_intervals(day: &DayLog, validation: ValidationMode) -> Result<Vec<DutyInterval>> {
    day.intervals
        .iter()
        .map(|raw| match validation {
            ValidationMode::Permissive => raw.resolve(),
            ValidationMode::Strict => raw.resolve_strict(),
        })
        .collect()
}
