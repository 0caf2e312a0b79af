//! Deterministic ordering and opt-in validation of a day's intervals

use crate::{DutyInterval, LogError, Result, ValidationMode};

/// Establish the canonical ordering of a day's duty intervals.
///
/// Sorts by `start` ascending without mutating the input. The sort is stable:
/// two intervals should never legitimately share a start, but if bad data
/// collides, original relative order is preserved so rendering stays
/// deterministic.
///
/// Under [`ValidationMode::Strict`] the ordered sequence is additionally
/// checked: spans outside `[0, 24]` raise [`LogError::OutOfBounds`] and any
/// pairwise overlap raises [`LogError::Overlap`]. The permissive default
/// passes bad geometry through as given.
pub fn order_intervals(
    intervals: &[DutyInterval],
    validation: ValidationMode,
) -> Result<Vec<DutyInterval>> {
    let mut ordered = intervals.to_vec();
    ordered.sort_by(|a, b| a.start.total_cmp(&b.start));

    if validation == ValidationMode::Strict {
        check_bounds(&ordered)?;
        check_overlap(&ordered)?;
    }

    Ok(ordered)
}

fn check_bounds(ordered: &[DutyInterval]) -> Result<()> {
    match ordered.iter().find(|iv| !iv.within_day()) {
        Some(iv) => Err(LogError::OutOfBounds { start: iv.start, end: iv.end }),
        None => Ok(()),
    }
}

fn check_overlap(ordered: &[DutyInterval]) -> Result<()> {
    for pair in ordered.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(LogError::Overlap {
                earlier_end: pair[0].end,
                later_start: pair[1].start,
            });
        }
    }
    Ok(())
}
