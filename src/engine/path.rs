//! Timeline path construction from ordered intervals

use crate::{DutyInterval, DutyStatus, GapPolicy, PathPoint, TimelinePath};

/// Coverage gaps shorter than this are treated as adjacency, not gaps.
const GAP_EPSILON: f64 = 1e-6;

/// Build the log trace polyline from a day's ordered intervals.
///
/// Every interval contributes two vertices, `(start, lane)` then
/// `(end, lane)`. Emitting the start vertex even when the lane is unchanged
/// from the previous end guarantees a vertical connector wherever consecutive
/// intervals differ in lane, and degenerates to a coincident point followed
/// by the next horizontal run when they don't. The result is the stepped
/// staircase of the paper log: no smoothing, no coincident-point collapsing,
/// exactly `2N` vertices for `N` intervals under [`GapPolicy::Omit`].
///
/// An empty interval list yields an empty path.
///
/// [`GapPolicy::FillOff`] bridges uncovered time (before the first interval,
/// between intervals, and after the last one, out to hour 24) with OFF-lane
/// segments; [`GapPolicy::Omit`] leaves a silent horizontal skip instead.
pub fn build_path(ordered: &[DutyInterval], gap_policy: GapPolicy) -> TimelinePath {
    if ordered.is_empty() {
        return TimelinePath::empty();
    }

    let mut points = Vec::with_capacity(ordered.len() * 2);
    let off_lane = DutyStatus::Off.lane();
    let mut cursor = match gap_policy {
        GapPolicy::FillOff => 0.0,
        GapPolicy::Omit => ordered[0].start,
    };

    for iv in ordered {
        if gap_policy == GapPolicy::FillOff && iv.start - cursor > GAP_EPSILON {
            points.push(PathPoint::new(cursor, off_lane));
            points.push(PathPoint::new(iv.start, off_lane));
        }
        let lane = iv.status.lane();
        points.push(PathPoint::new(iv.start, lane));
        points.push(PathPoint::new(iv.end, lane));
        cursor = cursor.max(iv.end);
    }

    if gap_policy == GapPolicy::FillOff && 24.0 - cursor > GAP_EPSILON {
        points.push(PathPoint::new(cursor, off_lane));
        points.push(PathPoint::new(24.0, off_lane));
    }

    TimelinePath::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(status: DutyStatus, start: f64, end: f64) -> DutyInterval {
        DutyInterval::new(status, start, end).unwrap()
    }

    #[test]
    fn empty_input_builds_empty_path() {
        assert!(build_path(&[], GapPolicy::Omit).is_empty());
        assert!(build_path(&[], GapPolicy::FillOff).is_empty());
    }

    #[test]
    fn each_interval_emits_start_and_end_vertices() {
        let day = [
            iv(DutyStatus::Off, 0.0, 6.0),
            iv(DutyStatus::Driving, 6.0, 14.0),
            iv(DutyStatus::On, 14.0, 15.0),
            iv(DutyStatus::Off, 15.0, 24.0),
        ];
        let path = build_path(&day, GapPolicy::Omit);
        assert_eq!(path.len(), 8);
        assert_eq!(path.first().unwrap(), PathPoint::new(0.0, 0));
        assert_eq!(path.last().unwrap(), PathPoint::new(24.0, 0));
        // The status transition at hour 6 shows as a vertical connector:
        // the OFF run ends at (6, 0) and the DRIVING run opens at (6, 2).
        assert_eq!(path.points[1], PathPoint::new(6.0, 0));
        assert_eq!(path.points[2], PathPoint::new(6.0, 2));
    }

    #[test]
    fn consecutive_same_lane_intervals_keep_coincident_vertices() {
        let day = [
            iv(DutyStatus::Driving, 6.0, 8.0),
            iv(DutyStatus::Driving, 8.0, 10.0),
        ];
        let path = build_path(&day, GapPolicy::Omit);
        assert_eq!(path.len(), 4);
        assert_eq!(path.points[1], path.points[2]);
    }

    #[test]
    fn omit_policy_skips_uncovered_time() {
        let day = [
            iv(DutyStatus::Off, 0.0, 6.0),
            iv(DutyStatus::Driving, 9.0, 12.0),
        ];
        let path = build_path(&day, GapPolicy::Omit);
        assert_eq!(path.len(), 4);
        assert_eq!(path.points[1].hour, 6.0);
        assert_eq!(path.points[2].hour, 9.0);
    }

    #[test]
    fn fill_off_bridges_interior_gap_on_the_off_lane() {
        let day = [
            iv(DutyStatus::Driving, 6.0, 9.0),
            iv(DutyStatus::On, 12.0, 13.0),
        ];
        let path = build_path(&day, GapPolicy::FillOff);
        // lead-in 0-6, drive 6-9, bridge 9-12, on 12-13, tail-out 13-24
        assert_eq!(path.len(), 10);
        assert_eq!(path.points[0], PathPoint::new(0.0, 0));
        assert_eq!(path.points[4], PathPoint::new(9.0, 0));
        assert_eq!(path.points[5], PathPoint::new(12.0, 0));
        assert_eq!(path.last().unwrap(), PathPoint::new(24.0, 0));
    }

    #[test]
    fn fill_off_adds_nothing_to_a_fully_covered_day() {
        let day = [
            iv(DutyStatus::Off, 0.0, 8.0),
            iv(DutyStatus::Driving, 8.0, 19.0),
            iv(DutyStatus::Off, 19.0, 24.0),
        ];
        assert_eq!(
            build_path(&day, GapPolicy::FillOff),
            build_path(&day, GapPolicy::Omit)
        );
    }

    #[test]
    fn overlapping_intervals_render_as_given() {
        // Permissive pass-through: time folds back on itself at the overlap
        let day = [
            iv(DutyStatus::Driving, 6.0, 10.0),
            iv(DutyStatus::On, 9.0, 11.0),
        ];
        let path = build_path(&day, GapPolicy::Omit);
        assert_eq!(path.len(), 4);
        assert!(path.points[2].hour < path.points[1].hour);
    }
}
