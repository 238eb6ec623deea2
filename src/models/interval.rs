//! Time intervals on the canonical period timeline.
//!
//! # Time Model
//! Each standard teaching period `p` occupies `[p, p + 1)` on a real
//! timeline; half periods contribute `.5` boundaries and night periods
//! sit on fixed anchors starting at `10.0`. Intervals are half-open:
//! start inclusive, end exclusive, so back-to-back classes never
//! register as a conflict.

use serde::{Deserialize, Serialize};

use super::Weekday;

/// Gap below which two same-weekday intervals are considered contiguous.
pub const MERGE_EPSILON: f64 = 0.001;

/// A class meeting: a half-open interval `[start, end)` on one weekday.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeInterval {
    /// Day the class meets.
    pub weekday: Weekday,
    /// Start boundary (inclusive) on the canonical timeline.
    pub start: f64,
    /// End boundary (exclusive) on the canonical timeline.
    pub end: f64,
}

impl TimeInterval {
    /// Creates a new interval.
    pub fn new(weekday: Weekday, start: f64, end: f64) -> Self {
        Self {
            weekday,
            start,
            end,
        }
    }

    /// Duration in canonical units (one unit = one period).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether two intervals overlap.
    ///
    /// Strict half-open overlap: same weekday and each starts before the
    /// other ends. Touching boundaries do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.weekday == other.weekday && self.start < other.end && other.start < self.end
    }

    /// Renders this interval as wall-clock text, e.g. `"09:00-10:30"`.
    pub fn clock_range(&self) -> String {
        format!("{}-{}", clock_time(self.start), clock_time(self.end))
    }
}

/// Converts a canonical boundary to wall-clock `"HH:MM"` text.
///
/// Boundaries at or above `10.0` are on the night scale (`10.0` =
/// 18:00); below that, period 1 starts at 09:00. Half units render as
/// `:30`.
pub fn clock_time(t: f64) -> String {
    let half = (t.fract() - 0.5).abs() < MERGE_EPSILON;
    let minute = if half { 30 } else { 0 };
    let hour = if t >= 10.0 {
        18 + (t - 10.0).floor() as i64
    } else {
        8 + t.floor() as i64
    };
    format!("{hour:02}:{minute:02}")
}

/// Fuses contiguous or overlapping same-weekday intervals into minimal
/// runs.
///
/// Sorts by `(weekday order, start)` and merges any neighbor that starts
/// at or before the previous end (within [`MERGE_EPSILON`]). The result
/// covers the same wall-clock occupancy with the fewest intervals, and
/// per-weekday output is pairwise non-overlapping; adjacent fragments
/// left unmerged would otherwise be mistaken for distinct meetings
/// downstream.
pub fn merge_intervals(mut intervals: Vec<TimeInterval>) -> Vec<TimeInterval> {
    if intervals.len() < 2 {
        return intervals;
    }

    intervals.sort_by(|a, b| {
        a.weekday
            .index()
            .cmp(&b.weekday.index())
            .then(a.start.total_cmp(&b.start))
    });

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(intervals.len());
    let mut current = intervals[0];

    for next in intervals.into_iter().skip(1) {
        if current.weekday == next.weekday && next.start <= current.end + MERGE_EPSILON {
            // max keeps a contained interval from shrinking the run
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}
