//! Time-conflict checks for courses and combinations.
//!
//! All checks operate on merged canonical intervals. Overlap is strict
//! half-open: classes that merely touch at a boundary (one ends exactly
//! where another starts) do not conflict.

use std::collections::HashSet;

use crate::models::{Course, TimeInterval, Weekday};

/// Whether two intervals overlap (same weekday, strict half-open).
#[inline]
pub fn intervals_overlap(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.overlaps(b)
}

/// Whether any meeting of one course overlaps any meeting of another.
pub fn courses_conflict(a: &Course, b: &Course) -> bool {
    a.intervals
        .iter()
        .any(|ia| b.intervals.iter().any(|ib| ia.overlaps(ib)))
}

/// Whether a candidate course conflicts with any course already placed.
///
/// Convenience for adding a single course to an existing timetable.
pub fn conflicts_with_any(existing: &[Course], candidate: &Course) -> bool {
    existing.iter().any(|c| courses_conflict(c, candidate))
}

/// Whether a set of courses forms a valid combination.
///
/// Valid means: no pair of courses conflicts (all pairs are checked) and
/// no course meets on an excluded weekday. Sets of size 0 or 1 pass the
/// pairwise check trivially.
pub fn combination_valid(courses: &[Course], excluded_weekdays: &HashSet<Weekday>) -> bool {
    for (i, a) in courses.iter().enumerate() {
        for b in &courses[i + 1..] {
            if courses_conflict(a, b) {
                return false;
            }
        }
    }

    if !excluded_weekdays.is_empty() {
        for course in courses {
            if course
                .intervals
                .iter()
                .any(|iv| excluded_weekdays.contains(&iv.weekday))
            {
                return false;
            }
        }
    }

    true
}
