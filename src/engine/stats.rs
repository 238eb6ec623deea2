//! Per-combination statistics.
//!
//! A read-only derived view of one combination: credit total, category
//! distribution, per-weekday class counts, and the resulting free days.
//! Has no effect on the search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Course, CourseType, Weekday, ACADEMIC_WEEK};

use super::ranker::total_credits;

/// Derived summary of one combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationSummary {
    /// Sum of credit hours.
    pub total_credits: u32,
    /// Number of courses.
    pub course_count: usize,
    /// Courses per catalog category.
    pub by_type: BTreeMap<CourseType, usize>,
    /// Occupied class slots per weekday (courses flattened to
    /// intervals).
    pub by_weekday: BTreeMap<Weekday, usize>,
    /// Academic days (Mon–Fri) with no classes. Weekend days are not
    /// academic days and are never reported here.
    pub free_days: Vec<Weekday>,
}

impl CombinationSummary {
    /// Computes the summary for a combination.
    pub fn collect(courses: &[Course]) -> Self {
        let mut by_type: BTreeMap<CourseType, usize> = BTreeMap::new();
        for course in courses {
            *by_type.entry(course.course_type).or_insert(0) += 1;
        }

        let mut by_weekday: BTreeMap<Weekday, usize> = BTreeMap::new();
        for interval in courses.iter().flat_map(|c| c.intervals.iter()) {
            *by_weekday.entry(interval.weekday).or_insert(0) += 1;
        }

        let free_days = ACADEMIC_WEEK
            .into_iter()
            .filter(|day| !by_weekday.contains_key(day))
            .collect();

        Self {
            total_credits: total_credits(courses),
            course_count: courses.len(),
            by_type,
            by_weekday,
            free_days,
        }
    }
}
