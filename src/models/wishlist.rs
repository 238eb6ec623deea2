//! Wishlist entries and deduplication.
//!
//! The wishlist may legitimately contain several catalog sections of the
//! same course name; the engine keeps the first occurrence per distinct
//! name and discards the rest before search. This is policy, not an
//! error condition.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Course;

/// A candidate course on a student's wishlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// The candidate course.
    pub course: Course,
    /// Whether the course must appear in every generated combination.
    pub is_required: bool,
    /// Caller-supplied priority hint (unused by the default ranking).
    pub priority: i32,
}

impl WishlistEntry {
    /// Creates an optional entry with priority 0.
    pub fn new(course: Course) -> Self {
        Self {
            course,
            is_required: false,
            priority: 0,
        }
    }

    /// Marks the entry as required.
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Sets the priority hint.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Keeps the first entry per distinct course name, preserving order.
///
/// Later entries with an already-seen name are dropped regardless of
/// their required flag or priority.
pub fn dedup_by_name(wishlist: Vec<WishlistEntry>) -> Vec<WishlistEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    wishlist
        .into_iter()
        .filter(|entry| seen.insert(entry.course.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseType;

    fn entry(id: u64, name: &str) -> WishlistEntry {
        WishlistEntry::new(Course::new(id, name, 3, CourseType::MajorCore))
    }

    #[test]
    fn test_entry_builder() {
        let e = entry(1, "알고리즘").required().with_priority(5);
        assert!(e.is_required);
        assert_eq!(e.priority, 5);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let deduped = dedup_by_name(vec![
            entry(1, "알고리즘"),
            entry(2, "운영체제"),
            entry(3, "알고리즘"), // later section of the same course
        ]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].course.id, 1);
        assert_eq!(deduped[1].course.id, 2);
    }

    #[test]
    fn test_dedup_drops_later_required_flag() {
        let deduped = dedup_by_name(vec![
            entry(1, "알고리즘"),
            entry(2, "알고리즘").required(),
        ]);

        // First occurrence wins, including its optional status
        assert_eq!(deduped.len(), 1);
        assert!(!deduped[0].is_required);
    }

    #[test]
    fn test_dedup_preserves_order() {
        let deduped = dedup_by_name(vec![entry(3, "c"), entry(1, "a"), entry(2, "b")]);
        let names: Vec<&str> = deduped.iter().map(|e| e.course.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
