//! Timetable domain models.
//!
//! Core value types for the combination engine: weekdays on the fixed
//! Korean-glyph scale, half-open time intervals on the canonical period
//! timeline, immutable course records, and wishlist entries.
//!
//! All types are plain values: courses own their intervals by value and
//! intervals never point back at their course.

mod course;
mod interval;
mod weekday;
mod wishlist;

pub use course::{Course, CourseType, DeliveryMode};
pub use interval::{clock_time, merge_intervals, TimeInterval, MERGE_EPSILON};
pub use weekday::{Weekday, ACADEMIC_WEEK};
pub use wishlist::{dedup_by_name, WishlistEntry};
