//! Timetable combination engine for course-registration planning.
//!
//! Takes a wishlist of candidate courses — each carrying weekly class
//! periods parsed from a compact domain notation — and enumerates all
//! conflict-free timetables that contain every mandatory course, avoid
//! chosen free weekdays, and land within a credit window around a target.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Weekday`, `TimeInterval`, `Course`,
//!   `CourseType`, `WishlistEntry`
//! - **`parser`**: Period-notation parser (`"월 7-9"`, `"화 야1-야2"`)
//!   onto the canonical timeline
//! - **`conflict`**: Pairwise and set-wide overlap checks
//! - **`engine`**: Backtracking combination search, ranking, and
//!   per-combination statistics
//!
//! # Pipeline
//!
//! Raw notation → [`parser::parse_time_codes`] → merged
//! [`models::TimeInterval`] values → [`models::Course`] → wishlist →
//! [`engine::generate`] → ranked combinations with summaries.
//!
//! The engine is a single synchronous, CPU-bound call per request: no
//! I/O, no shared state across calls. "No valid timetable" is returned
//! as an empty result, never as an error; the only fatal condition is
//! an exhausted search step budget.

pub mod conflict;
pub mod engine;
pub mod error;
pub mod models;
pub mod parser;

pub use error::EngineError;
