//! Engine error types.
//!
//! Domain outcomes — no valid timetable, empty wishlist, capped result
//! sets — are returned as data, never as errors. The error type covers
//! only conditions the caller must treat as failures.

use thiserror::Error;

/// Fatal engine conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The backtracking search exceeded its step budget before
    /// finishing. The wishlist is too large for exhaustive search under
    /// the configured bound.
    #[error("combination search exceeded its step budget of {budget} steps")]
    StepBudgetExceeded {
        /// The budget that was exhausted.
        budget: u64,
    },
}
