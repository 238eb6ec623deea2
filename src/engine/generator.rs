//! Backtracking combination search.

use std::collections::HashSet;

use tracing::trace;

use crate::conflict::combination_valid;
use crate::error::EngineError;
use crate::models::{Course, Weekday};

use super::CREDIT_TOLERANCE;

/// Mutable search state for one generation call.
///
/// The accumulator is pushed/popped symmetrically around each recursive
/// visit; nothing is shared across calls, so concurrent generation
/// requests need no locking.
struct Search<'a> {
    optional: &'a [Course],
    target: i64,
    max_results: usize,
    excluded: &'a HashSet<Weekday>,
    budget: Option<u64>,
    steps: u64,
    current: Vec<Course>,
    current_credits: i64,
    results: Vec<Vec<Course>>,
}

/// Enumerates valid combinations anchored on the required subset.
///
/// Optional courses are considered in wishlist order through a
/// forward-only cursor, so each subset is generated exactly once and
/// never as a permutation of another. A combination is recorded when
/// its credit total lands within [`CREDIT_TOLERANCE`] of the target and
/// the whole set is conflict-free; a branch is abandoned once its total
/// exceeds the window, since adding courses only increases it.
///
/// The caller is expected to have verified the required subset already;
/// results are in discovery order, capped at `max_results`.
///
/// # Errors
///
/// [`EngineError::StepBudgetExceeded`] when the traversal visits more
/// nodes than `budget` allows (`None` disables the guard).
pub fn search_combinations(
    required: &[Course],
    optional: &[Course],
    target_credits: u32,
    max_results: usize,
    excluded_weekdays: &HashSet<Weekday>,
    step_budget: Option<u64>,
) -> Result<Vec<Vec<Course>>, EngineError> {
    let current: Vec<Course> = required.to_vec();
    let current_credits: i64 = current.iter().map(|c| i64::from(c.credit_hours)).sum();

    let mut search = Search {
        optional,
        target: i64::from(target_credits),
        max_results,
        excluded: excluded_weekdays,
        budget: step_budget,
        steps: 0,
        current,
        current_credits,
        results: Vec::new(),
    };

    search.visit(0)?;

    trace!(
        results = search.results.len(),
        steps = search.steps,
        "search space traversed"
    );

    Ok(search.results)
}

impl Search<'_> {
    fn visit(&mut self, cursor: usize) -> Result<(), EngineError> {
        self.steps += 1;
        if let Some(budget) = self.budget {
            if self.steps > budget {
                return Err(EngineError::StepBudgetExceeded { budget });
            }
        }

        if self.results.len() >= self.max_results {
            return Ok(());
        }

        let tolerance = i64::from(CREDIT_TOLERANCE);
        if self.current_credits >= self.target - tolerance
            && self.current_credits <= self.target + tolerance
            && combination_valid(&self.current, self.excluded)
        {
            self.results.push(self.current.clone());
        }

        // Over the window: deeper branches only add credits
        if self.current_credits > self.target + tolerance {
            return Ok(());
        }

        for i in cursor..self.optional.len() {
            if self.results.len() >= self.max_results {
                break;
            }

            let course = self.optional[i].clone();
            let credits = i64::from(course.credit_hours);
            self.current_credits += credits;
            self.current.push(course);

            let outcome = self.visit(i + 1);

            self.current.pop();
            self.current_credits -= credits;

            outcome?;
        }

        Ok(())
    }
}
