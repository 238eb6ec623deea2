//! Combination search, ranking, and statistics.
//!
//! The engine answers one question per call: which subsets of the
//! wishlist form a valid timetable? A valid combination contains every
//! required course, has zero pairwise time overlap, avoids the excluded
//! weekdays, and totals within [`CREDIT_TOLERANCE`] credit hours of the
//! target.
//!
//! # Algorithm
//!
//! Depth-first backtracking anchored on the required subset, with a
//! forward-only cursor over optional courses (so each subset is visited
//! once), credit-window pruning, and a global result cap. Discovery
//! order is not quality order; [`rank_combinations`] sorts results by
//! distance from the target afterward.
//!
//! # Contract
//!
//! "No valid timetable" — including a required subset that conflicts
//! with itself — is a legitimate answer returned as an empty result.
//! The only error is an exhausted step budget on oversized wishlists.

mod generator;
mod ranker;
mod stats;

pub use generator::search_combinations;
pub use ranker::rank_combinations;
pub use stats::CombinationSummary;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conflict::combination_valid;
use crate::error::EngineError;
use crate::models::{dedup_by_name, Course, Weekday, WishlistEntry};

/// Accepted distance from the target credit total.
pub const CREDIT_TOLERANCE: u32 = 3;

/// Default search step budget.
pub const DEFAULT_STEP_BUDGET: u64 = 1_000_000;

/// One timetable-generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Candidate courses; duplicates by name are removed before search
    /// (first occurrence wins).
    pub wishlist: Vec<WishlistEntry>,
    /// Desired credit-hour total.
    pub target_credits: u32,
    /// Maximum number of combinations to return.
    pub max_results: usize,
    /// Weekdays that must stay free of classes.
    pub excluded_weekdays: HashSet<Weekday>,
    /// Search step budget; `None` disables the guard.
    pub step_budget: Option<u64>,
}

impl GenerationRequest {
    /// Creates a request with default limits (10 results, default
    /// step budget, no excluded weekdays).
    pub fn new(wishlist: Vec<WishlistEntry>, target_credits: u32) -> Self {
        Self {
            wishlist,
            target_credits,
            max_results: 10,
            excluded_weekdays: HashSet::new(),
            step_budget: Some(DEFAULT_STEP_BUDGET),
        }
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Adds a weekday that must stay free.
    pub fn with_excluded_weekday(mut self, weekday: Weekday) -> Self {
        self.excluded_weekdays.insert(weekday);
        self
    }

    /// Sets the step budget (`None` disables the guard).
    pub fn with_step_budget(mut self, budget: Option<u64>) -> Self {
        self.step_budget = budget;
        self
    }
}

/// One generated combination with its derived summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCombination {
    /// The courses in the combination (required subset included).
    pub courses: Vec<Course>,
    /// Derived statistics for this combination.
    pub summary: CombinationSummary,
}

/// The ordered result of a generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Combinations sorted by distance from the target credit total.
    pub combinations: Vec<RankedCombination>,
    /// Echo of the applied target.
    pub target_credits: u32,
    /// Echo of the applied excluded weekdays, in weekday order.
    pub excluded_weekdays: Vec<Weekday>,
}

/// Runs the full pipeline: dedup → search → rank → summarize.
///
/// Returns `Ok` with an empty result when the wishlist is empty or the
/// required subset is itself invalid; required courses are never dropped
/// to resolve a conflict.
pub fn generate(request: &GenerationRequest) -> Result<GenerationResult, EngineError> {
    let mut excluded_echo: Vec<Weekday> = request.excluded_weekdays.iter().copied().collect();
    excluded_echo.sort();

    let empty = |reason: &str| {
        debug!(reason, "returning empty result set");
        GenerationResult {
            combinations: Vec::new(),
            target_credits: request.target_credits,
            excluded_weekdays: excluded_echo.clone(),
        }
    };

    if request.wishlist.is_empty() {
        return Ok(empty("empty wishlist"));
    }

    let deduplicated = dedup_by_name(request.wishlist.clone());

    let required: Vec<Course> = deduplicated
        .iter()
        .filter(|e| e.is_required)
        .map(|e| e.course.clone())
        .collect();
    let optional: Vec<Course> = deduplicated
        .iter()
        .filter(|e| !e.is_required)
        .map(|e| e.course.clone())
        .collect();

    // Required courses are never dropped: an internally conflicting
    // required subset means no combination exists at all.
    if !combination_valid(&required, &request.excluded_weekdays) {
        return Ok(empty("required subset invalid"));
    }

    let found = search_combinations(
        &required,
        &optional,
        request.target_credits,
        request.max_results,
        &request.excluded_weekdays,
        request.step_budget,
    )?;

    debug!(
        found = found.len(),
        wishlist = deduplicated.len(),
        "combination search finished"
    );

    let ranked = rank_combinations(found, request.target_credits, request.max_results);

    let combinations = ranked
        .into_iter()
        .map(|courses| {
            let summary = CombinationSummary::collect(&courses);
            RankedCombination { courses, summary }
        })
        .collect();

    Ok(GenerationResult {
        combinations,
        target_credits: request.target_credits,
        excluded_weekdays: excluded_echo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::courses_conflict;
    use crate::models::{CourseType, TimeInterval};

    fn course(id: u64, name: &str, credits: u32, meetings: &[(Weekday, f64, f64)]) -> Course {
        Course::new(id, name, credits, CourseType::MajorCore).with_intervals(
            meetings
                .iter()
                .map(|&(d, s, e)| TimeInterval::new(d, s, e))
                .collect(),
        )
    }

    /// Wishlist from the engine contract: A required, B touches A at a
    /// boundary, C clashes with both A and B on Monday.
    fn abc_wishlist() -> Vec<WishlistEntry> {
        vec![
            WishlistEntry::new(course(1, "A", 3, &[(Weekday::Mon, 3.0, 5.0)])).required(),
            WishlistEntry::new(course(2, "B", 3, &[(Weekday::Mon, 1.0, 3.0)])),
            WishlistEntry::new(course(3, "C", 3, &[(Weekday::Mon, 2.0, 4.0)])),
        ]
    }

    #[test]
    fn test_abc_scenario_best_combination() {
        let request = GenerationRequest::new(abc_wishlist(), 6);
        let result = generate(&request).unwrap();

        // {A,C} is out because C clashes with A, {A,B,C} because C
        // clashes with B. {A,B} hits the target exactly and ranks
        // first; the bare required subset {A} sits inside the credit
        // window too and trails at distance 3.
        let name_sets: Vec<Vec<&str>> = result
            .combinations
            .iter()
            .map(|combo| combo.courses.iter().map(|c| c.name.as_str()).collect())
            .collect();
        assert_eq!(name_sets, vec![vec!["A", "B"], vec!["A"]]);
    }

    #[test]
    fn test_bc_conflict_never_returned_together() {
        let request = GenerationRequest::new(abc_wishlist(), 9).with_max_results(50);
        let result = generate(&request).unwrap();

        assert!(!result.combinations.is_empty());
        for combo in &result.combinations {
            let names: Vec<&str> = combo.courses.iter().map(|c| c.name.as_str()).collect();
            assert!(!(names.contains(&"B") && names.contains(&"C")));
        }
    }

    #[test]
    fn test_returned_combinations_honor_all_invariants() {
        let wishlist = vec![
            WishlistEntry::new(course(1, "req", 3, &[(Weekday::Mon, 1.0, 3.0)])).required(),
            WishlistEntry::new(course(2, "opt1", 3, &[(Weekday::Tue, 1.0, 3.0)])),
            WishlistEntry::new(course(3, "opt2", 3, &[(Weekday::Tue, 2.0, 4.0)])),
            WishlistEntry::new(course(4, "opt3", 2, &[(Weekday::Fri, 1.0, 2.0)])),
            WishlistEntry::new(course(5, "opt4", 3, &[(Weekday::Thu, 5.0, 7.0)])),
        ];
        let request = GenerationRequest::new(wishlist, 9)
            .with_max_results(25)
            .with_excluded_weekday(Weekday::Fri);
        let result = generate(&request).unwrap();

        assert!(!result.combinations.is_empty());
        for combo in &result.combinations {
            // Required course present
            assert!(combo.courses.iter().any(|c| c.name == "req"));
            // Pairwise conflict-free
            for (i, a) in combo.courses.iter().enumerate() {
                for b in &combo.courses[i + 1..] {
                    assert!(!courses_conflict(a, b));
                }
            }
            // Credit window
            let total: u32 = combo.courses.iter().map(|c| c.credit_hours).sum();
            assert!((total as i64 - 9).unsigned_abs() <= CREDIT_TOLERANCE as u64);
            assert_eq!(combo.summary.total_credits, total);
            // Excluded weekday untouched
            for c in &combo.courses {
                assert!(c.intervals.iter().all(|iv| iv.weekday != Weekday::Fri));
            }
        }
    }

    #[test]
    fn test_empty_wishlist_is_empty_ok() {
        let request = GenerationRequest::new(Vec::new(), 18);
        let result = generate(&request).unwrap();
        assert!(result.combinations.is_empty());
        assert_eq!(result.target_credits, 18);
    }

    #[test]
    fn test_conflicting_required_subset_is_empty_ok() {
        let wishlist = vec![
            WishlistEntry::new(course(1, "r1", 3, &[(Weekday::Mon, 1.0, 3.0)])).required(),
            WishlistEntry::new(course(2, "r2", 3, &[(Weekday::Mon, 2.0, 4.0)])).required(),
            WishlistEntry::new(course(3, "opt", 3, &[(Weekday::Tue, 1.0, 3.0)])),
        ];
        let result = generate(&GenerationRequest::new(wishlist, 6)).unwrap();
        assert!(result.combinations.is_empty());
    }

    #[test]
    fn test_required_on_excluded_weekday_is_empty_ok() {
        let wishlist = vec![
            WishlistEntry::new(course(1, "r", 3, &[(Weekday::Fri, 1.0, 3.0)])).required(),
            WishlistEntry::new(course(2, "opt", 3, &[(Weekday::Tue, 1.0, 3.0)])),
        ];
        let request = GenerationRequest::new(wishlist, 6).with_excluded_weekday(Weekday::Fri);
        let result = generate(&request).unwrap();
        assert!(result.combinations.is_empty());
    }

    #[test]
    fn test_duplicate_names_deduplicated_before_search() {
        // Two sections of "B"; only the first participates, so at most
        // one combination may contain a "B"
        let wishlist = vec![
            WishlistEntry::new(course(1, "A", 3, &[(Weekday::Wed, 1.0, 3.0)])).required(),
            WishlistEntry::new(course(2, "B", 3, &[(Weekday::Mon, 1.0, 3.0)])),
            WishlistEntry::new(course(3, "B", 3, &[(Weekday::Tue, 1.0, 3.0)])),
        ];
        let request = GenerationRequest::new(wishlist, 6).with_max_results(50);
        let result = generate(&request).unwrap();

        // Best combination pairs A with the first "B" section; the
        // second section (id 3) participates nowhere
        let ids: Vec<u64> = result.combinations[0].courses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        for combo in &result.combinations {
            assert!(combo.courses.iter().all(|c| c.id != 3));
        }
    }

    #[test]
    fn test_step_budget_exceeded_is_error() {
        // 24 optional one-credit courses, all conflict-free: huge space
        let mut wishlist = Vec::new();
        for i in 0..24u64 {
            let day = Weekday::ALL[(i % 5) as usize];
            let start = 1.0 + (i / 5) as f64 * 2.0;
            wishlist.push(WishlistEntry::new(course(
                i,
                &format!("c{i}"),
                1,
                &[(day, start, start + 1.0)],
            )));
        }
        let request = GenerationRequest::new(wishlist, 20)
            .with_max_results(usize::MAX)
            .with_step_budget(Some(100));

        let err = generate(&request).unwrap_err();
        assert_eq!(err, EngineError::StepBudgetExceeded { budget: 100 });
    }

    #[test]
    fn test_result_serde_shape() {
        let request = GenerationRequest::new(abc_wishlist(), 6);
        let result = generate(&request).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["target_credits"], 6);
        assert!(json["combinations"].is_array());
        assert!(json["combinations"][0]["summary"]["total_credits"].is_number());
    }
}
