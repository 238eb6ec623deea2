//! Result ordering.

use crate::models::Course;

/// Total credit hours of a combination.
pub(crate) fn total_credits(combination: &[Course]) -> u32 {
    combination.iter().map(|c| c.credit_hours).sum()
}

/// Orders combinations by distance from the target credit total.
///
/// Stable ascending sort on `abs(total - target)` — ties keep discovery
/// order — then truncation to `max_results`. Pure reordering with no
/// knowledge of the search; a priority-weighted policy could replace it
/// without touching generation.
pub fn rank_combinations(
    mut combinations: Vec<Vec<Course>>,
    target_credits: u32,
    max_results: usize,
) -> Vec<Vec<Course>> {
    let target = i64::from(target_credits);
    combinations.sort_by_key(|combo| (i64::from(total_credits(combo)) - target).abs());
    combinations.truncate(max_results);
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseType;

    fn combo(credits: &[u32]) -> Vec<Course> {
        credits
            .iter()
            .enumerate()
            .map(|(i, &cr)| Course::new(i as u64, format!("c{i}"), cr, CourseType::MajorCore))
            .collect()
    }

    #[test]
    fn test_rank_by_distance_from_target() {
        let ranked = rank_combinations(
            vec![combo(&[3, 3]), combo(&[3, 3, 3]), combo(&[3, 3, 3, 3])],
            9,
            10,
        );

        let totals: Vec<u32> = ranked.iter().map(|c| total_credits(c)).collect();
        assert_eq!(totals, vec![9, 6, 12]); // distances 0, 3, 3
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        // 6 and 12 are both distance 3 from 9; 6 was discovered first
        let ranked = rank_combinations(vec![combo(&[3, 3]), combo(&[3, 3, 3, 3])], 9, 10);
        assert_eq!(total_credits(&ranked[0]), 6);
        assert_eq!(total_credits(&ranked[1]), 12);
    }

    #[test]
    fn test_truncates_to_max_results() {
        let ranked = rank_combinations(
            vec![combo(&[3]), combo(&[3, 3]), combo(&[3, 3, 3])],
            3,
            2,
        );
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_combinations(Vec::new(), 18, 10).is_empty());
    }
}
