//! Fold prior draw results into exclusions so reruns never repeat a pairing.

use crate::core::exclusions::ExclusionMap;
use crate::core::types::Pairing;

/// Copy `base` and forbid every giver → recipient pair found in `results`.
///
/// Set semantics: pairs already present are not duplicated, so merging the same
/// results twice gives the same map as merging once.
pub fn merge_results(base: &ExclusionMap, results: &[Pairing]) -> ExclusionMap {
    let mut merged = base.clone();
    for pairing in results {
        merged.insert(&pairing.name, &pairing.gives_to);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::exclusions;

    #[test]
    fn adds_prior_pairings_as_exclusions() {
        let base = exclusions(&[("Alice", &["Charlie"])]);
        let results = vec![Pairing::new("Alice", "Bob"), Pairing::new("Bob", "Charlie")];
        let merged = merge_results(&base, &results);
        assert_eq!(
            merged,
            exclusions(&[("Alice", &["Bob", "Charlie"]), ("Bob", &["Charlie"])])
        );
        assert_eq!(base, exclusions(&[("Alice", &["Charlie"])]));
    }

    #[test]
    fn existing_pair_is_not_duplicated() {
        let base = exclusions(&[("Alice", &["Bob"])]);
        let merged = merge_results(&base, &[Pairing::new("Alice", "Bob")]);
        assert_eq!(merged.excluded_for("Alice").collect::<Vec<_>>(), vec!["Bob"]);
        assert_eq!(merged.entry_count(), 1);
    }

    #[test]
    fn merging_twice_equals_merging_once() {
        let base = exclusions(&[("Dana", &["Eve"])]);
        let results = vec![Pairing::new("Alice", "Bob"), Pairing::new("Eve", "Dana")];
        let once = merge_results(&base, &results);
        let twice = merge_results(&once, &results);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_inputs_merge_to_empty() {
        assert_eq!(merge_results(&ExclusionMap::new(), &[]), ExclusionMap::new());
    }
}
