//! Randomized greedy-with-restart assignment generator.
//!
//! Each attempt walks givers in input order and picks a recipient uniformly at
//! random from whoever is still allowed. An attempt that strands a giver is
//! discarded whole; there is no backtracking and no feasibility pre-check, so
//! success is probabilistic and bounded by the attempt budget.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::core::error::DrawError;
use crate::core::exclusions::ExclusionMap;
use crate::core::types::{Assignment, Pairing};

/// Attempt budget used when the caller has no configured value.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Produce a complete assignment for `names` honoring `exclusions`.
///
/// Guarantees on success: every name gives exactly once and receives exactly
/// once, nobody draws themselves, no excluded pair appears, and no two people
/// draw each other. Givers are processed in the same order on every attempt.
pub fn generate<R: Rng + ?Sized>(
    names: &[String],
    exclusions: &ExclusionMap,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Assignment, DrawError> {
    for attempt_no in 1..=max_attempts {
        match attempt(names, exclusions, rng) {
            Ok(assignment) => {
                info!(
                    attempt = attempt_no,
                    participants = names.len(),
                    "assignment found"
                );
                return Ok(assignment);
            }
            Err(stranded) => {
                debug!(
                    attempt = attempt_no,
                    giver = %names[stranded],
                    "attempt stranded giver"
                );
            }
        }
    }

    let exclusion_count = exclusions.entry_count();
    warn!(
        attempts = max_attempts,
        participants = names.len(),
        exclusions = exclusion_count,
        "attempt budget exhausted"
    );
    Err(DrawError::UnsatisfiableConstraints {
        attempts: max_attempts,
        participants: names.len(),
        exclusions: exclusion_count,
    })
}

/// One pass over all givers. On failure returns the index of the stranded giver.
fn attempt<R: Rng + ?Sized>(
    names: &[String],
    exclusions: &ExclusionMap,
    rng: &mut R,
) -> Result<Assignment, usize> {
    let count = names.len();
    let mut drawn = vec![false; count];
    let mut gives_to: Vec<Option<usize>> = vec![None; count];

    for giver in 0..count {
        let candidates: Vec<usize> = (0..count)
            .filter(|&recipient| {
                recipient != giver
                    && !drawn[recipient]
                    && gives_to[recipient] != Some(giver)
                    && !exclusions.is_excluded(&names[giver], &names[recipient])
            })
            .collect();

        let chosen = candidates.choose(rng).copied().ok_or(giver)?;
        gives_to[giver] = Some(chosen);
        drawn[chosen] = true;
    }

    let assignment = gives_to
        .into_iter()
        .enumerate()
        .filter_map(|(giver, recipient)| {
            recipient.map(|recipient| Pairing::new(&names[giver], &names[recipient]))
        })
        .collect();
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::test_support::{exclusions, names};

    fn assert_valid(names: &[String], exclusions: &ExclusionMap, assignment: &Assignment) {
        assert_eq!(assignment.len(), names.len());
        let givers: HashSet<&str> = assignment.iter().map(|p| p.name.as_str()).collect();
        let recipients: HashSet<&str> = assignment.iter().map(|p| p.gives_to.as_str()).collect();
        let expected: HashSet<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(givers, expected);
        assert_eq!(recipients, expected);
        for pairing in assignment {
            assert_ne!(pairing.name, pairing.gives_to);
            assert!(!exclusions.is_excluded(&pairing.name, &pairing.gives_to));
        }
    }

    #[test]
    fn three_names_without_exclusions_succeed() {
        let names = names(&["Alice", "Bob", "Charlie"]);
        let exclusions = ExclusionMap::new();
        let mut rng = StdRng::seed_from_u64(7);
        let assignment =
            generate(&names, &exclusions, DEFAULT_MAX_ATTEMPTS, &mut rng).expect("generate");
        assert_valid(&names, &exclusions, &assignment);
        let givers: Vec<&str> = assignment.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(givers, vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn results_hold_invariants_across_seeds() {
        let names = names(&["Alice", "Bob", "Charlie", "Dana", "Eve", "Frank"]);
        let exclusions = exclusions(&[
            ("Alice", &["Bob"]),
            ("Bob", &["Alice"]),
            ("Dana", &["Eve", "Frank"]),
        ]);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let assignment =
                generate(&names, &exclusions, DEFAULT_MAX_ATTEMPTS, &mut rng).expect("generate");
            assert_valid(&names, &exclusions, &assignment);
        }
    }

    #[test]
    fn never_pairs_two_people_with_each_other() {
        let names = names(&["Alice", "Bob", "Charlie", "Dana"]);
        let exclusions = ExclusionMap::new();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let assignment =
                generate(&names, &exclusions, DEFAULT_MAX_ATTEMPTS, &mut rng).expect("generate");
            let pairs: HashSet<(&str, &str)> = assignment
                .iter()
                .map(|p| (p.name.as_str(), p.gives_to.as_str()))
                .collect();
            for (giver, recipient) in &pairs {
                assert!(!pairs.contains(&(*recipient, *giver)));
            }
        }
    }

    #[test]
    fn two_names_always_exhaust_the_budget() {
        let names = names(&["Alice", "Bob"]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&names, &ExclusionMap::new(), 50, &mut rng).unwrap_err();
        assert_eq!(
            err,
            DrawError::UnsatisfiableConstraints {
                attempts: 50,
                participants: 2,
                exclusions: 0,
            }
        );
    }

    #[test]
    fn stranded_first_giver_fails_with_counts() {
        let names = names(&["Alice", "Bob", "Charlie"]);
        let exclusions = exclusions(&[("Alice", &["Bob", "Charlie"]), ("Bob", &["Charlie"])]);
        let mut rng = StdRng::seed_from_u64(3);
        let err = generate(&names, &exclusions, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap_err();
        assert_eq!(
            err,
            DrawError::UnsatisfiableConstraints {
                attempts: DEFAULT_MAX_ATTEMPTS,
                participants: 3,
                exclusions: 3,
            }
        );
    }

    #[test]
    fn missing_exclusion_entries_mean_no_exclusions() {
        let names = names(&["Alice", "Bob", "Charlie"]);
        let exclusions = exclusions(&[("Zed", &["Alice"])]);
        let mut rng = StdRng::seed_from_u64(11);
        let assignment =
            generate(&names, &exclusions, DEFAULT_MAX_ATTEMPTS, &mut rng).expect("generate");
        assert_valid(&names, &exclusions, &assignment);
    }

    #[test]
    fn zero_budget_fails_without_attempting() {
        let names = names(&["Alice", "Bob", "Charlie"]);
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&names, &ExclusionMap::new(), 0, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            DrawError::UnsatisfiableConstraints { attempts: 0, .. }
        ));
    }
}
