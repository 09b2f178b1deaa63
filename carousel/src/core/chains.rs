//! Cycle ordering of an assignment for reveal.

use std::collections::{HashMap, HashSet};

use crate::core::types::Pairing;

/// Reorder `results` so each give-cycle appears contiguously.
///
/// Cycles start from the first unvisited giver in input order and follow
/// `gives_to` until the chain closes. The output is a permutation of the input.
pub fn order_as_chains(results: &[Pairing]) -> Vec<Pairing> {
    split_into_chains(results).into_iter().flatten().collect()
}

/// Same traversal as [`order_as_chains`], keeping each cycle separate.
pub fn split_into_chains(results: &[Pairing]) -> Vec<Vec<Pairing>> {
    let by_giver: HashMap<&str, &Pairing> = results
        .iter()
        .map(|pairing| (pairing.name.as_str(), pairing))
        .collect();
    let mut visited: HashSet<&str> = HashSet::with_capacity(results.len());
    let mut chains = Vec::new();

    for start in results {
        if visited.contains(start.name.as_str()) {
            continue;
        }
        let mut chain = Vec::new();
        let mut current = Some(start);
        while let Some(pairing) = current {
            if !visited.insert(pairing.name.as_str()) {
                break;
            }
            chain.push(pairing.clone());
            // A recipient with no giver entry ends the chain early instead of looping.
            current = by_giver.get(pairing.gives_to.as_str()).copied();
        }
        chains.push(chain);
    }

    chains
}
