//! Forbidden giver → recipient rules.
//!
//! The map is directional. Mutual rules (couples) are two directional entries
//! written together by [`ExclusionMap::apply_mutual`].

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Mapping from giver to the set of names that giver must not be assigned.
///
/// A giver with no entry has no exclusions. Serializes as
/// `{ "giver": ["excluded", ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionMap(BTreeMap<String, BTreeSet<String>>);

impl ExclusionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `recipient` is forbidden for `giver`.
    pub fn is_excluded(&self, giver: &str, recipient: &str) -> bool {
        self.0
            .get(giver)
            .is_some_and(|set| set.contains(recipient))
    }

    /// Forbidden recipients for `giver` (empty if none).
    pub fn excluded_for<'a>(
        &'a self,
        giver: &str,
    ) -> impl Iterator<Item = &'a str> + use<'a> {
        self.0.get(giver).into_iter().flatten().map(String::as_str)
    }

    /// Add `recipient` to `giver`'s forbidden set. Returns false if already present.
    pub fn insert(&mut self, giver: &str, recipient: &str) -> bool {
        self.0
            .entry(giver.to_string())
            .or_default()
            .insert(recipient.to_string())
    }

    /// Remove `recipient` from `giver`'s forbidden set, dropping an emptied entry.
    /// Returns false if it was not present.
    pub fn remove(&mut self, giver: &str, recipient: &str) -> bool {
        let Some(set) = self.0.get_mut(giver) else {
            return false;
        };
        let removed = set.remove(recipient);
        if set.is_empty() {
            self.0.remove(giver);
        }
        removed
    }

    /// Flip a single directional exclusion. Returns true if it is now present.
    pub fn toggle(&mut self, giver: &str, recipient: &str) -> bool {
        if self.remove(giver, recipient) {
            false
        } else {
            self.insert(giver, recipient);
            true
        }
    }

    /// Forbid `a` and `b` from drawing each other, in both directions.
    ///
    /// Idempotent. Returns true if either direction was newly added.
    pub fn apply_mutual(&mut self, a: &str, b: &str) -> bool {
        let forward = self.insert(a, b);
        let backward = self.insert(b, a);
        forward || backward
    }

    /// Undo [`Self::apply_mutual`], removing both directions.
    ///
    /// Returns true if either direction was present.
    pub fn remove_mutual(&mut self, a: &str, b: &str) -> bool {
        let forward = self.remove(a, b);
        let backward = self.remove(b, a);
        forward || backward
    }

    /// Total number of directional exclusion entries.
    pub fn entry_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    /// Givers with at least one exclusion, with their forbidden sets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(giver, set)| (giver.as_str(), set))
    }

    /// Human-readable summary, one line per giver with exclusions.
    pub fn summary(&self) -> Vec<String> {
        self.iter()
            .map(|(giver, set)| {
                let excluded: Vec<&str> = set.iter().map(String::as_str).collect();
                format!("{} cannot be matched with: {}", giver, excluded.join(", "))
            })
            .collect()
    }
}

impl<G, R, I> FromIterator<(G, I)> for ExclusionMap
where
    G: Into<String>,
    R: Into<String>,
    I: IntoIterator<Item = R>,
{
    fn from_iter<T: IntoIterator<Item = (G, I)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (giver, excluded) in iter {
            let giver = giver.into();
            let set = map.0.entry(giver).or_default();
            set.extend(excluded.into_iter().map(Into::into));
        }
        map
    }
}
