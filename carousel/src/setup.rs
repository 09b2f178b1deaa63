//! Participant and exclusion edits for `names`, `rename`, `exclude`, `couple`.

use anyhow::{Result, bail};
use tracing::debug;

use crate::io::store::DrawState;

/// Replace the participant list. Results from the old list are discarded.
pub fn set_names(state: &mut DrawState, names: Vec<String>) {
    if state.names != names {
        state.clear_results();
    }
    state.names = names;
}

/// Set the draw name (trimmed).
pub fn rename(state: &mut DrawState, draw_name: &str) -> Result<()> {
    let draw_name = draw_name.trim();
    if draw_name.is_empty() {
        bail!("draw name must not be empty");
    }
    state.draw_name = draw_name.to_string();
    Ok(())
}

/// Flip `giver` → `recipient` exclusion. Returns true if it is now in force.
pub fn toggle_exclusion(state: &mut DrawState, giver: &str, recipient: &str) -> Result<bool> {
    ensure_pair(state, giver, recipient)?;
    let excluded = state.exclusions.toggle(giver, recipient);
    debug!(giver, recipient, excluded, "exclusion toggled");
    Ok(excluded)
}

/// Forbid `a` and `b` from drawing each other. Returns false if already in force.
pub fn apply_couple(state: &mut DrawState, a: &str, b: &str) -> Result<bool> {
    ensure_pair(state, a, b)?;
    let added = state.exclusions.apply_mutual(a, b);
    if added {
        state.applied_couples += 1;
    }
    debug!(a, b, added, couples = state.applied_couples, "couple applied");
    Ok(added)
}

/// Lift a mutual exclusion in both directions. Returns false if none was present.
pub fn remove_couple(state: &mut DrawState, a: &str, b: &str) -> Result<bool> {
    ensure_pair(state, a, b)?;
    let removed = state.exclusions.remove_mutual(a, b);
    if removed {
        state.applied_couples = state.applied_couples.saturating_sub(1);
    }
    debug!(a, b, removed, couples = state.applied_couples, "couple removed");
    Ok(removed)
}

fn ensure_pair(state: &DrawState, a: &str, b: &str) -> Result<()> {
    if a == b {
        bail!("'{}' cannot be excluded from themselves", a);
    }
    for name in [a, b] {
        if !state.names.iter().any(|known| known == name) {
            bail!("unknown participant '{}'", name);
        }
    }
    Ok(())
}
