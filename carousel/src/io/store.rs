//! Persisted draw state (`.carousel/state.json`) and `.carousel/` scaffolding.
//!
//! The store is owned by the commands: they load a snapshot, hand it to the
//! core, and write the result back. Core functions never touch it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::atomic::write_json_atomic;
use super::config::{CarouselConfig, write_config};
use super::paths::CarouselPaths;
use crate::core::exclusions::ExclusionMap;
use crate::core::types::Pairing;

/// Everything a draw carries between commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DrawState {
    /// Display name of the draw; empty until set or generated.
    pub draw_name: String,
    /// Participants in draw order.
    pub names: Vec<String>,
    pub exclusions: ExclusionMap,
    /// Latest assignment in giver order; empty before the first draw.
    pub results: Vec<Pairing>,
    /// Mutual-exclusion pairs applied so far.
    pub applied_couples: u32,
    /// Results whose reveal already ran to completion.
    pub last_revealed: Vec<Pairing>,
}

impl DrawState {
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// True if the current results were already revealed in full.
    pub fn already_revealed(&self) -> bool {
        self.has_results() && self.last_revealed == self.results
    }

    /// Drop results tied to the previous participant/exclusion setup.
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.last_revealed.clear();
    }
}

/// Options for [`init_store`].
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing config and state.
    pub force: bool,
}

/// Create `.carousel/` with default config and empty state.
///
/// Fails if `.carousel/` already exists unless `options.force` is set.
pub fn init_store(root: &Path, options: &InitOptions) -> Result<CarouselPaths> {
    let paths = CarouselPaths::new(root);
    if paths.carousel_dir.exists() && !options.force {
        return Err(anyhow!(
            "carousel init: .carousel already exists (use --force to overwrite)"
        ));
    }
    if paths.carousel_dir.exists() && !paths.carousel_dir.is_dir() {
        return Err(anyhow!(
            "carousel init: .carousel exists but is not a directory"
        ));
    }
    fs::create_dir_all(&paths.carousel_dir)
        .with_context(|| format!("create directory {}", paths.carousel_dir.display()))?;
    write_config(&paths.config_path, &CarouselConfig::default())?;
    write_state(&paths.state_path, &DrawState::default())?;
    Ok(paths)
}

/// Load draw state from disk. A missing file yields the empty state.
pub fn load_state(path: &Path) -> Result<DrawState> {
    if !path.exists() {
        debug!(path = %path.display(), "state missing, starting empty");
        return Ok(DrawState::default());
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("read state {}", path.display()))?;
    let state: DrawState = serde_json::from_str(&contents)
        .with_context(|| format!("parse state {}", path.display()))?;
    debug!(
        names = state.names.len(),
        exclusions = state.exclusions.entry_count(),
        results = state.results.len(),
        "state loaded"
    );
    Ok(state)
}

/// Atomically write draw state to disk.
pub fn write_state(path: &Path, state: &DrawState) -> Result<()> {
    debug!(path = %path.display(), names = state.names.len(), "writing state");
    write_json_atomic(path, state)
}

/// Restore the empty state, leaving config untouched.
pub fn reset_state(path: &Path) -> Result<()> {
    write_state(path, &DrawState::default())
}
