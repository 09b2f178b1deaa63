//! Test-only helpers: fixture builders and a temp project with `.carousel/`.

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::exclusions::ExclusionMap;
use crate::io::paths::CarouselPaths;
use crate::io::store::{DrawState, InitOptions, init_store, load_state, write_state};

/// Owned participant list from string literals.
pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

/// Exclusion map from `(giver, [excluded...])` entries.
pub fn exclusions(entries: &[(&str, &[&str])]) -> ExclusionMap {
    entries
        .iter()
        .map(|(giver, excluded)| (*giver, excluded.iter().copied()))
        .collect()
}

/// Temporary project directory with an initialized `.carousel/`.
pub struct TestProject {
    _temp: TempDir,
    pub paths: CarouselPaths,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir()?;
        let paths = init_store(temp.path(), &InitOptions { force: false })?;
        Ok(Self { _temp: temp, paths })
    }

    /// Project root (parent of `.carousel/`).
    pub fn path(&self) -> &Path {
        &self.paths.root
    }

    pub fn write_state(&self, state: &DrawState) -> Result<()> {
        write_state(&self.paths.state_path, state)
    }

    pub fn load_state(&self) -> Result<DrawState> {
        load_state(&self.paths.state_path)
    }

    /// Write a state holding only `names`.
    pub fn with_names(&self, list: &[&str]) -> Result<()> {
        self.write_state(&DrawState {
            names: names(list),
            ..DrawState::default()
        })
    }
}
