//! Canonical locations under `.carousel/` for a project root.

use std::path::PathBuf;

/// All canonical paths within `.carousel/` for a project root.
#[derive(Debug, Clone)]
pub struct CarouselPaths {
    pub root: PathBuf,
    pub carousel_dir: PathBuf,
    pub config_path: PathBuf,
    pub state_path: PathBuf,
}

impl CarouselPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let carousel_dir = root.join(".carousel");
        Self {
            root: root.clone(),
            carousel_dir: carousel_dir.clone(),
            config_path: carousel_dir.join("config.toml"),
            state_path: carousel_dir.join("state.json"),
        }
    }
}
