//! Import orchestration for `carousel import`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::record::ImportedDraw;
use crate::io::export::read_import;
use crate::io::paths::CarouselPaths;
use crate::io::store::{DrawState, load_state, write_state};

/// Seed `state` for a new draw from a prior one.
///
/// Names are replaced, exclusions become the merged set, and the draw name and
/// results are cleared. The couple counter is left as is.
pub fn apply_import(state: &mut DrawState, imported: ImportedDraw) {
    state.names = imported.names;
    state.exclusions = imported.exclusions;
    state.draw_name.clear();
    state.clear_results();
}

/// Validate `file` fully before touching the stored state under `root`.
pub fn import_from_root(root: &Path, file: &Path) -> Result<DrawState> {
    let imported = read_import(file)?;
    let paths = CarouselPaths::new(root);
    let mut state = load_state(&paths.state_path)?;
    info!(
        names = imported.names.len(),
        prior_results = imported.prior_results,
        "import validated"
    );
    apply_import(&mut state, imported);
    write_state(&paths.state_path, &state).context("save imported draw")?;
    Ok(state)
}
