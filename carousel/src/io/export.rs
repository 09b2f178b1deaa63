//! Export record and results-text files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info};

use super::atomic::{write_atomic, write_json_atomic};
use super::store::DrawState;
use crate::core::record::{ExportRecord, ImportedDraw, export_file_name, parse_import};
use crate::core::types::results_text;

/// Default file name for `save-text`.
pub const RESULTS_TEXT_FILE: &str = "name-draw-results.txt";

/// Build the archival record for the current state.
pub fn export_record(state: &DrawState, today: NaiveDate) -> ExportRecord {
    ExportRecord {
        draw_name: state.draw_name.clone(),
        names: state.names.clone(),
        exclusions: state.exclusions.clone(),
        results: state.results.clone(),
        export_date: today.format("%Y-%m-%d").to_string(),
    }
}

/// Write the export record into `dir`, returning the file path.
pub fn write_export(dir: &Path, state: &DrawState, today: NaiveDate) -> Result<PathBuf> {
    if !state.has_results() {
        bail!("nothing to export: run `carousel draw` first");
    }
    let record = export_record(state, today);
    let path = dir.join(export_file_name(&record.draw_name, &record.export_date));
    write_json_atomic(&path, &record).with_context(|| format!("export {}", path.display()))?;
    info!(path = %path.display(), results = record.results.len(), "draw exported");
    Ok(path)
}

/// Write `giver → recipient` lines to `path`.
pub fn write_results_text(path: &Path, state: &DrawState) -> Result<()> {
    if !state.has_results() {
        bail!("nothing to save: run `carousel draw` first");
    }
    write_atomic(path, &results_text(&state.results))
        .with_context(|| format!("save results {}", path.display()))
}

/// Read and validate an export record file.
///
/// Validation failures surface as [`crate::core::DrawError::InvalidImportFormat`].
pub fn read_import(path: &Path) -> Result<ImportedDraw> {
    debug!(path = %path.display(), "reading import");
    let raw =
        fs::read_to_string(path).with_context(|| format!("read import {}", path.display()))?;
    let imported = parse_import(&raw).with_context(|| format!("import {}", path.display()))?;
    Ok(imported)
}
