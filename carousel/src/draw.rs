//! Draw orchestration for `carousel draw`.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

use crate::core::DrawError;
use crate::core::generator::generate;
use crate::core::names::{generate_draw_name, validate_names};
use crate::core::types::Assignment;
use crate::io::config::load_config;
use crate::io::paths::CarouselPaths;
use crate::io::store::{DrawState, load_state, write_state};

/// Per-invocation draw settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOptions {
    pub max_attempts: u32,
    pub min_participants: usize,
}

/// Validate names, generate an assignment, and record it in `state`.
///
/// On failure `state` is left unchanged. A draw name is generated if none is set.
pub fn run_draw<R: Rng + ?Sized>(
    state: &mut DrawState,
    options: &DrawOptions,
    rng: &mut R,
    today: NaiveDate,
) -> Result<Assignment, DrawError> {
    let problems = validate_names(&state.names, options.min_participants);
    if !problems.is_empty() {
        return Err(DrawError::InvalidParticipants { problems });
    }

    let results = generate(&state.names, &state.exclusions, options.max_attempts, rng)?;

    if state.draw_name.trim().is_empty() {
        state.draw_name = generate_draw_name(rng, today);
    }
    state.results = results.clone();
    state.last_revealed.clear();
    info!(
        draw_name = %state.draw_name,
        participants = results.len(),
        "draw recorded"
    );
    Ok(results)
}

/// Load config and state under `root`, draw, and persist the new state.
///
/// `max_attempts` overrides the configured budget when set.
pub fn draw_from_root<R: Rng + ?Sized>(
    root: &Path,
    max_attempts: Option<u32>,
    rng: &mut R,
    today: NaiveDate,
) -> Result<DrawState> {
    let paths = CarouselPaths::new(root);
    let config = load_config(&paths.config_path)?;
    let mut state = load_state(&paths.state_path)?;
    let options = DrawOptions {
        max_attempts: max_attempts.unwrap_or(config.max_attempts),
        min_participants: config.min_participants,
    };
    run_draw(&mut state, &options, rng, today)?;
    write_state(&paths.state_path, &state).context("save draw results")?;
    Ok(state)
}
