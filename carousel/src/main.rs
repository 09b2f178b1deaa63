//! Gift-exchange draw CLI.
//!
//! Keeps the current draw under `.carousel/` (names, exclusions, results) and
//! reveals each draw as its give-cycles.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use carousel::core::DrawError;
use carousel::core::names::{generate_draw_name, parse_names};
use carousel::draw::draw_from_root;
use carousel::exit_codes;
use carousel::import::import_from_root;
use carousel::io::config::{load_config, validate_delay};
use carousel::io::export::{RESULTS_TEXT_FILE, write_export, write_results_text};
use carousel::io::paths::CarouselPaths;
use carousel::io::store::{
    DrawState, InitOptions, init_store, load_state, reset_state, write_state,
};
use carousel::logging;
use carousel::reveal::{RevealPace, reveal};
use carousel::setup::{apply_couple, remove_couple, rename, set_names, toggle_exclusion};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "carousel",
    version,
    about = "Draw names for a gift exchange without repeats or forbidden pairs"
)]
struct Cli {
    /// Project directory holding `.carousel/`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.carousel/` with default config and empty state.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Replace the participant list, or print it when no names are given.
    Names {
        /// Participant names.
        names: Vec<String>,
        /// Read names from a file, one per line.
        #[arg(long, conflicts_with = "names")]
        file: Option<PathBuf>,
    },
    /// Set the draw name, or print it when no name is given.
    Rename {
        name: Option<String>,
        /// Generate a themed name for the current month.
        #[arg(long, conflicts_with = "name")]
        generate: bool,
    },
    /// Toggle a one-way exclusion: GIVER never draws RECIPIENT.
    Exclude { giver: String, recipient: String },
    /// Stop two people from drawing each other.
    Couple {
        a: String,
        b: String,
        /// Lift the mutual exclusion instead.
        #[arg(long)]
        remove: bool,
    },
    /// Print the exclusions summary.
    Exclusions,
    /// Draw names and reveal the result.
    Draw {
        /// Override the configured attempt budget.
        #[arg(long)]
        max_attempts: Option<u32>,
        /// Override the configured seconds between reveals.
        #[arg(long)]
        delay: Option<f64>,
    },
    /// Reveal the stored result again.
    Show {
        /// Override the configured seconds between reveals.
        #[arg(long)]
        delay: Option<f64>,
    },
    /// Write the draw as a JSON record for future imports.
    Export {
        /// Directory for the record (defaults to the project directory).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write `giver → recipient` lines to a text file.
    SaveText {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Start a new draw from an exported record; its pairings become exclusions.
    Import { file: PathBuf },
    /// Clear names, exclusions, and results.
    Reset,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DrawError>() {
        Some(DrawError::UnsatisfiableConstraints { .. }) => exit_codes::UNSATISFIABLE,
        _ => exit_codes::INVALID,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.root.as_path();
    match cli.command {
        Command::Init { force } => cmd_init(root, force),
        Command::Names { names, file } => cmd_names(root, names, file),
        Command::Rename { name, generate } => cmd_rename(root, name, generate),
        Command::Exclude { giver, recipient } => cmd_exclude(root, &giver, &recipient),
        Command::Couple { a, b, remove } => cmd_couple(root, &a, &b, remove),
        Command::Exclusions => cmd_exclusions(root),
        Command::Draw {
            max_attempts,
            delay,
        } => cmd_draw(root, max_attempts, delay),
        Command::Show { delay } => cmd_show(root, delay),
        Command::Export { out } => cmd_export(root, out),
        Command::SaveText { out } => cmd_save_text(root, out),
        Command::Import { file } => cmd_import(root, &file),
        Command::Reset => cmd_reset(root),
    }
}

fn cmd_init(root: &Path, force: bool) -> Result<()> {
    let paths = init_store(root, &InitOptions { force })?;
    println!("initialized {}", paths.carousel_dir.display());
    Ok(())
}

fn cmd_names(root: &Path, names: Vec<String>, file: Option<PathBuf>) -> Result<()> {
    let parsed = match file {
        Some(file) => parse_names(
            &fs::read_to_string(&file).with_context(|| format!("read {}", file.display()))?,
        ),
        None if names.is_empty() => {
            let state = load_state(&CarouselPaths::new(root).state_path)?;
            for name in &state.names {
                println!("{}", name);
            }
            return Ok(());
        }
        None => parse_names(&names.join("\n")),
    };

    let min = load_config(&CarouselPaths::new(root).config_path)?.min_participants;
    let count = parsed.len();
    update_state(root, |state| {
        set_names(state, parsed);
        Ok(())
    })?;
    println!("{} names saved", count);
    if count < min {
        eprintln!("warning: enter at least {} names before drawing", min);
    }
    Ok(())
}

fn cmd_rename(root: &Path, name: Option<String>, generate: bool) -> Result<()> {
    if name.is_none() && !generate {
        let state = load_state(&CarouselPaths::new(root).state_path)?;
        println!("{}", state.draw_name);
        return Ok(());
    }
    let state = update_state(root, |state| match &name {
        Some(name) => rename(state, name),
        None => rename(
            state,
            &generate_draw_name(&mut rand::thread_rng(), today()),
        ),
    })?;
    println!("{}", state.draw_name);
    Ok(())
}

fn cmd_exclude(root: &Path, giver: &str, recipient: &str) -> Result<()> {
    let mut excluded = false;
    update_state(root, |state| {
        excluded = toggle_exclusion(state, giver, recipient)?;
        Ok(())
    })?;
    if excluded {
        println!("{} cannot be matched with {}", giver, recipient);
    } else {
        println!("{} can be matched with {} again", giver, recipient);
    }
    Ok(())
}

fn cmd_couple(root: &Path, a: &str, b: &str, remove: bool) -> Result<()> {
    let mut changed = false;
    update_state(root, |state| {
        changed = if remove {
            remove_couple(state, a, b)?
        } else {
            apply_couple(state, a, b)?
        };
        Ok(())
    })?;
    match (remove, changed) {
        (false, true) => println!("{} and {} will not draw each other", a, b),
        (false, false) => println!("{} and {} were already a couple", a, b),
        (true, true) => println!("{} and {} may draw each other again", a, b),
        (true, false) => println!("{} and {} were not a couple", a, b),
    }
    Ok(())
}

fn cmd_exclusions(root: &Path) -> Result<()> {
    let state = load_state(&CarouselPaths::new(root).state_path)?;
    let couples = state.applied_couples;
    println!(
        "{} {} configured",
        couples,
        if couples == 1 { "couple" } else { "couples" }
    );
    for line in state.exclusions.summary() {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_draw(root: &Path, max_attempts: Option<u32>, delay: Option<f64>) -> Result<()> {
    let delay = reveal_delay(root, delay)?;
    let state = draw_from_root(root, max_attempts, &mut rand::thread_rng(), today())?;
    println!("{}\n", state.draw_name);
    reveal_and_mark(root, state, delay)
}

fn cmd_show(root: &Path, delay: Option<f64>) -> Result<()> {
    let delay = reveal_delay(root, delay)?;
    let state = load_state(&CarouselPaths::new(root).state_path)?;
    if !state.has_results() {
        bail!("no results yet: run `carousel draw` first");
    }
    if !state.draw_name.is_empty() {
        println!("{}\n", state.draw_name);
    }
    reveal_and_mark(root, state, delay)
}

fn cmd_export(root: &Path, out: Option<PathBuf>) -> Result<()> {
    let state = load_state(&CarouselPaths::new(root).state_path)?;
    let dir = out.unwrap_or_else(|| root.to_path_buf());
    let path = write_export(&dir, &state, today())?;
    println!("{}", path.display());
    Ok(())
}

fn cmd_save_text(root: &Path, out: Option<PathBuf>) -> Result<()> {
    let state = load_state(&CarouselPaths::new(root).state_path)?;
    let path = out.unwrap_or_else(|| root.join(RESULTS_TEXT_FILE));
    write_results_text(&path, &state)?;
    println!("{}", path.display());
    Ok(())
}

fn cmd_import(root: &Path, file: &Path) -> Result<()> {
    let state = import_from_root(root, file)?;
    println!(
        "imported {} names; previous matches have been added as exclusions",
        state.names.len()
    );
    Ok(())
}

fn cmd_reset(root: &Path) -> Result<()> {
    reset_state(&CarouselPaths::new(root).state_path)?;
    println!("draw cleared");
    Ok(())
}

/// Load state, apply `edit`, and save. Nothing is written if `edit` fails.
fn update_state<F>(root: &Path, edit: F) -> Result<DrawState>
where
    F: FnOnce(&mut DrawState) -> Result<()>,
{
    let paths = CarouselPaths::new(root);
    let mut state = load_state(&paths.state_path)?;
    edit(&mut state)?;
    write_state(&paths.state_path, &state)?;
    Ok(state)
}

fn reveal_delay(root: &Path, delay: Option<f64>) -> Result<f64> {
    match delay {
        Some(delay) => {
            validate_delay(delay)?;
            Ok(delay)
        }
        None => Ok(load_config(&CarouselPaths::new(root).config_path)?.reveal_delay_secs),
    }
}

/// Reveal results on stdout, then remember them as revealed.
fn reveal_and_mark(root: &Path, mut state: DrawState, delay_secs: f64) -> Result<()> {
    let pace = RevealPace::new(delay_secs, state.already_revealed());
    let mut out = std::io::stdout().lock();
    reveal(&mut out, &state.results, pace, std::thread::sleep)?;
    if !state.already_revealed() {
        state.last_revealed = state.results.clone();
        write_state(&CarouselPaths::new(root).state_path, &state)?;
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
