//! Participant list parsing/validation and draw-name generation.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

/// Fewest participants for which a draw is attempted.
pub const DEFAULT_MIN_PARTICIPANTS: usize = 3;

const ADJECTIVES: &[&str] = &[
    "Magnificent",
    "Mystical",
    "Whimsical",
    "Spectacular",
    "Enchanted",
    "Grand",
    "Curious",
    "Marvelous",
    "Wondrous",
    "Dazzling",
    "Splendid",
    "Fantastic",
    "Amazing",
    "Glorious",
    "Incredible",
    "Extraordinary",
    "Remarkable",
    "Astonishing",
];

const NOUNS: &[&str] = &[
    "Carousel",
    "Circus",
    "Spectacle",
    "Pageant",
    "Gala",
    "Festival",
    "Extravaganza",
    "Performance",
    "Show",
    "Display",
    "Exhibition",
    "Parade",
    "Jamboree",
    "Revelry",
    "Celebration",
    "Fiesta",
];

/// Split free text into names: one per line, trimmed, blank lines dropped.
pub fn parse_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check a participant list before drawing.
///
/// Returns every problem found; an empty list means the names are usable.
pub fn validate_names(names: &[String], min_participants: usize) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for (index, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            problems.push(format!("name #{} is empty", index + 1));
        } else if !seen.insert(name.as_str()) {
            problems.push(format!("duplicate name '{}'", name));
        }
    }

    if names.len() < min_participants {
        problems.push(format!(
            "enter at least {} names (have {})",
            min_participants,
            names.len()
        ));
    }

    problems
}

/// Random themed draw name such as `Grand Gala October 2026`.
pub fn generate_draw_name<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Grand");
    let noun = NOUNS.choose(rng).copied().unwrap_or("Carousel");
    format!(
        "{} {} {} {}",
        adjective,
        noun,
        month_name(today.month()),
        today.year()
    )
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
