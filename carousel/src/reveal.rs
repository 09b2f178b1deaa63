//! Paced reveal of results in cycle order for `carousel draw` and `carousel show`.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::core::chains::split_into_chains;
use crate::core::types::Pairing;

/// How to pace a reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPace {
    /// Pause before each pairing after the first.
    pub delay: Duration,
    /// Skip pauses entirely (delay is zero or these results were seen before).
    pub instant: bool,
}

impl RevealPace {
    pub fn new(delay_secs: f64, already_revealed: bool) -> Self {
        let delay = Duration::try_from_secs_f64(delay_secs).unwrap_or(Duration::ZERO);
        Self {
            delay,
            instant: already_revealed || delay.is_zero(),
        }
    }
}

/// Write results cycle by cycle, one `giver → recipient` line per pairing and
/// a blank line between cycles. `pause` is called between lines unless instant.
pub fn reveal<W, P>(out: &mut W, results: &[Pairing], pace: RevealPace, mut pause: P) -> Result<()>
where
    W: Write,
    P: FnMut(Duration),
{
    let mut first = true;
    for (index, chain) in split_into_chains(results).iter().enumerate() {
        if index > 0 {
            writeln!(out).context("write reveal")?;
        }
        for pairing in chain {
            if !first && !pace.instant {
                out.flush().context("flush reveal")?;
                pause(pace.delay);
            }
            first = false;
            writeln!(out, "{}", pairing.line()).context("write reveal")?;
        }
    }
    out.flush().context("flush reveal")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<Pairing> {
        vec![
            Pairing::new("A", "B"),
            Pairing::new("D", "E"),
            Pairing::new("B", "C"),
            Pairing::new("E", "F"),
            Pairing::new("C", "A"),
            Pairing::new("F", "D"),
        ]
    }

    #[test]
    fn writes_cycles_separated_by_blank_line() {
        let mut out = Vec::new();
        reveal(&mut out, &results(), RevealPace::new(0.0, false), |_| {}).expect("reveal");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text, "A → B\nB → C\nC → A\n\nD → E\nE → F\nF → D\n");
    }

    #[test]
    fn pauses_between_pairings_when_paced() {
        let mut out = Vec::new();
        let mut pauses = Vec::new();
        reveal(&mut out, &results(), RevealPace::new(1.5, false), |d| {
            pauses.push(d);
        })
        .expect("reveal");
        assert_eq!(pauses.len(), 5);
        assert!(pauses.iter().all(|d| *d == Duration::from_millis(1500)));
    }

    #[test]
    fn already_revealed_results_show_instantly() {
        let mut out = Vec::new();
        let mut pauses = 0;
        reveal(&mut out, &results(), RevealPace::new(2.0, true), |_| pauses += 1)
            .expect("reveal");
        assert_eq!(pauses, 0);
    }
}
