//! Carousel configuration stored under `.carousel/config.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::atomic::write_atomic;
use crate::core::generator::DEFAULT_MAX_ATTEMPTS;
use crate::core::names::DEFAULT_MIN_PARTICIPANTS;

/// Carousel configuration (TOML).
///
/// Meant to be edited by hand. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    /// Generator attempt budget before giving up.
    pub max_attempts: u32,

    /// Fewest names accepted before a draw is attempted.
    pub min_participants: usize,

    /// Pause between revealed pairings, in seconds. `0` reveals instantly.
    pub reveal_delay_secs: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_participants: DEFAULT_MIN_PARTICIPANTS,
            reveal_delay_secs: 2.0,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(anyhow!("max_attempts must be > 0"));
        }
        if self.min_participants < 2 {
            return Err(anyhow!("min_participants must be >= 2"));
        }
        validate_delay(self.reveal_delay_secs)
    }
}

/// Reveal delays must be finite and non-negative.
pub fn validate_delay(secs: f64) -> Result<()> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(anyhow!("reveal_delay_secs must be a non-negative number"));
    }
    Ok(())
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CarouselConfig::default()`.
pub fn load_config(path: &Path) -> Result<CarouselConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = CarouselConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CarouselConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CarouselConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, CarouselConfig::default());
        assert_eq!(cfg.max_attempts, 1000);
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        let cfg = CarouselConfig {
            max_attempts: 250,
            min_participants: 4,
            reveal_delay_secs: 0.5,
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "reveal_delay_secs = 0.0\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.reveal_delay_secs, 0.0);
        assert_eq!(cfg.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn rejects_zero_attempts_and_negative_delay() {
        let cfg = CarouselConfig {
            max_attempts: 0,
            ..CarouselConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = CarouselConfig {
            reveal_delay_secs: -1.0,
            ..CarouselConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
