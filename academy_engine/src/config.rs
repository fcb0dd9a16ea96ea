//! Runtime settings, read from the environment.

use std::time::Duration;

use crate::EngineError;

pub const SEED_VAR: &str = "AWS_ADVENTURE_SEED";
pub const PACING_VAR: &str = "AWS_ADVENTURE_PACING_MS";
pub const NO_CLEAR_VAR: &str = "AWS_ADVENTURE_NO_CLEAR";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Presentation and randomness settings. None of these affect game rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the random-event source. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Pause after the welcome message and after each exam answer.
    pub pacing: Duration,
    pub color: bool,
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pacing: Duration::from_millis(1000),
            color: true,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// No pauses, no styling, no screen clearing.
    pub fn quiet() -> Self {
        Self {
            seed: None,
            pacing: Duration::ZERO,
            color: false,
            clear_screen: false,
        }
    }

    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = Some(parse_number(SEED_VAR, &raw)?);
        }
        if let Some(raw) = lookup(PACING_VAR) {
            config.pacing = Duration::from_millis(parse_number(PACING_VAR, &raw)?);
        }
        if lookup(NO_COLOR_VAR).is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        if lookup(NO_CLEAR_VAR).is_some() {
            config.clear_screen = false;
        }

        Ok(config)
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64, EngineError> {
    raw.trim().parse().map_err(|err: std::num::ParseIntError| EngineError::Config {
        key: key.to_string(),
        value: raw.to_string(),
        reason: err.to_string(),
    })
}
