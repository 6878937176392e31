use std::env;
use std::str::FromStr;

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::error::AppError;

/// Output format for the tracing fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(AppError::config(format!(
                "SEVENS_LOG_FORMAT must be 'json' or 'pretty', got '{other}'"
            ))),
        }
    }
}

pub const DEFAULT_TABLE_SIZE: usize = 4;

/// Runtime knobs for the game flow service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFlowConfig {
    /// Fixed RNG seed; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
    /// Exact roster size required to start a game; `None` allows any legal size.
    pub table_size: Option<usize>,
    pub log_format: LogFormat,
}

impl Default for GameFlowConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            table_size: Some(DEFAULT_TABLE_SIZE),
            log_format: LogFormat::default(),
        }
    }
}

impl GameFlowConfig {
    /// Read `SEVENS_RNG_SEED`, `SEVENS_TABLE_SIZE` and `SEVENS_LOG_FORMAT`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("SEVENS_RNG_SEED") {
            let seed = raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "SEVENS_RNG_SEED must be an unsigned integer, got '{raw}'"
                ))
            })?;
            config.rng_seed = Some(seed);
        }

        if let Some(raw) = lookup("SEVENS_TABLE_SIZE") {
            config.table_size = table_size(&raw)?;
        }

        if let Some(raw) = lookup("SEVENS_LOG_FORMAT") {
            config.log_format = raw.parse()?;
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_table_size(mut self, table_size: Option<usize>) -> Self {
        self.table_size = table_size;
        self
    }
}

fn table_size(raw: &str) -> Result<Option<usize>, AppError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("any") {
        return Ok(None);
    }
    match raw.parse::<usize>() {
        Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => Ok(Some(n)),
        _ => Err(AppError::config(format!(
            "SEVENS_TABLE_SIZE must be 'any' or {MIN_PLAYERS}..={MAX_PLAYERS}, got '{raw}'"
        ))),
    }
}
