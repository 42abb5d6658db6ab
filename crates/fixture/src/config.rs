//! Fixture settings, read from the environment with a CLI override.

use core::str::FromStr;

use gildedrose_core::{DomainError, DomainResult};

/// Number of days to simulate. The first CLI argument takes precedence.
pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";

/// `text` (default) or `json`.
pub const FORMAT_VAR: &str = "GILDED_ROSE_FORMAT";

const DEFAULT_DAYS: u32 = 2;

/// Upper bound on simulated days; every day is kept in memory.
const MAX_DAYS: u32 = 100_000;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(DomainError::validation(format!(
                "{FORMAT_VAR} must be `text` or `json`, got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub days: u32,
    pub format: OutputFormat,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: OutputFormat::default(),
        }
    }
}

impl FixtureConfig {
    /// Read settings from the process arguments and environment.
    pub fn load() -> DomainResult<Self> {
        Self::from_sources(
            std::env::args().nth(1),
            std::env::var(DAYS_VAR).ok(),
            std::env::var(FORMAT_VAR).ok(),
        )
    }

    pub fn from_sources(
        arg_days: Option<String>,
        env_days: Option<String>,
        env_format: Option<String>,
    ) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = arg_days.or(env_days) {
            config.days = parse_days(&raw)?;
        }
        if let Some(raw) = env_format {
            config.format = raw.parse()?;
        }

        Ok(config)
    }
}

fn parse_days(raw: &str) -> DomainResult<u32> {
    let days: u32 = raw
        .trim()
        .parse()
        .map_err(|e| DomainError::validation(format!("days {raw:?}: {e}")))?;
    if days > MAX_DAYS {
        return Err(DomainError::validation(format!(
            "days must be at most {MAX_DAYS}, got {days}"
        )));
    }
    Ok(days)
}
