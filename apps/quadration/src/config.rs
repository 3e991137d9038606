//! # Configuration
//!
//! Layered, last wins:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config <path>`, or `quadration.toml` if present)
//! 3. Environment (`QUADRATION_TARGET_DATE`, `QUADRATION_TARGET_DAY`)
//! 4. CLI flags (applied by the commands)
//!
//! ```toml
//! [reading]
//! default_target_date = "2026-03-15"
//! target_day = 15
//!
//! [batch]
//! max_file_bytes = 10485760
//! max_records = 10000
//! ```

use chrono::NaiveDate;
use quadration_core::SpreadError;
use quadration_core::calendar::{default_target_date, parse_date};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "quadration.toml";

/// Environment override for the default target date.
pub const ENV_TARGET_DATE: &str = "QUADRATION_TARGET_DATE";

/// Environment override for the day used with month-only targets.
pub const ENV_TARGET_DAY: &str = "QUADRATION_TARGET_DAY";

// =============================================================================
// CONFIG SECTIONS
// =============================================================================

/// Target-date resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadingConfig {
    /// Target used when a request names none. `None` uses the engine default.
    pub default_target_date: Option<NaiveDate>,
    /// Day of month for `YYYY-MM` targets.
    pub target_day: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            default_target_date: None,
            target_day: 15,
        }
    }
}

/// Batch input limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub max_file_bytes: u64,
    pub max_records: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024,
            max_records: 10_000,
        }
    }
}

/// Effective application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub reading: ReadingConfig,
    pub batch: BatchConfig,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, SpreadError> {
        toml::from_str(text).map_err(|e| SpreadError::ConfigError(e.to_string()))
    }

    /// Load defaults, then the config file, then the process environment.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, SpreadError> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, SpreadError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SpreadError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Apply environment overrides through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, SpreadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_TARGET_DATE) {
            self.reading.default_target_date = Some(parse_date(&value)?);
        }
        if let Some(value) = lookup(ENV_TARGET_DAY) {
            self.reading.target_day = value.trim().parse().map_err(|_| {
                SpreadError::ConfigError(format!("{}={:?} is not a day", ENV_TARGET_DAY, value))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject values no target date could be built from.
    pub fn validate(&self) -> Result<(), SpreadError> {
        if !(1..=28).contains(&self.reading.target_day) {
            return Err(SpreadError::ConfigError(format!(
                "reading.target_day must be 1-28, got {}",
                self.reading.target_day
            )));
        }
        if self.batch.max_records == 0 {
            return Err(SpreadError::ConfigError(
                "batch.max_records must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve a request's target.
    ///
    /// Accepts `YYYY-MM-DD`, or `YYYY-MM` (day taken from `target_day`).
    /// `None` falls back to the configured, then the built-in, default.
    pub fn resolve_target(&self, target: Option<&str>) -> Result<NaiveDate, SpreadError> {
        let Some(text) = target.map(str::trim).filter(|t| !t.is_empty()) else {
            return match self.reading.default_target_date {
                Some(date) => Ok(date),
                None => default_target_date(),
            };
        };

        if text.len() == 7 {
            return parse_date(&format!("{}-{:02}", text, self.reading.target_day));
        }
        parse_date(text)
    }
}

// =============================================================================
// TESTS
// =============================================================================
