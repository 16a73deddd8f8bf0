//! Search configuration, optionally loaded from TOML.
//!
//! The file layout is a single `[search]` table:
//!
//! ```toml
//! [search]
//! max_expansions = 200000
//! tie_break = "fifo"
//! ```
//!
//! Every field has a default, so an empty `[search]` table (or no file at all)
//! gives the plain unbounded A* behavior.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::frontier::TieBreak;

/// Limits and policies applied to a single search run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Stop after this many expansions. `None` searches until the frontier empties.
    #[serde(default)]
    pub max_expansions: Option<u64>,

    /// Ordering among frontier entries with equal evaluation.
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl SearchConfig {
    /// Rejects values that would make every search end immediately.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_expansions == Some(0) {
            return Err(ConfigError::Invalid(
                "max_expansions must be positive when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_expansions: None,
            tie_break: TieBreak::Fifo,
        }
    }
}

/// Top-level structure of a config file.
#[derive(Debug, Default, Deserialize)]
pub struct SearchToml {
    #[serde(default)]
    pub search: SearchConfig,
}

/// Parses and validates a config from TOML text.
pub fn parse_config(contents: &str) -> Result<SearchConfig, ConfigError> {
    let parsed: SearchToml = toml::from_str(contents)?;
    parsed.search.validate()?;
    Ok(parsed.search)
}

/// Reads, parses and validates a config file.
pub fn load_config(path: &Path) -> Result<SearchConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    tracing::info!(path = %path.display(), ?config, "Loaded search config");
    Ok(config)
}
