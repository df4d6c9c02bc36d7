//! Configuration for the interactive binary
//!
//! Read from environment variables, with defaults for everything:
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `SHOPPING_LIST_FORMAT` | `html`, `text`, `json` | `html` |
//! | `SHOPPING_LIST_SEED` | `true`, `false` (also `1`/`0`, `yes`/`no`) | `true` |
//! | `RUST_LOG` | any `tracing_subscriber::EnvFilter` directive | see [`DEFAULT_LOG_FILTER`] |
//!
//! # Example
//!
//! ```
//! use shopping_list::config::AppConfig;
//! use shopping_list::render::RenderFormat;
//!
//! let config = AppConfig::from_lookup(|key| match key {
//!     "SHOPPING_LIST_FORMAT" => Some("text".to_string()),
//!     _ => None,
//! })?;
//! assert_eq!(config.format, RenderFormat::Text);
//! assert!(config.seed_sample);
//! # Ok::<(), shopping_list::config::ConfigError>(())
//! ```

use crate::render::{RenderFormat, UnknownFormat};
use thiserror::Error;

/// Environment variable selecting the render format
pub const FORMAT_VAR: &str = "SHOPPING_LIST_FORMAT";

/// Environment variable controlling whether the starter items are loaded
pub const SEED_VAR: &str = "SHOPPING_LIST_SEED";

/// Environment variable holding the log filter
pub const LOG_VAR: &str = "RUST_LOG";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "shopping_list=info,shopping_list_runtime=info";

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `SHOPPING_LIST_FORMAT` names no known view
    #[error("SHOPPING_LIST_FORMAT: {0}")]
    Format(#[from] UnknownFormat),

    /// A boolean variable holds something else
    #[error("{var}: expected true or false, got {value:?}")]
    NotABool {
        /// Variable name
        var: &'static str,
        /// Value found
        value: String,
    },
}

/// Settings for one run of the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How the list is rendered on stdout
    pub format: RenderFormat,
    /// Start from the starter items instead of an empty list
    pub seed_sample: bool,
    /// `tracing` filter directives
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: RenderFormat::default(),
            seed_sample: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to read variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = format.parse()?;
        }
        if let Some(seed) = lookup(SEED_VAR) {
            config.seed_sample = parse_bool(SEED_VAR, &seed)?;
        }
        if let Some(filter) = lookup(LOG_VAR).filter(|filter| !filter.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::NotABool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(load(&[]), Ok(AppConfig::default()));
        let config = AppConfig::default();
        assert_eq!(config.format, RenderFormat::Html);
        assert!(config.seed_sample);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn reads_all_variables() {
        let config = load(&[
            (FORMAT_VAR, "json"),
            (SEED_VAR, "no"),
            (LOG_VAR, "shopping_list=debug"),
        ])
        .unwrap();
        assert_eq!(config.format, RenderFormat::Json);
        assert!(!config.seed_sample);
        assert_eq!(config.log_filter, "shopping_list=debug");
    }

    #[test]
    fn blank_log_filter_keeps_default() {
        let config = load(&[(LOG_VAR, "  ")]).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert_eq!(
            load(&[(FORMAT_VAR, "pdf")]),
            Err(ConfigError::Format(UnknownFormat("pdf".to_string())))
        );
        assert_eq!(
            load(&[(SEED_VAR, "maybe")]),
            Err(ConfigError::NotABool {
                var: SEED_VAR,
                value: "maybe".to_string(),
            })
        );
    }
}
