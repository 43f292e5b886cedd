//! CLI configuration (env-driven).

use anyhow::{Context, Result};
use typeid::Prefix;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Prefix used when a command is not given one.
    pub default_prefix: Prefix,

    /// Output format when `--format` is not passed.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            default_prefix: Prefix::EMPTY,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = lookup("TYPEID_LOG_LEVEL").unwrap_or(defaults.log_level);

        let default_prefix = lookup("TYPEID_PREFIX")
            .map(Prefix::new)
            .transpose()
            .context("TYPEID_PREFIX must be a valid prefix.")?
            .unwrap_or(defaults.default_prefix);

        let format = lookup("TYPEID_FORMAT")
            .map(|v| v.parse::<OutputFormat>())
            .transpose()
            .context("TYPEID_FORMAT must be 'table' or 'json'.")?
            .unwrap_or(defaults.format);

        Ok(Self {
            log_level,
            default_prefix,
            format,
        })
    }
}
