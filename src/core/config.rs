//! Logger configuration
//!
//! A [`LoggerConfig`] captures the severity and flags of a logger so they can
//! be loaded from JSON or the environment and applied in one step.

use super::{
    error::{LoggerError, Result},
    flags::Flags,
    severity::Severity,
};
use serde::{Deserialize, Serialize};

/// Environment variable holding the minimum severity (`debug`, `info`, `error`).
pub const SEVERITY_ENV: &str = "LOG_SEVERITY";

/// Environment variable holding a `|` separated flag list (`date|time|shortfile`).
pub const FLAGS_ENV: &str = "LOG_FLAGS";

/// # Examples
///
/// ```
/// use severity_logger::{Flags, LoggerConfig, Severity};
///
/// let config = LoggerConfig::from_json(r#"{"severity":"debug","flags":"date|time"}"#).unwrap();
/// assert_eq!(config.severity, Severity::Debug);
/// assert_eq!(config.flags, Flags::STD);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub severity: Severity,
    pub flags: Flags,
}

impl LoggerConfig {
    #[must_use]
    pub fn new(severity: Severity, flags: Flags) -> Self {
        Self { severity, flags }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read [`SEVERITY_ENV`] and [`FLAGS_ENV`] from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from a variable lookup, starting from the
    /// defaults. Unset variables keep the default; invalid ones are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SEVERITY_ENV) {
            config.severity = value
                .parse()
                .map_err(|e: LoggerError| LoggerError::config(SEVERITY_ENV, e.to_string()))?;
        }
        if let Some(value) = lookup(FLAGS_ENV) {
            config.flags = value
                .parse()
                .map_err(|e: LoggerError| LoggerError::config(FLAGS_ENV, e.to_string()))?;
        }

        Ok(config)
    }
}
