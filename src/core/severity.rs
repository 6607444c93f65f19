//! Severity level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum severity a [`Logger`](super::Logger) emits.
///
/// The ordinal order is the severity order: `Debug < Info < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Error = 2,
}

impl Severity {
    /// All levels, least severe first.
    pub const ALL: [Severity; 3] = [Severity::Debug, Severity::Info, Severity::Error];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }

    /// Line prefix: the uppercased name padded to width 5, then `": "`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG: ",
            Severity::Info => "INFO : ",
            Severity::Error => "ERROR: ",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "error" => Ok(Severity::Error),
            _ => Err(LoggerError::invalid_severity(s)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(ordinal: u8) -> Result<Self, LoggerError> {
        match ordinal {
            0 => Ok(Severity::Debug),
            1 => Ok(Severity::Info),
            2 => Ok(Severity::Error),
            other => Err(LoggerError::invalid_severity(other.to_string())),
        }
    }
}

impl From<Severity> for u8 {
    fn from(level: Severity) -> Self {
        level as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Severity::Debug.as_str(), "debug");
        assert_eq!(Severity::Info.as_str(), "info");
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Info.to_string(), "info");
    }

    #[test]
    fn test_prefix_is_padded_uppercase_name() {
        for level in Severity::ALL {
            let expected = format!("{:<5}: ", level.as_str().to_uppercase());
            assert_eq!(level.prefix(), expected);
        }
        assert_eq!(Severity::Info.prefix(), "INFO : ");
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Error);
        assert!(Severity::Error >= Severity::Error);
    }

    #[test]
    fn test_parse() {
        assert_eq!("DEBUG".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!(" info ".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("Error".parse::<Severity>().unwrap(), Severity::Error);

        let err = "warn".parse::<Severity>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidSeverity { .. }));
    }

    #[test]
    fn test_ordinal_conversion() {
        assert_eq!(Severity::try_from(0u8).unwrap(), Severity::Debug);
        assert_eq!(Severity::try_from(2u8).unwrap(), Severity::Error);
        assert!(Severity::try_from(3u8).is_err());
        assert_eq!(u8::from(Severity::Info), 1);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Severity::Error).expect("serialize");
        assert_eq!(json, "\"error\"");

        let level: Severity = serde_json::from_str("\"debug\"").expect("deserialize");
        assert_eq!(level, Severity::Debug);
    }
}
