// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Severity of operational log lines and the configured forwarding threshold.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::error;

/// Log level, ordered from least to most verbose.
///
/// Used both as the severity of a single record and as the configured
/// threshold: a record is forwarded when `record.level <= threshold`.
/// The default threshold is `Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl LogLevel {
    /// Whether a record of severity `level` passes this threshold.
    #[must_use]
    pub fn enables(self, level: LogLevel) -> bool {
        level <= self
    }

    /// Directive usable in a `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub fn as_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Invalid log level: '{s}'. Valid levels are: error, warn, info, debug, trace",
            )),
        }
    }
}

/// Lenient: an unknown or non-string value logs an error and falls back to
/// the default level instead of failing the whole config file.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        if let Value::String(s) = value {
            match LogLevel::from_str(&s) {
                Ok(level) => Ok(level),
                Err(e) => {
                    error!("{}", e);
                    Ok(LogLevel::default())
                }
            }
        } else {
            error!("Expected a string for log level, got {:?}", value);
            Ok(LogLevel::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_enables() {
        assert!(LogLevel::Error.enables(LogLevel::Error));
        assert!(!LogLevel::Error.enables(LogLevel::Debug));
        assert!(LogLevel::Debug.enables(LogLevel::Error));
        assert!(LogLevel::Debug.enables(LogLevel::Debug));
        assert!(!LogLevel::Debug.enables(LogLevel::Trace));
    }

    #[test]
    fn test_deserialize_lenient() {
        let level: LogLevel = serde_json::from_value(json!("DEBUG")).unwrap();
        assert_eq!(level, LogLevel::Debug);

        let level: LogLevel = serde_json::from_value(json!("chatty")).unwrap();
        assert_eq!(level, LogLevel::Error);

        let level: LogLevel = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(level, LogLevel::Error);
    }

    #[test]
    fn test_as_ref() {
        assert_eq!(LogLevel::Warn.as_ref(), "WARN");
        assert_eq!(LogLevel::Trace.as_filter_directive(), "trace");
    }
}
