//! Severity model
//!
//! An ordered set of log levels with a total order
//! `Debug < Info < Warning < Error < Fatal`. The ordering is what record
//! enablement is defined in terms of: a record is enabled iff its severity
//! is at least the process-wide threshold (see [`crate::init::is_enabled`]).

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Ordered log-level classification.
///
/// Variant order is the severity order; comparisons use the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Short string representation suitable for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Severity for failures that are fatal only while debugging:
    /// `Fatal` in debug builds, `Warning` in release builds.
    pub fn dfatal() -> Self {
        if cfg!(debug_assertions) {
            Severity::Fatal
        } else {
            Severity::Warning
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    /// Parse a severity name, case-insensitively. `warn` is accepted as an
    /// alias for `warning`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("debug") {
            Ok(Severity::Debug)
        } else if value.eq_ignore_ascii_case("info") {
            Ok(Severity::Info)
        } else if value.eq_ignore_ascii_case("warning") || value.eq_ignore_ascii_case("warn") {
            Ok(Severity::Warning)
        } else if value.eq_ignore_ascii_case("error") {
            Ok(Severity::Error)
        } else if value.eq_ignore_ascii_case("fatal") {
            Ok(Severity::Fatal)
        } else {
            Err(ConfigError::UnknownSeverity {
                value: value.to_string(),
            })
        }
    }
}
