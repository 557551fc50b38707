//! Configuration error taxonomy
//!
//! The logging front end has exactly one recoverable error surface: textual
//! configuration. Every interior severity mapping is a total `match` and
//! cannot fail; an unsupported severity can only enter the process as text,
//! and it is reported here. Callers that sit at a configuration boundary are
//! expected to escalate these to a FATAL record rather than continue with a
//! misconfigured logger.

use thiserror::Error;

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while interpreting logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A severity name that does not map to any supported level.
    #[error("unsupported severity level: {value:?}")]
    UnknownSeverity { value: String },
}

impl ConfigError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::UnknownSeverity { .. } => "ERR_UNKNOWN_SEVERITY",
        }
    }
}
