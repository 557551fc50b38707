//! Process-wide logging state
//!
//! Provides the single initialization point for the logging front end. The
//! whole configuration lives in one [`LogConfig`] value: written by
//! [`start`], cleared by [`shutdown`], read by every record construction.
//! Concurrent calls to `start` are not supported; callers serialize
//! initialization (single-writer-at-startup, read-only afterwards).

use std::env;
use std::sync::RwLock;

use crate::severity::Severity;

/// Threshold applied when [`start`] was never called.
const DEFAULT_THRESHOLD: Severity = Severity::Info;

/// Process-wide logging configuration, set once at startup.
#[derive(Debug, Clone)]
pub struct LogConfig {
    app_name: String,
    threshold: Severity,
    log_dir: Option<String>,
    working_dir: Option<String>,
}

static CONFIG: RwLock<Option<LogConfig>> = RwLock::new(None);

/// Initialize the logging front end.
///
/// Sets the process-wide severity threshold and application identity, and
/// captures the current working directory for diagnostics. A non-empty
/// `log_dir` is normalized to end with a path separator and handed to the
/// active backend; the provider backend uses it as its log-file destination,
/// the fallback backend ignores it.
///
/// Intended to be called exactly once at process start, paired with a single
/// [`shutdown`]. Records constructed before `start` see the default
/// threshold (`Info`) and an empty application identity.
pub fn start(app_name: impl Into<String>, severity_threshold: Severity, log_dir: &str) {
    let app_name = app_name.into();
    let log_dir = if log_dir.is_empty() {
        None
    } else {
        Some(normalize_log_dir(log_dir))
    };
    let working_dir = env::current_dir()
        .ok()
        .map(|path| path.display().to_string());

    #[cfg(feature = "provider")]
    crate::backend::provider::install(&app_name, severity_threshold, log_dir.as_deref());

    if let Ok(mut config) = CONFIG.write() {
        *config = Some(LogConfig {
            app_name,
            threshold: severity_threshold,
            log_dir,
            working_dir,
        });
    }
}

/// Tear down the logging front end.
///
/// Clears the process-wide configuration. Backend-level resource release is
/// meaningful only for the provider backend, whose global subscriber is
/// process-final and whose file sink flushes per write; the fallback backend
/// holds no resources. Must be called at most once per [`start`].
pub fn shutdown() {
    if let Ok(mut config) = CONFIG.write() {
        *config = None;
    }
}

/// Install a process-level failure handler that produces a diagnostic dump
/// on unexpected termination.
///
/// Under the provider backend this routes the panic message and a captured
/// call stack through the provider as an ERROR record. No-op under the
/// fallback backend.
pub fn install_failure_handler() {
    #[cfg(feature = "provider")]
    crate::backend::provider::install_failure_hook();
}

/// Whether a record at `severity` passes the process-wide threshold.
pub fn is_enabled(severity: Severity) -> bool {
    severity >= threshold()
}

/// The active severity threshold (`Info` when [`start`] was never called).
pub fn threshold() -> Severity {
    read_config(|config| config.threshold).unwrap_or(DEFAULT_THRESHOLD)
}

/// The application identity set at startup, if any.
pub fn app_name() -> Option<String> {
    read_config(|config| config.app_name.clone())
}

/// The normalized log directory handed to the backend, if one was set.
pub fn log_dir() -> Option<String> {
    read_config(|config| config.log_dir.clone()).flatten()
}

/// The working directory captured at startup, for diagnostics only.
pub fn working_dir() -> Option<String> {
    read_config(|config| config.working_dir.clone()).flatten()
}

fn read_config<T>(f: impl FnOnce(&LogConfig) -> T) -> Option<T> {
    CONFIG.read().ok().and_then(|config| config.as_ref().map(f))
}

/// Normalize a directory path to end with a path separator.
fn normalize_log_dir(dir: &str) -> String {
    if dir.ends_with('/') || dir.ends_with(std::path::MAIN_SEPARATOR) {
        dir.to_string()
    } else {
        format!("{dir}{}", std::path::MAIN_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_log_dir_appends_separator() {
        let normalized = normalize_log_dir("logs");
        assert!(normalized.ends_with(std::path::MAIN_SEPARATOR));
        assert!(normalized.starts_with("logs"));
    }

    #[test]
    fn test_normalize_log_dir_keeps_existing_separator() {
        assert_eq!(normalize_log_dir("logs/"), "logs/");
    }
}
