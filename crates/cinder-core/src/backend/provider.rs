//! Provider backend
//!
//! Delegates to the `tracing` ecosystem: severity mapping, sink selection
//! (stderr plus an optional rolling file under the configured log
//! directory), and record tagging with the application identity all live
//! here. Fatal-severity termination is owned by this backend's own record
//! release, since `tracing` has no fatal level of its own.

use std::backtrace::Backtrace;
use std::fmt;
use std::fmt::Write as _;
use std::io;
use std::path::Path;
use std::process;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

use crate::backend::RecordSink;
use crate::severity::Severity;

static INSTALL_ONCE: Once = Once::new();

/// Install the global subscriber: a stderr layer, plus a daily-rolling file
/// layer when a log directory is configured. The filter honors an
/// environment override and otherwise pins to the mapped threshold.
///
/// Install is tolerant of an already-set subscriber so that a test-capture
/// subscriber installed first stays authoritative.
pub(crate) fn install(app_name: &str, threshold: Severity, log_dir: Option<&str>) {
    INSTALL_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(map_level(threshold).to_string()));
        let stderr_layer = tracing_fmt::layer().with_writer(io::stderr);
        let file_layer = log_dir.map(|dir| {
            let appender = tracing_appender::rolling::daily(dir, log_file_name(app_name));
            tracing_fmt::layer().with_writer(appender).with_ansi(false)
        });
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .try_init();
    });
}

/// Route panics through the provider as ERROR records, with a captured
/// call stack, before the default unwind continues.
pub(crate) fn install_failure_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let app = crate::init::app_name().unwrap_or_default();
        let trace = Backtrace::force_capture();
        tracing::error!(app = %app, "process failure: {panic_info}\n{trace}");
    }));
}

/// Provider-owned record: accumulates streamed text and emits a single
/// event, tagged with the application identity and call site, on release.
pub(crate) struct TracingSink {
    severity: Severity,
    file: &'static str,
    line: u32,
    message: String,
}

impl RecordSink for TracingSink {
    fn acquire(file: &'static str, line: u32, severity: Severity) -> Self {
        TracingSink {
            severity,
            file,
            line,
            message: String::new(),
        }
    }

    fn append(&mut self, value: &dyn fmt::Display) {
        // Forwards unconditionally; the provider applies its own filtering.
        let _ = write!(self.message, "{value}");
    }

    fn finish(self) {
        let app = crate::init::app_name().unwrap_or_default();
        emit(self.severity, self.file, self.line, &app, &self.message);
        if self.severity == Severity::Fatal {
            process::abort();
        }
    }
}

/// Severity map into the provider's levels. `tracing` has no FATAL level;
/// fatal records emit at ERROR and terminate in [`RecordSink::finish`].
pub(crate) fn map_level(severity: Severity) -> Level {
    match severity {
        Severity::Debug => Level::DEBUG,
        Severity::Info => Level::INFO,
        Severity::Warning => Level::WARN,
        Severity::Error => Level::ERROR,
        Severity::Fatal => Level::ERROR,
    }
}

fn emit(severity: Severity, file: &'static str, line: u32, app: &str, message: &str) {
    match severity {
        Severity::Debug => tracing::debug!(app, file, line, "{}", message),
        Severity::Info => tracing::info!(app, file, line, "{}", message),
        Severity::Warning => tracing::warn!(app, file, line, "{}", message),
        Severity::Error | Severity::Fatal => {
            tracing::error!(app, file, line, "{}", message);
        }
    }
}

/// Log-file base name derived from the application identity; paths are
/// reduced to their final component, an empty identity falls back to
/// `DefaultApp`.
fn log_file_name(app_name: &str) -> String {
    let base = Path::new(app_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("DefaultApp");
    format!("{base}.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_level_is_total() {
        assert_eq!(map_level(Severity::Debug), Level::DEBUG);
        assert_eq!(map_level(Severity::Info), Level::INFO);
        assert_eq!(map_level(Severity::Warning), Level::WARN);
        assert_eq!(map_level(Severity::Error), Level::ERROR);
        assert_eq!(map_level(Severity::Fatal), Level::ERROR);
    }

    #[test]
    fn test_log_file_name_strips_path() {
        assert_eq!(log_file_name("/usr/bin/worker"), "worker.log");
        assert_eq!(log_file_name("worker"), "worker.log");
    }

    #[test]
    fn test_log_file_name_empty_identity() {
        assert_eq!(log_file_name(""), "DefaultApp.log");
    }
}
