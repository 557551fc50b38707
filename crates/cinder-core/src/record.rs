//! Scoped log record
//!
//! One [`LogRecord`] is bound to one logging statement. It decides once, at
//! construction, whether it is enabled against the process-wide threshold;
//! an enabled record exclusively owns a backend sink for its (short)
//! lifetime and releases it exactly once when the record goes out of scope.
//! Records are never shared, stored, or reused across statements.

use std::fmt;

use crate::backend::{RecordSink, Sink};
use crate::init;
use crate::severity::Severity;

/// The per-call-site object behind every logging statement.
///
/// Callers are expected to check [`is_enabled`](LogRecord::is_enabled)
/// before appending; appending to a disabled record is a silent no-op.
/// Finalization happens on drop; for `Fatal` severity the drop does not
/// return, the active backend terminates the process.
pub struct LogRecord {
    severity: Severity,
    sink: Option<Sink>,
}

impl LogRecord {
    /// Construct a record for the given call site and severity.
    ///
    /// A sink is acquired only when the record is enabled; a disabled
    /// record performs no backend work at all.
    pub fn new(file: &'static str, line: u32, severity: Severity) -> Self {
        let sink = init::is_enabled(severity).then(|| Sink::acquire(file, line, severity));
        LogRecord { severity, sink }
    }

    /// Whether this record passed the threshold check at construction.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// The severity this record was constructed with.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Append one streamed value to the record.
    pub fn append(&mut self, value: impl fmt::Display) -> &mut Self {
        if let Some(sink) = self.sink.as_mut() {
            sink.append(&value);
        }
        self
    }
}

impl Drop for LogRecord {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.finish();
        }
    }
}
