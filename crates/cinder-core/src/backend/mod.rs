//! Backend abstraction
//!
//! Exactly one backend variant is compiled into a build, selected by the
//! `provider` cargo feature: the tracing-based provider, or the
//! dependency-free stderr fallback. A record interacts with its backend only
//! through [`RecordSink`], and each backend owns its own fatal-severity
//! termination semantics inside `finish`.

use std::fmt;

use crate::severity::Severity;

#[cfg(not(feature = "provider"))]
pub(crate) mod fallback;
#[cfg(feature = "provider")]
pub(crate) mod provider;

#[cfg(not(feature = "provider"))]
pub(crate) use fallback::StderrSink as Sink;
#[cfg(feature = "provider")]
pub(crate) use provider::TracingSink as Sink;

/// Capability surface a scoped record needs from its backend.
///
/// A sink is acquired once for an enabled record, appended to while the
/// record is live, and finished exactly once when the record goes out of
/// scope. `finish` is where backend-owned terminal behavior runs, including
/// process termination for fatal records.
pub(crate) trait RecordSink {
    /// Acquire a sink for an enabled record at the given call site.
    fn acquire(file: &'static str, line: u32, severity: Severity) -> Self;

    /// Append one streamed value.
    fn append(&mut self, value: &dyn fmt::Display);

    /// Finalize output. For fatal severity this does not return.
    fn finish(self);
}
