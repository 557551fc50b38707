//! Fallback backend
//!
//! The dependency-free logging path: writes straight to the process's
//! standard error stream. Enabled non-debug records are prefixed with their
//! call site as `file:line: `. Writes are not locked across statements, so
//! concurrent appends from different threads may interleave at the byte
//! level; that is an accepted limitation of this backend, not an
//! atomic-line contract.

use std::backtrace::Backtrace;
use std::fmt;
use std::io::{self, Write};
use std::process;

use crate::backend::RecordSink;
use crate::severity::Severity;

/// Sink for one enabled record, bound to the stderr stream.
pub(crate) struct StderrSink {
    severity: Severity,
    /// Set by the first non-debug append; decides the trailing newline.
    has_logged: bool,
}

impl RecordSink for StderrSink {
    fn acquire(file: &'static str, line: u32, severity: Severity) -> Self {
        // Known quirk, kept on purpose: a DEBUG record passes the threshold
        // check and reports enabled, but this backend never prints for it.
        // No prefix here, and `append` discards its content below.
        if severity != Severity::Debug {
            let mut stderr = io::stderr().lock();
            let _ = write!(stderr, "{file}:{line}: ");
        }
        StderrSink {
            severity,
            has_logged: false,
        }
    }

    fn append(&mut self, value: &dyn fmt::Display) {
        if self.severity == Severity::Debug {
            return;
        }
        self.has_logged = true;
        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "{value}");
    }

    fn finish(self) {
        if self.has_logged {
            let mut stderr = io::stderr().lock();
            let _ = stderr.write_all(b"\n");
        }
        if self.severity == Severity::Fatal {
            dump_stack();
            // Unconditional: fatal records end the process whether or not
            // anything was logged. No unwinding, no further user code.
            process::abort();
        }
    }
}

/// Best-effort call stack dump to stderr.
fn dump_stack() {
    let trace = Backtrace::force_capture();
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{trace}");
}
