//! Cinder - severity-leveled, stream-style logging front end
//!
//! This crate provides a minimal logging façade with:
//! - An ordered severity model (`Debug < Info < Warning < Error < Fatal`)
//!   with a process-wide threshold
//! - Two backends selected at build time via the `provider` cargo feature:
//!   the tracing-based provider, or a dependency-free stderr fallback
//! - A scoped per-statement record (`LogRecord`) that finalizes on drop and,
//!   for `Fatal` severity, terminates the process with a best-effort stack
//!   dump
//! - Single-point lifecycle control (`start`/`shutdown`) plus an optional
//!   process failure handler
//! - Call-site macros (`cinder_log!`, `cinder_check!`, `cinder_dcheck!`, …)
//!
//! # Usage
//!
//! ```
//! use cinder_core::{cinder_log, Severity};
//!
//! cinder_core::start("demo", Severity::Info, "");
//! cinder_log!(Info, "ready with {} workers", 4);
//! cinder_core::shutdown();
//! ```

pub mod errors;
pub mod init;
pub mod record;
pub mod severity;

pub(crate) mod backend;
mod macros;

#[cfg(feature = "provider")]
pub mod schema;
#[cfg(feature = "provider")]
pub mod test_capture;

// Re-export commonly used items
pub use errors::ConfigError;
pub use init::{
    install_failure_handler, is_enabled, shutdown, start, threshold, working_dir,
};
pub use record::LogRecord;
pub use severity::Severity;

#[cfg(feature = "provider")]
pub use test_capture::{init_test_capture, CapturedRecord, TestCapture};
