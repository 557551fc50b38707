//! End-to-end demo of the logging front end.
//!
//! Run with `cargo run --example logging_demo` for the fallback backend, or
//! add `--features provider` for the tracing-based provider.

use cinder_core::{cinder_check, cinder_log, Severity};

fn main() {
    cinder_core::start("logging-demo", Severity::Debug, "");

    cinder_log!(Info, "demo starting with {} steps", 3);
    cinder_log!(Debug, "debug detail (mute under the fallback backend)");

    let mut record = cinder_log!(Warning);
    if record.is_enabled() {
        record.append("step ").append(2).append(" took ").append(18).append("ms");
    }
    drop(record);

    cinder_check!(1 + 1 == 2, "arithmetic holds");

    if let Some(dir) = cinder_core::working_dir() {
        cinder_log!(Info, "started from {}", dir);
    }

    cinder_core::shutdown();
}
