//! CLI subcommands

pub mod check;
pub mod emit;

use cinder_core::{cinder_log, Severity};

/// Parse a severity name, terminating with a diagnostic on an unsupported
/// value: a misconfigured logger must not start quietly.
pub fn parse_severity_or_die(value: &str) -> Severity {
    match value.parse::<Severity>() {
        Ok(severity) => severity,
        Err(err) => {
            cinder_log!(Fatal, "{} [{}]", err, err.code());
            unreachable!("fatal records terminate the process");
        }
    }
}
