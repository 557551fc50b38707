#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Check macro tests for the passing paths.
//!
//! A failing check logs a FATAL record and terminates the process, so
//! failure paths are exercised through the CLI subprocess tests. Here we
//! pin down that holding checks are silent no-ops.

use cinder_core::{
    cinder_check, cinder_check_eq, cinder_check_ge, cinder_check_gt, cinder_check_le,
    cinder_check_lt, cinder_check_ne, cinder_check_ok, cinder_dcheck, cinder_dcheck_eq,
    cinder_log, Severity,
};

#[test]
fn test_holding_checks_do_not_terminate() {
    cinder_check!(1 + 1 == 2);
    cinder_check!(true, "context {}", 7);
    cinder_check_eq!(4, 4);
    cinder_check_ne!(4, 5);
    cinder_check_lt!(1, 2);
    cinder_check_le!(2, 2);
    cinder_check_gt!(3, 2);
    cinder_check_ge!(3, 3);
}

#[test]
fn test_check_ok_accepts_ok_results() {
    let result: Result<u32, String> = Ok(7);
    cinder_check_ok!(result);
    cinder_check_ok!(result, "while loading {}", "fixture");
    assert_eq!(result.unwrap(), 7);
}

#[test]
fn test_dchecks_hold_in_every_build_profile() {
    cinder_dcheck!(1 < 2);
    cinder_dcheck_eq!(10, 10);
}

#[test]
fn test_statement_macro_with_disabled_severity_is_silent() {
    // default threshold is Info; Debug statements evaluate without output
    cinder_log!(Debug, "invisible {}", 1);
}

#[test]
fn test_expression_macro_yields_a_streamable_record() {
    let mut record = cinder_log!(Debug);
    assert_eq!(record.severity(), Severity::Debug);
    record.append("part one, ").append("part two");
}

#[test]
fn test_dfatal_severity_depends_on_build_profile() {
    let expected = if cfg!(debug_assertions) {
        Severity::Fatal
    } else {
        Severity::Warning
    };
    assert_eq!(Severity::dfatal(), expected);
}
