#![cfg(feature = "provider")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Provider capture tests
//!
//! Runs records through the provider backend with the in-memory capture
//! subscriber installed. The capture buffer is shared across the whole test
//! process, so every test uses its own unique message marker (and the whole
//! file pins one threshold: Debug, everything enabled).

use cinder_core::schema::{FIELD_APP, FIELD_MESSAGE};
use cinder_core::{cinder_log, init_test_capture, start, LogRecord, Severity};
use tracing::Level;

fn init() -> cinder_core::TestCapture {
    let capture = init_test_capture();
    start("capture-app", Severity::Debug, "");
    capture
}

#[test]
fn test_record_emits_event_with_canonical_fields() {
    let capture = init();
    let marker = "capture_fields_unique_1";

    cinder_log!(Info, "{}", marker);

    let records = capture.records();
    let record = records
        .iter()
        .find(|r| r.message.as_deref() == Some(marker))
        .expect("record should be captured");
    assert_eq!(record.level, Level::INFO);
    assert_eq!(record.app.as_deref(), Some("capture-app"));
    assert!(record
        .file
        .as_deref()
        .unwrap_or_default()
        .ends_with("provider_capture_tests.rs"));
    assert!(record.line.is_some());
    // the canonical keys are what the raw field map indexes by
    assert_eq!(record.fields.get(FIELD_APP).map(String::as_str), Some("capture-app"));
    assert_eq!(record.fields.get(FIELD_MESSAGE).map(String::as_str), Some(marker));
}

#[test]
fn test_debug_records_forward_to_the_provider() {
    // unlike the fallback, the provider receives DEBUG content
    let capture = init();
    let marker = "capture_debug_unique_2";

    cinder_log!(Debug, "{}", marker);

    let count = capture.count_records(|r| {
        r.message.as_deref() == Some(marker) && r.level == Level::DEBUG
    });
    assert_eq!(count, 1);
}

#[test]
fn test_warning_maps_to_warn() {
    let capture = init();
    let marker = "capture_warn_unique_3";

    cinder_log!(Warning, "{}", marker);

    let count = capture
        .count_records(|r| r.message.as_deref() == Some(marker) && r.level == Level::WARN);
    assert_eq!(count, 1);
}

#[test]
fn test_error_maps_to_error() {
    let capture = init();
    let marker = "capture_error_unique_4";

    cinder_log!(Error, "{}", marker);

    let count = capture
        .count_records(|r| r.message.as_deref() == Some(marker) && r.level == Level::ERROR);
    assert_eq!(count, 1);
}

#[test]
fn test_multiple_appends_form_one_event() {
    let capture = init();
    let marker = "capture_join_unique_5";

    let mut record = LogRecord::new(file!(), line!(), Severity::Info);
    if record.is_enabled() {
        record.append(marker).append(": ").append(123);
    }
    drop(record);

    capture.assert_message_exists(&format!("{marker}: 123"));
    let count = capture.count_records(|r| {
        r.message
            .as_deref()
            .is_some_and(|message| message.starts_with(marker))
    });
    assert_eq!(count, 1, "one record finalizes into exactly one event");
}

#[test]
fn test_sequential_records_keep_program_order() {
    let capture = init();
    let first = "capture_order_first_unique_6";
    let second = "capture_order_second_unique_6";

    cinder_log!(Info, "{}", first);
    cinder_log!(Info, "{}", second);

    let records = capture.records();
    let first_idx = records
        .iter()
        .position(|r| r.message.as_deref() == Some(first))
        .expect("first record captured");
    let second_idx = records
        .iter()
        .position(|r| r.message.as_deref() == Some(second))
        .expect("second record captured");
    assert!(first_idx < second_idx);
}
