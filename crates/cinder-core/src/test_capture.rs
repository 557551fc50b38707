//! Test capture mode for deterministic logging assertions
//!
//! A test-only subscriber that records provider events in memory. Install
//! it before calling [`crate::start`]; the provider's own install is
//! tolerant of an existing subscriber, so the capture stays authoritative
//! for the whole test process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::Visit;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::schema::{FIELD_APP, FIELD_FILE, FIELD_LINE, FIELD_MESSAGE};

/// A captured record with its provider level and canonical fields.
#[derive(Clone, Debug)]
pub struct CapturedRecord {
    pub level: Level,
    pub app: Option<String>,
    pub file: Option<String>,
    pub line: Option<u64>,
    pub message: Option<String>,
    pub fields: HashMap<String, String>,
}

struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer collecting every event into a shared buffer.
pub struct CaptureLayer {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl CaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let records = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            records: records.clone(),
        };
        let capture = TestCapture { records };
        (layer, capture)
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let captured = CapturedRecord {
            level: *event.metadata().level(),
            app: visitor.fields.get(FIELD_APP).cloned(),
            file: visitor.fields.get(FIELD_FILE).cloned(),
            line: visitor
                .fields
                .get(FIELD_LINE)
                .and_then(|line| line.parse().ok()),
            message: visitor.fields.get(FIELD_MESSAGE).cloned(),
            fields: visitor.fields,
        };

        self.records
            .lock()
            .map(|mut records| records.push(captured))
            .ok();
    }
}

/// Handle for inspecting captured records in tests.
#[derive(Clone)]
pub struct TestCapture {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl TestCapture {
    /// All records captured so far.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Assert that a record with the given message text was captured.
    ///
    /// # Panics
    ///
    /// Panics if no such record exists.
    pub fn assert_message_exists(&self, message: &str) {
        let records = self.records();
        let found = records
            .iter()
            .any(|r| r.message.as_deref() == Some(message));
        assert!(
            found,
            "Expected record with message {:?} not found in {} captured records",
            message,
            records.len()
        );
    }

    /// Count records matching a predicate.
    pub fn count_records<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedRecord) -> bool,
    {
        self.records().iter().filter(|r| predicate(r)).count()
    }

    /// Clear all captured records.
    pub fn clear(&self) {
        self.records.lock().map(|mut r| r.clear()).ok();
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize capture mode, installing the capture subscriber on first use.
///
/// Returns a shared global capture handle; later calls reuse the same
/// buffer. Call this before [`crate::start`] in capture-based tests.
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = CaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_record_clone() {
        let record = CapturedRecord {
            level: Level::INFO,
            app: Some("test".to_string()),
            file: Some("src/lib.rs".to_string()),
            line: Some(10),
            message: Some("hello".to_string()),
            fields: HashMap::new(),
        };

        let cloned = record.clone();
        assert_eq!(cloned.level, record.level);
        assert_eq!(cloned.message, record.message);
    }
}
