//! Canonical field keys for provider-backend records
//!
//! These constants keep record tagging and test assertions consistent.

/// Application identity tag carried by every provider record.
pub const FIELD_APP: &str = "app";
/// Source file of the logging statement.
pub const FIELD_FILE: &str = "file";
/// Source line of the logging statement.
pub const FIELD_LINE: &str = "line";
/// The record's accumulated text.
pub const FIELD_MESSAGE: &str = "message";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_distinct() {
        let keys = [FIELD_APP, FIELD_FILE, FIELD_LINE, FIELD_MESSAGE];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
