//! JSON validity checks for hoard payloads.

/// Returns `true` if `text` parses as JSON (object, array, or scalar).
///
/// A parse failure is the expected negative answer, so nothing is logged.
pub fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}

/// Byte-level variant of [`is_valid_json`]; invalid UTF-8 is not JSON.
pub fn is_valid_json_bytes(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde::de::IgnoredAny>(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_json_value() {
        assert!(is_valid_json("{}"));
        assert!(is_valid_json("[1,2,3]"));
        assert!(is_valid_json("\"str\""));
        assert!(is_valid_json("42"));
        assert!(is_valid_json("null"));
        assert!(is_valid_json("  {\"nested\": {\"a\": [true, false]}}\n"));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(!is_valid_json("{not json"));
        assert!(!is_valid_json(""));
        assert!(!is_valid_json("{} trailing"));
        assert!(!is_valid_json("'single'"));
    }

    #[test]
    fn bytes_variant() {
        assert!(is_valid_json_bytes(b"[1]"));
        assert!(!is_valid_json_bytes(&[0xff, 0xfe]));
    }
}
