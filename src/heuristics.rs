//! Naming-based exception rules.
//!
//! The native type system alone cannot distinguish "conceptually a string
//! output parameter" from "a raw byte buffer"; both are `char **`. These
//! rules resolve that ambiguity from parameter names. They are preserved
//! verbatim from the legacy rule set - the deeper rationale for the three
//! exceptions is not recoverable, so they are kept as literal special cases
//! and must not be generalized.
//!
//! The full exception list:
//!
//! - a name containing `"data"` marks a raw data buffer, suppressing the
//!   string rules for `char **` and `const char *`;
//! - the exact name `"appids"` suppresses the double-char-pointer string
//!   rule;
//! - the exact name `"signature"` suppresses the const-char-pointer string
//!   rule.

/// Substring that marks a parameter as a raw data buffer.
const DATA_BUFFER_SUBSTRING: &str = "data";

/// Exact name excluded from the double-char-pointer string rule.
const APPIDS_NAME: &str = "appids";

/// Exact name excluded from the const-char-pointer string rule.
const SIGNATURE_NAME: &str = "signature";

/// Whether the parameter name marks a raw data buffer.
#[inline]
pub fn names_data_buffer(name: &str) -> bool {
    name.contains(DATA_BUFFER_SUBSTRING)
}

/// Whether the name is the `"appids"` exception.
#[inline]
pub fn is_appids_exception(name: &str) -> bool {
    name == APPIDS_NAME
}

/// Whether the name is the `"signature"` exception.
#[inline]
pub fn is_signature_exception(name: &str) -> bool {
    name == SIGNATURE_NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_substring_matches_anywhere() {
        assert!(names_data_buffer("data"));
        assert!(names_data_buffer("plist_data"));
        assert!(names_data_buffer("datastream"));
        assert!(!names_data_buffer("path"));
        assert!(!names_data_buffer("Data")); // case-sensitive, as in the legacy rules
    }

    #[test]
    fn appids_is_exact_match() {
        assert!(is_appids_exception("appids"));
        assert!(!is_appids_exception("appids_list"));
        assert!(!is_appids_exception("appid"));
    }

    #[test]
    fn signature_is_exact_match() {
        assert!(is_signature_exception("signature"));
        assert!(!is_signature_exception("signatures"));
    }
}
