//! Normalization rules for submitted form fields.
//!
//! Browsers submit every form field as text. Each entity form is built from
//! three kinds of field:
//!
//! - **required** text: trimmed, but left absent when the field is missing.
//!   The storage layer's `NOT NULL` and non-empty `CHECK` constraints reject
//!   a missing or blank value.
//! - **optional** text: trimmed, defaulting to an empty string.
//! - **optional integer**: empty or missing means "no value".

use crate::error::CoreError;

/// Trim a required text field. A missing field stays `None`.
///
/// A blank submission becomes `Some("")`; the database, not this function,
/// refuses to store it.
pub fn required(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string())
}

/// Trim an optional text field, defaulting to an empty string.
pub fn optional(raw: Option<String>) -> String {
    raw.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Parse an optional whole-number field.
///
/// Missing and blank values yield `Ok(None)`. Anything else must parse as an
/// integer.
pub fn optional_int(field: &str, raw: Option<&str>) -> Result<Option<i64>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<i64>()
            .map(Some)
            .map_err(|_| CoreError::Validation(format!("{field} must be a whole number"))),
    }
}
