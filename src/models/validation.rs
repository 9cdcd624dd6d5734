//! Field extraction and validation helpers for feed records
//!
//! Records arrive as loosely-typed JSON objects. These helpers pull single
//! fields out of a record and report shape problems as `FieldDecodeError`s
//! naming the field.

use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

use super::error::{FieldDecodeError, FieldErrorKind};

/// Reject blank strings (validator crate hook)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Fetch a required string field
pub fn required_str<'a>(
    record: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a str, FieldDecodeError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(FieldDecodeError::new(FieldErrorKind::Missing, field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(FieldDecodeError::with_raw(
            FieldErrorKind::WrongType { expected: "string" },
            field,
            other.to_string(),
        )),
    }
}

/// Fetch an optional free-form field, kept as text
///
/// Absent and `null` both mean "no value". Strings are returned verbatim;
/// bare JSON numbers keep their textual rendering.
pub fn optional_text(
    record: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, FieldDecodeError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(FieldDecodeError::with_raw(
            FieldErrorKind::WrongType {
                expected: "string or null",
            },
            field,
            other.to_string(),
        )),
    }
}

/// First field in `order` that has validator errors
///
/// `ValidationErrors` is keyed by a hash map, so the caller supplies the
/// declaration order to keep reports deterministic.
pub fn first_invalid_field(
    errors: &ValidationErrors,
    order: &[&'static str],
) -> Option<&'static str> {
    let failed = errors.field_errors();
    order.iter().copied().find(|field| failed.contains_key(*field))
}
