//! Decode error types for calendar models
//!
//! These errors describe why a feed document or one of its records could not
//! be turned into typed events. They are kept separate from the application
//! errors in `crate::error` so that the decoding core has no knowledge of
//! transport or configuration failures.

use std::fmt;
use thiserror::Error;

/// No known timestamp grammar matched the raw date string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized date format: '{raw}'")]
pub struct UnrecognizedDateFormat {
    /// The raw string exactly as it appeared in the feed
    pub raw: String,
}

impl UnrecognizedDateFormat {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// A required field was missing, mis-shaped or unparseable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct FieldDecodeError {
    /// Why the field was rejected
    pub kind: FieldErrorKind,
    /// Name of the offending field
    pub field: String,
    /// Offending raw value, rendered as text, if one was present
    pub raw: Option<String>,
    /// Position of the record inside the feed array, if known
    pub record_index: Option<usize>,
}

impl FieldDecodeError {
    /// Create a new field error without a raw value
    pub fn new(kind: FieldErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            raw: None,
            record_index: None,
        }
    }

    /// Create a field error carrying the offending raw value
    pub fn with_raw(kind: FieldErrorKind, field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            raw: Some(raw.into()),
            record_index: None,
        }
    }

    /// Attach the record position inside the feed
    pub fn at_record(mut self, index: usize) -> Self {
        self.record_index = Some(index);
        self
    }

    /// True when the failure came from the date parser
    pub fn is_date_error(&self) -> bool {
        self.kind == FieldErrorKind::UnrecognizedDateFormat
    }
}

impl fmt::Display for FieldDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record_index {
            Some(index) => write!(f, "Record {}: field '{}': {}", index, self.field, self.kind)?,
            None => write!(f, "Field '{}': {}", self.field, self.kind)?,
        }
        if let Some(raw) = &self.raw {
            write!(f, " (got: {})", raw)?;
        }
        Ok(())
    }
}

impl From<UnrecognizedDateFormat> for FieldDecodeError {
    fn from(err: UnrecognizedDateFormat) -> Self {
        FieldDecodeError::with_raw(FieldErrorKind::UnrecognizedDateFormat, "date", err.raw)
    }
}

/// Specific field failure reasons
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Field is required but absent or null
    #[error("Required field is missing")]
    Missing,

    /// Field is present with the wrong JSON type
    #[error("Expected {expected}")]
    WrongType { expected: &'static str },

    /// Field is a string but blank
    #[error("Value must not be empty")]
    Empty,

    /// Date string matched none of the known grammars
    #[error("Unrecognized date format")]
    UnrecognizedDateFormat,
}

/// Failure decoding a whole feed document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload is not JSON, or not one of the accepted top-level shapes
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A record failed; the whole document is rejected
    #[error(transparent)]
    Field(#[from] FieldDecodeError),
}

impl DecodeError {
    /// Create a malformed document error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        DecodeError::MalformedDocument(msg.into())
    }

    /// The field error, if this failure came from a record
    pub fn field_error(&self) -> Option<&FieldDecodeError> {
        match self {
            DecodeError::Field(err) => Some(err),
            DecodeError::MalformedDocument(_) => None,
        }
    }
}

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;
