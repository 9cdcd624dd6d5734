//! Single-record decoding
//!
//! Turns one feed record (a JSON object) into a validated `Event`: shape
//! checks, blank checks, date parsing, severity classification, then a fresh
//! identifier.

use serde_json::{Map, Value};
use std::convert::TryFrom;
use uuid::Uuid;
use validator::Validate;

use super::date::DateParser;
use crate::models::validation::{
    first_invalid_field, optional_text, required_str, validate_not_blank,
};
use crate::models::{Event, FieldDecodeError, FieldErrorKind, RawRecord, Severity};

/// Fields checked by `RawRecord::validate`, in report order
const VALIDATED_FIELDS: [&str; 2] = ["title", "country"];

impl RawRecord {
    /// Pull the record fields out of a JSON object
    pub fn from_map(record: &Map<String, Value>) -> Result<Self, FieldDecodeError> {
        Ok(Self {
            title: required_str(record, "title")?.to_string(),
            country: required_str(record, "country")?.to_string(),
            date: required_str(record, "date")?.to_string(),
            impact: required_str(record, "impact")?.to_string(),
            forecast: optional_text(record, "forecast")?,
            previous: optional_text(record, "previous")?,
            actual: optional_text(record, "actual")?,
        })
    }
}

/// Decodes feed records into events
#[derive(Debug, Clone, Copy)]
pub struct EventDecoder {
    dates: &'static DateParser,
}

impl Default for EventDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDecoder {
    /// Decoder using the shared feed date parser
    pub fn new() -> Self {
        Self::with_parser(DateParser::feed())
    }

    pub fn with_parser(dates: &'static DateParser) -> Self {
        Self { dates }
    }

    /// Decode one record object
    ///
    /// Title and country are checked, blank included, before any other
    /// field is read.
    pub fn decode(&self, record: &Map<String, Value>) -> Result<Event, FieldDecodeError> {
        for field in VALIDATED_FIELDS {
            let value = required_str(record, field)?;
            if validate_not_blank(value).is_err() {
                return Err(FieldDecodeError::with_raw(FieldErrorKind::Empty, field, value));
            }
        }

        let raw = RawRecord::from_map(record)?;
        self.assemble(raw)
    }

    /// Validate an extracted record and build the event
    pub fn assemble(&self, raw: RawRecord) -> Result<Event, FieldDecodeError> {
        if let Err(errors) = raw.validate() {
            let field = first_invalid_field(&errors, &VALIDATED_FIELDS).unwrap_or("record");
            let value = match field {
                "title" => raw.title,
                "country" => raw.country,
                _ => String::new(),
            };
            return Err(FieldDecodeError::with_raw(FieldErrorKind::Empty, field, value));
        }

        let date = self.dates.parse(&raw.date)?;

        let impact = Severity::classify(&raw.impact);
        if !impact.is_known() {
            tracing::warn!(
                label = %raw.impact,
                title = %raw.title,
                "Unrecognized impact label, classified as Unknown"
            );
        }

        Ok(Event {
            id: Uuid::new_v4(),
            title: raw.title,
            country: raw.country,
            date,
            impact,
            forecast: raw.forecast,
            previous: raw.previous,
            actual: raw.actual,
        })
    }
}

/// Build an event from an extracted record using the feed date parser
impl TryFrom<RawRecord> for Event {
    type Error = FieldDecodeError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        EventDecoder::new().assemble(raw)
    }
}

/// Decode one record object with the default decoder
pub fn decode_record(record: &Map<String, Value>) -> Result<Event, FieldDecodeError> {
    EventDecoder::new().decode(record)
}
