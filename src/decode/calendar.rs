//! Whole-document decoding
//!
//! The feed has shipped both a bare array of records and an object wrapping
//! the array under `events`. Both shapes go through the same record decoder.
//! Decoding is all-or-nothing: the first bad record fails the document.

use serde_json::Value;

use super::record::EventDecoder;
use crate::logging::Timer;
use crate::models::{DecodeError, DecodeResult, Event};

/// Decodes a complete feed document into events, preserving feed order
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarDecoder {
    records: EventDecoder,
}

impl CalendarDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record_decoder(records: EventDecoder) -> Self {
        Self { records }
    }

    /// Decode raw document bytes
    pub fn decode(&self, document: &[u8]) -> DecodeResult<Vec<Event>> {
        let value: Value = serde_json::from_slice(document)
            .map_err(|e| DecodeError::malformed(format!("invalid JSON: {}", e)))?;
        self.decode_value(value)
    }

    /// Decode a document held as text
    pub fn decode_str(&self, document: &str) -> DecodeResult<Vec<Event>> {
        self.decode(document.as_bytes())
    }

    /// Decode an already-parsed JSON document
    pub fn decode_value(&self, document: Value) -> DecodeResult<Vec<Event>> {
        let timer = Timer::start("decode_calendar");
        let records = record_array(document)?;

        let mut events = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let Value::Object(fields) = record else {
                return Err(DecodeError::malformed(format!(
                    "record {} is not an object",
                    index
                )));
            };

            let event = self
                .records
                .decode(&fields)
                .map_err(|e| e.at_record(index))?;
            events.push(event);
        }

        tracing::debug!(events = events.len(), "Calendar decoded");
        timer.stop();
        Ok(events)
    }
}

/// Extract the record array from either accepted top-level shape
fn record_array(document: Value) -> DecodeResult<Vec<Value>> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut wrapper) => match wrapper.remove("events") {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(DecodeError::malformed("'events' is not an array")),
            None => Err(DecodeError::malformed(
                "expected an array or an object with an 'events' array",
            )),
        },
        other => Err(DecodeError::malformed(format!(
            "expected an array or an object with an 'events' array, got {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode raw document bytes with the default decoder
pub fn decode_calendar(document: &[u8]) -> DecodeResult<Vec<Event>> {
    CalendarDecoder::new().decode(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldErrorKind, Severity};
    use serde_json::json;

    fn records() -> Value {
        json!([
            {
                "title": "CPI m/m",
                "country": "USD",
                "date": "2024-03-15T08:30:00-04:00",
                "impact": "High",
                "forecast": "0.4%",
                "previous": "0.3%"
            },
            {
                "title": "German ZEW Economic Sentiment",
                "country": "EUR",
                "date": "2024-03-15T14:30:00.000+00:00",
                "impact": "Medium"
            },
            {
                "title": "Bank Holiday",
                "country": "JPY",
                "date": "2024-03-20",
                "impact": "Holiday"
            }
        ])
    }

    #[test]
    fn test_decode_bare_array() {
        let bytes = serde_json::to_vec(&records()).unwrap();
        let events = decode_calendar(&bytes).unwrap();

        assert_eq!(events.len(), 3);
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["CPI m/m", "German ZEW Economic Sentiment", "Bank Holiday"]);
        assert_eq!(events[2].impact, Severity::Unknown);
    }

    #[test]
    fn test_decode_wrapped_object() {
        let bytes = serde_json::to_vec(&json!({ "events": records() })).unwrap();
        let events = decode_calendar(&bytes).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].country, "USD");
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(decode_calendar(b"[]").unwrap().is_empty());
        assert!(decode_calendar(b"{\"events\": []}").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_documents() {
        let cases: [&[u8]; 10] = [
            b"",
            b"not json",
            b"[{\"title\": ",
            b"42",
            b"\"events\"",
            b"null",
            b"{}",
            b"{\"data\": []}",
            b"{\"events\": {}}",
            b"[1, 2]",
        ];

        for case in cases {
            let err = decode_calendar(case).unwrap_err();
            assert!(
                matches!(err, DecodeError::MalformedDocument(_)),
                "expected malformed for {:?}, got {:?}",
                String::from_utf8_lossy(case),
                err
            );
        }
    }

    #[test]
    fn test_bad_record_fails_whole_document() {
        let mut doc = records();
        doc[1]["date"] = json!("garbage");
        let bytes = serde_json::to_vec(&doc).unwrap();

        let err = decode_calendar(&bytes).unwrap_err();
        let field = err.field_error().expect("field error");
        assert_eq!(field.field, "date");
        assert_eq!(field.kind, FieldErrorKind::UnrecognizedDateFormat);
        assert_eq!(field.record_index, Some(1));
        assert_eq!(field.raw.as_deref(), Some("garbage"));
    }

    #[test]
    fn test_first_failure_is_reported() {
        let mut doc = records();
        doc[0].as_object_mut().unwrap().remove("title");
        doc[2]["date"] = json!("garbage");
        let bytes = serde_json::to_vec(&doc).unwrap();

        let err = decode_calendar(&bytes).unwrap_err();
        let field = err.field_error().expect("field error");
        assert_eq!(field.field, "title");
        assert_eq!(field.record_index, Some(0));
    }

    #[test]
    fn test_decode_str_matches_decode() {
        let text = records().to_string();
        let events = CalendarDecoder::new().decode_str(&text).unwrap();
        assert_eq!(events.len(), 3);
    }
}
