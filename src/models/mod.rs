//! Data models for the economic calendar
//!
//! This module contains the domain types produced by decoding: severities,
//! raw records, validated events, and the errors raised while building them.

pub mod error;
pub mod event;
pub mod validation;

// Re-export commonly used types
pub use error::{
    DecodeError, DecodeResult, FieldDecodeError, FieldErrorKind, UnrecognizedDateFormat,
};
pub use event::{Event, RawRecord, Severity};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_module_exports() {
        let _raw = RawRecord {
            title: "Non-Farm Employment Change".to_string(),
            country: "USD".to_string(),
            date: "2024-03-08T08:30:00-05:00".to_string(),
            impact: "High".to_string(),
            forecast: Some("200K".to_string()),
            previous: None,
            actual: None,
        };

        let _event = Event {
            id: Uuid::new_v4(),
            title: "Bank Holiday".to_string(),
            country: "JPY".to_string(),
            date: Utc::now(),
            impact: Severity::Unknown,
            forecast: None,
            previous: None,
            actual: None,
        };

        let _error = FieldDecodeError::new(FieldErrorKind::Missing, "title");
        let _decode = DecodeError::from(FieldDecodeError::from(UnrecognizedDateFormat::new("x")));
    }
}
