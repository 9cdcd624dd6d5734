//! forex-calendar Library
//!
//! Decodes the weekly economic-calendar feed into typed events and offers
//! composable filters over the result.

pub mod config;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod query;
pub mod test_utils;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use models::{
    DecodeError, Event, FieldDecodeError, FieldErrorKind, RawRecord, Severity,
    UnrecognizedDateFormat,
};

// Re-export the decoding pipeline
pub use decode::{decode_calendar, decode_record, CalendarDecoder, DateParser, EventDecoder, Grammar};

// Re-export query surface
pub use query::{
    events_by_country, events_for_day, events_with_impact, EventQuery, DEFAULT_COUNTRY,
    DEFAULT_IMPACT,
};

// Re-export transport seam
pub use fetch::{fetch_calendar, Fetcher, HttpFetcher, TransportError};
