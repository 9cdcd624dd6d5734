//! Feed decoding pipeline
//!
//! Bytes go through `CalendarDecoder`, which hands each record to
//! `EventDecoder`, which in turn uses `DateParser` and `Severity::classify`.
//! Everything here is synchronous and free of I/O.

pub mod calendar;
pub mod date;
pub mod record;

pub use calendar::{decode_calendar, CalendarDecoder};
pub use date::{parse_feed_date, DateParser, Grammar, FEED_GRAMMARS};
pub use record::{decode_record, EventDecoder};
