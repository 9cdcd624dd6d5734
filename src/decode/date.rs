//! Timestamp parsing for feed dates
//!
//! The feed never says which format a date string uses, so each string is
//! tried against an ordered table of grammars and the first match wins.
//!
//! Table order is an invariant: longer, more specific grammars come first and
//! the date-only grammar is always last, so a full timestamp can never be
//! truncated to its date part. Every grammar yields a `DateTime<Utc>`; the
//! local timezone of the process is never consulted.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::UnrecognizedDateFormat;

/// A single textual date/time format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `2024-03-15T14:30:00+0000`
    OffsetDateTime,
    /// `2024-03-15T14:30:00.000+00:00`
    FractionalOffsetDateTime,
    /// `2024-03-15T14:30:00Z`, `2024-03-15T08:30:00-04:00`
    Rfc3339,
    /// `2024-03-15`, read as midnight UTC
    DateOnly,
}

impl Grammar {
    pub fn name(&self) -> &'static str {
        match self {
            Grammar::OffsetDateTime => "offset_date_time",
            Grammar::FractionalOffsetDateTime => "fractional_offset_date_time",
            Grammar::Rfc3339 => "rfc3339",
            Grammar::DateOnly => "date_only",
        }
    }

    /// Parse `raw` with this grammar alone
    pub fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        if !has_calendar_date_prefix(raw) {
            return None;
        }

        match self {
            Grammar::OffsetDateTime => DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Grammar::FractionalOffsetDateTime => {
                DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%:z")
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc))
            },
            Grammar::Rfc3339 => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Grammar::DateOnly => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| Utc.from_utc_datetime(&midnight)),
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Grammars accepted in feed documents, in priority order
pub static FEED_GRAMMARS: [Grammar; 4] = [
    Grammar::OffsetDateTime,
    Grammar::FractionalOffsetDateTime,
    Grammar::Rfc3339,
    Grammar::DateOnly,
];

static FEED_PARSER: DateParser = DateParser::new(&FEED_GRAMMARS);

/// Ordered, stateless date parser
#[derive(Debug, Clone, Copy)]
pub struct DateParser {
    grammars: &'static [Grammar],
}

impl DateParser {
    /// Build a parser over a grammar table. The order of `grammars` is the
    /// order in which they are tried.
    pub const fn new(grammars: &'static [Grammar]) -> Self {
        Self { grammars }
    }

    /// Shared parser configured for the calendar feed
    pub fn feed() -> &'static DateParser {
        &FEED_PARSER
    }

    pub fn grammars(&self) -> &'static [Grammar] {
        self.grammars
    }

    /// Parse a raw feed date into a UTC instant
    pub fn parse(&self, raw: &str) -> Result<DateTime<Utc>, UnrecognizedDateFormat> {
        self.parse_with_grammar(raw).map(|(_, instant)| instant)
    }

    /// Parse and also report which grammar matched
    pub fn parse_with_grammar(
        &self,
        raw: &str,
    ) -> Result<(Grammar, DateTime<Utc>), UnrecognizedDateFormat> {
        let candidate = raw.trim();
        if candidate.is_empty() {
            return Err(UnrecognizedDateFormat::new(raw));
        }

        self.grammars
            .iter()
            .find_map(|grammar| grammar.parse(candidate).map(|instant| (*grammar, instant)))
            .map(|(grammar, instant)| {
                tracing::trace!(raw = %raw, grammar = %grammar, "Date parsed");
                (grammar, instant)
            })
            .ok_or_else(|| UnrecognizedDateFormat::new(raw))
    }
}

/// Every grammar starts with a fixed-width `YYYY-MM-DD`. chrono's numeric
/// specifiers accept any width, so the shape is checked up front.
fn has_calendar_date_prefix(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.len() < 10 || (bytes.len() > 10 && bytes[10] != b'T') {
        return false;
    }

    bytes[..10].iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

impl Default for DateParser {
    fn default() -> Self {
        *Self::feed()
    }
}

/// Parse a raw feed date with the shared feed parser
pub fn parse_feed_date(raw: &str) -> Result<DateTime<Utc>, UnrecognizedDateFormat> {
    DateParser::feed().parse(raw)
}
