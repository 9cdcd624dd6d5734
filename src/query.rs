//! Filters over decoded events
//!
//! All filters borrow a slice and return a new `Vec` in the original order.
//! A `Vec<Event>` derefs to `[Event]`, so results feed straight into the
//! next filter:
//!
//! ```
//! use forex_calendar::{EventQuery, Severity};
//! # let events: Vec<forex_calendar::Event> = Vec::new();
//! let usd_high_today = events.for_today().with_impact(Severity::High).by_country("USD");
//! # assert!(usd_high_today.is_empty());
//! ```

use chrono::{DateTime, Utc};

use crate::models::{Event, Severity};

/// Severity used when the caller does not name one
pub const DEFAULT_IMPACT: Severity = Severity::High;

/// Country code used when the caller does not name one
pub const DEFAULT_COUNTRY: &str = "USD";

fn filtered<P>(events: &[Event], predicate: P) -> Vec<Event>
where
    P: Fn(&Event) -> bool,
{
    events.iter().filter(|e| predicate(e)).cloned().collect()
}

/// Events on the same UTC calendar day as `reference`
pub fn events_for_day(events: &[Event], reference: DateTime<Utc>) -> Vec<Event> {
    let day = reference.date_naive();
    filtered(events, |e| e.utc_day() == day)
}

/// Events with exactly this severity
pub fn events_with_impact(events: &[Event], impact: Severity) -> Vec<Event> {
    filtered(events, |e| e.impact == impact)
}

/// Events for a country code (exact, case-sensitive)
pub fn events_by_country(events: &[Event], code: &str) -> Vec<Event> {
    filtered(events, |e| e.country == code)
}

/// Chainable filter methods for event collections
pub trait EventQuery {
    fn for_day(&self, reference: DateTime<Utc>) -> Vec<Event>;

    fn with_impact(&self, impact: Severity) -> Vec<Event>;

    fn by_country(&self, code: &str) -> Vec<Event>;

    /// Events on the current UTC day
    fn for_today(&self) -> Vec<Event> {
        self.for_day(Utc::now())
    }

    fn high_impact(&self) -> Vec<Event> {
        self.with_impact(DEFAULT_IMPACT)
    }

    fn in_default_country(&self) -> Vec<Event> {
        self.by_country(DEFAULT_COUNTRY)
    }
}

impl EventQuery for [Event] {
    fn for_day(&self, reference: DateTime<Utc>) -> Vec<Event> {
        events_for_day(self, reference)
    }

    fn with_impact(&self, impact: Severity) -> Vec<Event> {
        events_with_impact(self, impact)
    }

    fn by_country(&self, code: &str) -> Vec<Event> {
        events_by_country(self, code)
    }
}
