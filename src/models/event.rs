//! Event data models for the economic calendar
//!
//! This module defines the severity classification, the raw record shape
//! pulled out of the feed, and the validated event handed to callers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::validate_not_blank;

/// Importance of a scheduled release
///
/// The feed label set is open-ended; anything outside the three known labels
/// lands in `Unknown` instead of failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Severity {
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Low")]
    Low,
    /// Label not recognised (e.g. "Holiday")
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Severity {
    /// Classify a raw feed label. Exact, case-sensitive match; never fails.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "High" => Severity::High,
            "Medium" => Severity::Medium,
            "Low" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    /// Feed label for this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Severity::Unknown
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        Severity::classify(raw)
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        Severity::classify(&raw)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One record as pulled out of the feed, before date parsing and classification
///
/// Shape checks (presence, JSON type) happen while building this; content
/// checks run through `validate()`.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RawRecord {
    /// Display title of the release
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    /// Currency / country code, e.g. "USD"
    #[validate(custom(function = "validate_not_blank"))]
    pub country: String,

    /// Timestamp in one of the feed's grammars
    pub date: String,

    /// Severity label, classified later
    pub impact: String,

    pub forecast: Option<String>,
    pub previous: Option<String>,
    pub actual: Option<String>,
}

/// A validated, scheduled economic release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Process-local identifier assigned at decode time
    pub id: Uuid,

    pub title: String,

    pub country: String,

    /// Scheduled instant, normalised to UTC
    pub date: DateTime<Utc>,

    pub impact: Severity,

    /// Free-form readings, kept verbatim ("NaN", "Infinity", "1.2%", ...)
    pub forecast: Option<String>,
    pub previous: Option<String>,
    pub actual: Option<String>,
}

impl Event {
    /// Content key for matching the same release across separate decodes.
    /// `id` is fresh on every decode so it cannot serve this purpose.
    pub fn identity_key(&self) -> (&str, &str, DateTime<Utc>) {
        (&self.title, &self.country, self.date)
    }

    /// UTC calendar day of the release
    pub fn utc_day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn is_high_impact(&self) -> bool {
        self.impact == Severity::High
    }

    /// True once the feed has published the actual reading
    pub fn is_released(&self) -> bool {
        self.actual.as_deref().is_some_and(|a| !a.trim().is_empty())
    }
}
