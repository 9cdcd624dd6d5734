//! Test utilities for forex-calendar
//!
//! This module provides a mock feed source and fixture builders for testing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::fetch::{Fetcher, TransportError};
use crate::models::{Event, Severity};

/// Mock implementation of `Fetcher` for testing
#[derive(Debug)]
pub struct MockFetcher {
    response: Mutex<Result<Vec<u8>, TransportError>>,
    calls: AtomicUsize,
}

impl MockFetcher {
    /// Mock that serves `document` on every call
    pub fn with_document(document: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Mutex::new(Ok(document.into())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that serves a JSON value on every call
    pub fn with_json(document: &Value) -> Self {
        Self::with_document(document.to_string())
    }

    /// Mock that fails every call with `error`
    pub fn failing(error: TransportError) -> Self {
        Self {
            response: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the canned response
    pub fn set_response(&self, response: Result<Vec<u8>, TransportError>) {
        *self.response.lock().unwrap() = response;
    }

    /// Number of fetches performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

/// A valid feed record as JSON
pub fn record_json(title: &str, country: &str, date: &str, impact: &str) -> Value {
    json!({
        "title": title,
        "country": country,
        "date": date,
        "impact": impact,
        "forecast": null,
        "previous": null,
        "actual": null
    })
}

/// A small feed covering every severity and several date grammars
pub fn sample_records() -> Vec<Value> {
    vec![
        record_json("CPI m/m", "USD", "2024-03-15T08:30:00-04:00", "High"),
        record_json("Core CPI m/m", "USD", "2024-03-15T12:30:00+0000", "High"),
        record_json("ECB President Speaks", "EUR", "2024-03-15T09:00:00.000+00:00", "Medium"),
        record_json("Treasury Auction", "USD", "2024-03-15T23:59:00Z", "Low"),
        record_json("Bank Holiday", "JPY", "2024-03-16", "Holiday"),
    ]
}

/// Feed document in the bare array shape
pub fn feed_json(records: Vec<Value>) -> Value {
    Value::Array(records)
}

/// Feed document in the `{ "events": [...] }` shape
pub fn wrapped_feed_json(records: Vec<Value>) -> Value {
    json!({ "events": records })
}

/// Create a test Event with default values
pub fn create_test_event() -> Event {
    Event {
        id: Uuid::new_v4(),
        title: "Test Release".to_string(),
        country: "USD".to_string(),
        date: Utc::now(),
        impact: Severity::Medium,
        forecast: None,
        previous: None,
        actual: None,
    }
}

/// Create a test Event at a given instant with a given severity
pub fn create_test_event_at(date: DateTime<Utc>, impact: Severity) -> Event {
    Event {
        date,
        impact,
        ..create_test_event()
    }
}
