//! Integration tests for the query surface
//!
//! Events are decoded from feed JSON first, then filtered, so these tests
//! cover the path a caller actually takes.

use chrono::{Duration, TimeZone, Utc};
use forex_calendar::test_utils::{create_test_event_at, feed_json, record_json, sample_records};
use forex_calendar::{
    decode_calendar, events_by_country, events_for_day, events_with_impact, Event, EventQuery,
    Severity,
};

fn decode(records: Vec<serde_json::Value>) -> Vec<Event> {
    let bytes = serde_json::to_vec(&feed_json(records)).unwrap();
    decode_calendar(&bytes).unwrap()
}

#[test]
fn test_low_impact_round_trip() {
    let events = decode(vec![
        record_json("Auction", "USD", "2024-03-15T17:00:00+0000", "Low"),
        record_json("CPI", "USD", "2024-03-15T12:30:00+0000", "High"),
    ]);

    let low = events_with_impact(&events, Severity::Low);
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].title, "Auction");
    assert_eq!(low[0].id, events[0].id);
}

#[test]
fn test_day_boundaries_are_utc() {
    let events = decode(vec![
        record_json("Late", "USD", "2024-03-15T23:59:00Z", "High"),
        record_json("Next day", "USD", "2024-03-16T00:01:00Z", "High"),
        // 20:00 in New York is already the 16th in UTC
        record_json("Evening NY", "USD", "2024-03-15T20:00:00-04:00", "High"),
    ]);

    let reference = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    let day = events_for_day(&events, reference);

    let titles: Vec<_> = day.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Late"]);
}

#[test]
fn test_chained_filters_over_decoded_feed() {
    let events = decode(sample_records());
    let reference = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();

    let selected = events.for_day(reference).by_country("USD").high_impact();
    let titles: Vec<_> = selected.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["CPI m/m", "Core CPI m/m"]);

    let free_functions = events_with_impact(
        &events_by_country(&events_for_day(&events, reference), "USD"),
        Severity::High,
    );
    assert_eq!(selected, free_functions);
}

#[test]
fn test_for_today_uses_current_utc_day() {
    let now = Utc::now();
    let events = vec![
        create_test_event_at(now, Severity::High),
        create_test_event_at(now - Duration::days(2), Severity::High),
        create_test_event_at(now + Duration::days(2), Severity::High),
    ];

    let today = events.for_today();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id, events[0].id);
}

#[test]
fn test_country_filter_is_exact() {
    let events = decode(vec![
        record_json("A", "USD", "2024-03-15", "High"),
        record_json("B", "usd", "2024-03-15", "High"),
        record_json("C", "US", "2024-03-15", "High"),
    ]);

    let usd = events.in_default_country();
    assert_eq!(usd.len(), 1);
    assert_eq!(usd[0].title, "A");
}

#[test]
fn test_filters_on_empty_results() {
    let events = decode(sample_records());
    let far_future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

    assert!(events.for_day(far_future).high_impact().is_empty());
    assert!(events.by_country("XYZ").for_today().is_empty());
}
