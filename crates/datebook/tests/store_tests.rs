//! Tests for adding and looking up events in the `EventStore`.

use datebook::{CalendarDate, DayEvents, Event, EventStore};

fn date(day: u32, month: u32, year: i32) -> CalendarDate {
    CalendarDate::new(day, month, year).unwrap()
}

#[test]
fn new_store_is_empty() {
    let store = EventStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.view_events(&date(1, 1, 2024)).is_none());
}

#[test]
fn added_event_is_last_in_view() {
    let mut store = EventStore::new();
    let d = date(15, 3, 2024);
    store.add_event(d, "Team meeting");
    store.add_event(d, "Dentist");

    let events = store.view_events(&d).expect("date should have events");
    assert_eq!(events.last(), Some(&Event::new("Dentist")));
}

#[test]
fn events_keep_insertion_order() {
    let mut store = EventStore::new();
    let d = date(1, 6, 2024);
    store.add_event(d, "first");
    store.add_event(d, "second");
    store.add_event(d, "third");

    let descriptions: Vec<&str> = store
        .view_events(&d)
        .unwrap()
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["first", "second", "third"]);
}

#[test]
fn duplicate_events_are_both_kept() {
    let mut store = EventStore::new();
    let d = date(2, 2, 2022);
    store.add_event(d, "standup");
    store.add_event(d, "standup");

    assert_eq!(store.view_events(&d).unwrap().len(), 2);
}

#[test]
fn lookup_miss_does_not_create_entry() {
    let mut store = EventStore::new();
    store.add_event(date(1, 3, 2024), "present");

    let miss = date(2, 3, 2024);
    assert_eq!(store.lookup(&miss), DayEvents::default());
    assert!(store.view_events(&miss).is_none());

    assert_eq!(store.date_count(), 1);
    let calendar = store.display_calendar(3, 2024).unwrap();
    assert!(!calendar.contains("Events on 02/03/2024"));
}

#[test]
fn lookup_hit_reports_found() {
    let mut store = EventStore::new();
    let d = date(10, 10, 2010);
    store.add_event(d, "ten");

    let result = store.lookup(&d);
    assert!(result.found);
    assert_eq!(result.events, vec![Event::new("ten")]);
}

#[test]
fn lookup_is_exact_match_only() {
    let mut store = EventStore::new();
    store.add_event(date(15, 3, 2024), "this year");

    assert!(store.view_events(&date(15, 3, 2023)).is_none());
    assert!(store.view_events(&date(15, 4, 2024)).is_none());
    assert!(store.view_events(&date(16, 3, 2024)).is_none());
}

#[test]
fn iter_walks_dates_in_calendar_order() {
    let mut store = EventStore::new();
    store.add_event(date(1, 1, 2025), "c");
    store.add_event(date(31, 12, 2024), "b");
    store.add_event(date(1, 12, 2024), "a");

    let order: Vec<String> = store.iter().map(|(d, _)| d.to_string()).collect();
    assert_eq!(order, vec!["01/12/2024", "31/12/2024", "01/01/2025"]);
}

#[test]
fn events_in_month_rejects_invalid_month() {
    let store = EventStore::new();
    assert!(store.events_in_month(13, 2024).is_err());
}

#[test]
fn day_events_serialize_as_found_and_strings() {
    let mut store = EventStore::new();
    let d = date(15, 3, 2024);
    store.add_event(d, "Team meeting");

    let json = serde_json::to_value(store.lookup(&d)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "found": true, "events": ["Team meeting"] })
    );
}
