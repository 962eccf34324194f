use chrono::{TimeZone, Utc};

use super::{display_ordering, sorted_for_display, ExperienceEntry, ExperienceStats};

fn entry(id: &str, order: f64, start: Option<(i32, u32, u32)>) -> ExperienceEntry {
    ExperienceEntry {
        id: id.to_string(),
        role: "Developer".to_string(),
        company: "Acme".to_string(),
        location: None,
        start_date: start.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
        end_date: None,
        is_current: false,
        description: None,
        tags: vec![],
        order,
    }
}

#[test]
fn sorts_by_order_ascending() {
    let entries = vec![entry("b", 2.0, None), entry("a", 1.0, None)];
    let sorted = sorted_for_display(&entries);

    assert_eq!(sorted[0].id, "a");
    assert_eq!(sorted[1].id, "b");
}

#[test]
fn equal_order_breaks_tie_by_start_date_descending() {
    let entries = vec![
        entry("older", 0.0, Some((2022, 1, 1))),
        entry("newer", 0.0, Some((2023, 1, 1))),
    ];
    let sorted = sorted_for_display(&entries);

    assert_eq!(sorted[0].id, "newer");
    assert_eq!(sorted[1].id, "older");
}

#[test]
fn missing_start_date_sinks_among_equal_orders() {
    let entries = vec![
        entry("undated", 0.0, None),
        entry("dated", 0.0, Some((2020, 6, 1))),
    ];
    let sorted = sorted_for_display(&entries);

    assert_eq!(sorted[0].id, "dated");
    assert_eq!(sorted[1].id, "undated");
}

#[test]
fn ordering_is_consistent_for_equal_entries() {
    let a = entry("a", 1.0, Some((2023, 1, 1)));
    let b = entry("b", 1.0, Some((2023, 1, 1)));

    assert_eq!(display_ordering(&a, &b), std::cmp::Ordering::Equal);
}

#[test]
fn sorted_for_display_leaves_input_untouched() {
    let entries = vec![entry("b", 2.0, None), entry("a", 1.0, None)];
    let _ = sorted_for_display(&entries);

    assert_eq!(entries[0].id, "b");
}

#[test]
fn stats_count_total_and_current() {
    let mut current = entry("c", 0.0, None);
    current.is_current = true;
    let entries = vec![current, entry("a", 1.0, None), entry("b", 2.0, None)];

    let stats = ExperienceStats::tally(&entries);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.current, 1);
}

#[test]
fn entry_deserializes_backend_shape() {
    let json = r#"{
        "_id": "64f1",
        "role": "Backend Dev",
        "company": "Acme",
        "startDate": "2022-03-01T00:00:00.000Z",
        "endDate": null,
        "isCurrent": true,
        "tags": ["Rust", "NestJS"],
        "order": 1
    }"#;

    let entry: ExperienceEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.id, "64f1");
    assert!(entry.is_current);
    assert!(entry.end_date.is_none());
    assert_eq!(entry.tags, vec!["Rust", "NestJS"]);
    assert_eq!(entry.order, 1.0);
}
