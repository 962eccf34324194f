use chrono::{TimeZone, Utc};

use super::{filter_messages, Message, MessageCounts};
use crate::domain::message::{MessageStatus, StatusFilter};

fn message(id: &str, name: &str, status: MessageStatus, day: u32) -> Message {
    let at = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
    Message {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        message: format!("Hola, soy {}", name),
        status,
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn filters_by_status() {
    let messages = vec![
        message("1", "Ana", MessageStatus::New, 1),
        message("2", "Beto", MessageStatus::Read, 2),
    ];

    let rows = filter_messages(&messages, "", StatusFilter::Only(MessageStatus::New));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "1");
}

#[test]
fn query_matches_name_email_and_body_case_insensitively() {
    let messages = vec![
        message("1", "Ana", MessageStatus::New, 1),
        message("2", "Beto", MessageStatus::New, 2),
    ];

    assert_eq!(filter_messages(&messages, "ANA", StatusFilter::All).len(), 1);
    assert_eq!(filter_messages(&messages, "beto@example", StatusFilter::All).len(), 1);
    assert_eq!(filter_messages(&messages, "soy Ana", StatusFilter::All).len(), 1);
    assert!(filter_messages(&messages, "nadie", StatusFilter::All).is_empty());
}

#[test]
fn results_sort_newest_first() {
    let messages = vec![
        message("old", "Ana", MessageStatus::New, 1),
        message("new", "Beto", MessageStatus::New, 20),
        message("mid", "Carla", MessageStatus::New, 10),
    ];

    let rows = filter_messages(&messages, "", StatusFilter::All);
    let ids: Vec<&str> = rows.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn blank_query_matches_all() {
    let messages = vec![message("1", "Ana", MessageStatus::New, 1)];
    assert_eq!(filter_messages(&messages, "   ", StatusFilter::All).len(), 1);
}

#[test]
fn counts_tally_by_status() {
    let messages = vec![
        message("1", "Ana", MessageStatus::New, 1),
        message("2", "Beto", MessageStatus::New, 2),
        message("3", "Carla", MessageStatus::Read, 3),
        message("4", "Dani", MessageStatus::Archived, 4),
    ];

    let counts = MessageCounts::tally(&messages);
    assert_eq!(counts.total, 4);
    assert_eq!(counts.new, 2);
    assert_eq!(counts.read, 1);
    assert_eq!(counts.archived, 1);
}

#[test]
fn detail_capabilities_depend_on_status() {
    let new = message("1", "Ana", MessageStatus::New, 1);
    assert!(new.can_mark_read());
    assert!(new.can_archive());

    let read = message("2", "Beto", MessageStatus::Read, 2);
    assert!(!read.can_mark_read());
    assert!(read.can_archive());

    let archived = message("3", "Carla", MessageStatus::Archived, 3);
    assert!(archived.can_mark_read());
    assert!(!archived.can_archive());
}

#[test]
fn message_deserializes_backend_shape() {
    let json = r#"{
        "_id": "64f2",
        "name": "Ana",
        "email": "ana@example.com",
        "message": "Hola",
        "status": "new",
        "createdAt": "2024-01-05T10:00:00.000Z",
        "updatedAt": "2024-01-05T10:00:00.000Z"
    }"#;

    let message: Message = serde_json::from_str(json).unwrap();
    assert_eq!(message.id, "64f2");
    assert_eq!(message.status, MessageStatus::New);
}
