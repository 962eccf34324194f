//! Contact messages submitted through the public form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MessageStatus, StatusFilter};

/// A contact-form lead as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Backend-generated identifier.
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
    pub email: String,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Whether the detail view should offer "mark as read".
    pub fn can_mark_read(&self) -> bool {
        self.status != MessageStatus::Read
    }

    /// Whether the detail view should offer "archive".
    pub fn can_archive(&self) -> bool {
        self.status != MessageStatus::Archived
    }
}

/// Filters by status and free-text query, newest first.
///
/// The query matches case-insensitively against name, email, and body.
/// Pure: the input list is never mutated.
pub fn filter_messages<'a>(
    messages: &'a [Message],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a Message> {
    let query = query.trim().to_lowercase();

    let mut rows: Vec<&Message> = messages
        .iter()
        .filter(|m| status.matches(m.status))
        .filter(|m| {
            if query.is_empty() {
                return true;
            }
            m.name.to_lowercase().contains(&query)
                || m.email.to_lowercase().contains(&query)
                || m.message.to_lowercase().contains(&query)
        })
        .collect();

    rows.sort_by_key(|m| std::cmp::Reverse(m.created_at));
    rows
}

/// Per-status counters shown above the message table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCounts {
    pub total: usize,
    pub new: usize,
    pub read: usize,
    pub archived: usize,
}

impl MessageCounts {
    pub fn tally(messages: &[Message]) -> Self {
        let mut counts = MessageCounts {
            total: messages.len(),
            ..Default::default()
        };
        for message in messages {
            match message.status {
                MessageStatus::New => counts.new += 1,
                MessageStatus::Read => counts.read += 1,
                MessageStatus::Archived => counts.archived += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;
