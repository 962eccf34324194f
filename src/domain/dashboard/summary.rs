//! The admin dashboard summary - pure derivation, no persistence.

use serde::Serialize;

use crate::domain::message::{Message, MessageCounts};
use crate::domain::project::Project;

/// How many recent messages the dashboard shows.
pub const RECENT_MESSAGES_LIMIT: usize = 5;

/// Aggregated view over the project and message lists.
///
/// Recomputed on every load; nothing here is cached between visits.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Number of admin-visible projects.
    pub project_count: usize,

    /// Message counters by status.
    pub message_counts: MessageCounts,

    /// Newest messages first, capped at [`RECENT_MESSAGES_LIMIT`].
    pub recent_messages: Vec<Message>,
}

impl DashboardSummary {
    /// Derives the summary from the two freshly loaded lists.
    pub fn derive(projects: &[Project], messages: &[Message]) -> Self {
        let mut recent: Vec<Message> = messages.to_vec();
        recent.sort_by_key(|m| std::cmp::Reverse(m.created_at));
        recent.truncate(RECENT_MESSAGES_LIMIT);

        Self {
            project_count: projects.len(),
            message_counts: MessageCounts::tally(messages),
            recent_messages: recent,
        }
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
