//! Message status and list filtering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a contact message.
///
/// There is no enforced transition graph: the backend accepts any status
/// change, and the admin UI only gates which buttons are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    New,
    Read,
    Archived,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Read => "read",
            MessageStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status filter for the message list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(MessageStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: MessageStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MessageStatus::New).unwrap(), "\"new\"");
        assert_eq!(
            serde_json::to_string(&MessageStatus::Archived).unwrap(),
            "\"archived\""
        );
    }

    #[test]
    fn status_round_trips() {
        let status: MessageStatus = serde_json::from_str("\"read\"").unwrap();
        assert_eq!(status, MessageStatus::Read);
    }

    #[test]
    fn filter_all_matches_everything() {
        assert!(StatusFilter::All.matches(MessageStatus::New));
        assert!(StatusFilter::All.matches(MessageStatus::Read));
        assert!(StatusFilter::All.matches(MessageStatus::Archived));
    }

    #[test]
    fn filter_only_matches_exactly() {
        let filter = StatusFilter::Only(MessageStatus::New);
        assert!(filter.matches(MessageStatus::New));
        assert!(!filter.matches(MessageStatus::Read));
    }
}
