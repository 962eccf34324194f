//! Contact message domain: statuses, list filtering, and the public form.

mod contact;
mod inbox;
mod status;

pub use contact::{ContactDraft, ContactPayload};
pub use inbox::{filter_messages, Message, MessageCounts};
pub use status::{MessageStatus, StatusFilter};
