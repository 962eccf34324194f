//! Dashboard aggregation over independently loaded lists.

mod summary;

pub use summary::{DashboardSummary, RECENT_MESSAGES_LIMIT};
