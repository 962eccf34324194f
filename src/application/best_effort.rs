//! Best-effort operation category.
//!
//! Some side effects must never interrupt the action that triggered
//! them: the server half of logout, and the mark-as-read fired by merely
//! opening a message. Their failures are logged at debug level and
//! discarded. Routing them through this helper keeps the distinction
//! explicit at the call site instead of hidden in an empty catch.

use crate::ports::ApiError;

/// Runs an already-awaited result as best-effort: the failure is logged
/// and swallowed, the success value passed through.
pub fn best_effort<T>(operation: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(operation, error = %err, "best-effort operation failed");
            None
        }
    }
}
