//! Completion heuristics for historical reporting.
//!
//! Decides whether a response means the isolation has been removed. The
//! free-text check is a plain substring match, so a comment such as "not yet
//! resolved" counts as completed. Callers reporting history accept that.

use crate::types::ResponseRecord;

/// Comment keywords that mark an isolation as done (matched lowercase).
pub const COMPLETION_KEYWORDS: &[&str] = &["completed", "removed", "resolved", "closed"];

/// Returns `true` if the response marks its isolation as completed or
/// removed.
///
/// Any one of these is enough:
///
/// - `status` is `Completed`
/// - `isolationStatus` is `Removed` or `Completed`
/// - `actionRequired` contains `complete`, ignoring case
/// - `comments` contains one of [`COMPLETION_KEYWORDS`], ignoring case
pub fn is_completed(response: &ResponseRecord) -> bool {
    if response.status.as_deref() == Some("Completed") {
        return true;
    }

    if matches!(
        response.isolation_status.as_deref(),
        Some("Removed" | "Completed")
    ) {
        return true;
    }

    if response
        .action_required
        .as_deref()
        .is_some_and(|action| action.to_lowercase().contains("complete"))
    {
        return true;
    }

    response.comments.as_deref().is_some_and(|comments| {
        let comments = comments.to_lowercase();
        COMPLETION_KEYWORDS
            .iter()
            .any(|keyword| comments.contains(keyword))
    })
}
