//! Lookup of an isolation's most recent earlier review.
//!
//! When a reviewer opens an isolation, the last recorded answers for it are
//! shown, but only if they say something. A response where every field is
//! still `N/A` and nothing was written is not worth surfacing.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::store::StoreSnapshot;
use crate::types::{Meeting, NOT_ASSESSED, ResponseRecord};

/// Date and name used when the source meeting recorded none.
pub const PREVIOUS_MEETING: &str = "Previous Meeting";

const COMMENT_FIELDS: &[&str] = &[
    "riskLevelComment",
    "mocRequiredComment",
    "actionRequiredComment",
    "corrosionRiskComment",
    "deadLegsRiskComment",
    "automationLossRiskComment",
];

/// A response found in an earlier meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousReview {
    /// Date of the meeting, or [`PREVIOUS_MEETING`].
    pub meeting_date: String,
    /// Name of the meeting, or [`PREVIOUS_MEETING`].
    pub meeting_name: String,
    /// The answers recorded there.
    pub response: ResponseRecord,
}

impl PreviousReview {
    fn from_meeting(meeting: &Meeting, response: &ResponseRecord) -> Self {
        let label = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(PREVIOUS_MEETING)
                .to_string()
        };
        Self {
            meeting_date: label(&meeting.date),
            meeting_name: label(&meeting.name),
            response: response.clone(),
        }
    }
}

/// Returns the first meeting's response for `isolation_id`, in iteration
/// order.
pub fn find_previous_review<'a, I>(meetings: I, isolation_id: &str) -> Option<PreviousReview>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    meetings.into_iter().find_map(|meeting| {
        meeting
            .response(isolation_id)
            .map(|response| PreviousReview::from_meeting(meeting, response))
    })
}

/// Looks up a previous review in a store snapshot.
///
/// Searches saved meetings, then archived meetings, then the standalone
/// previous-responses map. Store errors propagate.
pub fn find_in_store(snapshot: &StoreSnapshot, isolation_id: &str) -> Result<Option<PreviousReview>> {
    let saved = snapshot.saved_meetings()?;
    if let Some(found) = find_previous_review(&saved, isolation_id) {
        return Ok(Some(found));
    }

    let past = snapshot.past_meetings()?;
    if let Some(found) = find_previous_review(&past, isolation_id) {
        return Ok(Some(found));
    }

    Ok(snapshot
        .previous_responses()?
        .remove(isolation_id)
        .map(|response| PreviousReview {
            meeting_date: PREVIOUS_MEETING.to_string(),
            meeting_name: PREVIOUS_MEETING.to_string(),
            response,
        }))
}

/// Returns `true` if the response records anything beyond defaults.
pub fn is_meaningful(response: &ResponseRecord) -> bool {
    let assessed = |value: Option<&str>| value.is_some_and(|v| !v.is_empty() && v != NOT_ASSESSED);
    let written = |value: Option<&str>| value.is_some_and(|v| !v.trim().is_empty());

    let key_values = [
        response.risk_level.as_deref(),
        response.moc_required.as_deref(),
        response.action_required.as_deref(),
        response.corrosion_risk.as_deref(),
        response.dead_legs_risk.as_deref(),
        response.automation_loss_risk.as_deref(),
    ];
    if key_values.into_iter().any(assessed) {
        return true;
    }

    if written(response.comments.as_deref())
        || COMMENT_FIELDS
            .iter()
            .any(|field| written(response.extra_field(field).as_deref()))
    {
        return true;
    }

    response.action_item_count() > 0
}

/// The review to show for `isolation_id`: found and meaningful.
pub fn notable_previous_review<'a, I>(meetings: I, isolation_id: &str) -> Option<PreviousReview>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    find_previous_review(meetings, isolation_id).filter(|review| is_meaningful(&review.response))
}
