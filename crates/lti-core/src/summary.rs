//! Executive summary for a single meeting.

use serde::{Deserialize, Serialize};

use crate::ids::IdClassifier;
use crate::related::{RelatedWarning, related_warnings};
use crate::types::{Meeting, RiskLevel};

/// Count and share of responses at one risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskShare {
    /// Responses at this level.
    pub count: usize,
    /// Rounded percentage of all responses.
    pub percentage: u32,
}

/// Risk breakdown across a meeting's responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    /// `Critical` responses.
    pub critical: RiskShare,
    /// `High` responses.
    pub high: RiskShare,
    /// `Medium` responses.
    pub medium: RiskShare,
    /// `Low` responses.
    pub low: RiskShare,
}

/// Headline figures for one meeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    /// When the meeting was held.
    pub meeting_date: Option<String>,
    /// The larger of the isolation count and the response count.
    pub total_isolations_reviewed: usize,
    /// Responses rated `Critical` or `High`.
    pub critical_findings: usize,
    /// Action items across all responses.
    pub action_items_generated: usize,
    /// Per-level counts.
    pub risk_distribution: RiskDistribution,
    /// Isolations sharing a system code with others.
    #[serde(rename = "relatedIsolationWarnings")]
    pub related_warnings: Vec<RelatedWarning>,
}

impl MeetingSummary {
    /// Summarizes a meeting. Without a response map every count is zero.
    pub fn from_meeting<C>(meeting: &Meeting, classifier: &C) -> Self
    where
        C: IdClassifier + ?Sized,
    {
        let mut summary = Self {
            meeting_date: meeting.date.clone(),
            ..Self::default()
        };

        let Some(responses) = meeting.responses.as_ref() else {
            tracing::debug!(date = ?meeting.date, "meeting has no responses to summarize");
            return summary;
        };
        let isolations = meeting.isolations.as_deref().unwrap_or_default();

        summary.total_isolations_reviewed = isolations.len().max(responses.len());

        let mut counts = [0usize; 4];
        for response in responses.values() {
            summary.action_items_generated += response.action_item_count();
            let risk = RiskLevel::from(response.effective_risk().unwrap_or_default());
            let slot = match risk {
                RiskLevel::Critical => 0,
                RiskLevel::High => 1,
                RiskLevel::Medium => 2,
                RiskLevel::Low => 3,
                _ => continue,
            };
            counts[slot] += 1;
        }

        summary.critical_findings = counts[0] + counts[1];
        let share = |count: usize| RiskShare {
            count,
            percentage: percentage(count, responses.len()),
        };
        summary.risk_distribution = RiskDistribution {
            critical: share(counts[0]),
            high: share(counts[1]),
            medium: share(counts[2]),
            low: share(counts[3]),
        };

        summary.related_warnings = related_warnings(classifier, isolations);
        summary
    }
}

/// Rounded `part / whole` as a percentage, half away from zero. Zero when
/// `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part * 200 + whole) / (whole * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
