//! Removed-isolation history across meetings.
//!
//! A removal is found three ways. Entries in a meeting's
//! `removedIsolations` list always count. Meetings with both isolations
//! and responses count each isolation whose response [`is_completed`].
//! Legacy meetings with responses only are read the same way, keyed by the
//! response map.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::age::parse_date;
use crate::completion::is_completed;
use crate::ids::{IdClassifier, system_name};
use crate::related::{IsolationRef, RelatedWarning, grouped_related_warnings};
use crate::summary::percentage;
use crate::types::{Meeting, NO_DESCRIPTION, ResponseRecord, RiskLevel, first_present};

/// Risk assumed when a removal carries none.
pub const DEFAULT_REMOVAL_RISK: &str = "Medium";

const EXPLICIT_REASON: &str = "Explicitly removed from meeting";
const COMPLETED_REASON: &str = "Marked as completed in meeting";
const LEGACY_COMPLETED_REASON: &str = "Marked as completed";

/// One isolation taken off the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    /// Isolation id.
    pub id: String,
    /// Display description.
    pub description: String,
    /// Date of the meeting that recorded the removal.
    pub date: Option<String>,
    /// Risk level as recorded.
    pub risk: String,
    /// Plant system name.
    pub system: String,
    /// Why it counts as removed.
    pub reason: String,
}

/// Removal counts per risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RiskCounts {
    /// `Critical` removals.
    pub critical: usize,
    /// `High` removals.
    pub high: usize,
    /// `Medium` removals.
    pub medium: usize,
    /// `Low`, `N/A` and unrecognised removals.
    pub low: usize,
}

impl RiskCounts {
    fn record(&mut self, risk: &str) {
        match RiskLevel::from(risk) {
            RiskLevel::Critical => self.critical += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            _ => self.low += 1,
        }
    }
}

/// Historical removal statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalReport {
    /// Removals found by any strategy.
    #[serde(rename = "totalLTIRemoved")]
    pub total_removed: usize,
    /// Isolations that had a response, across all meetings.
    pub total_isolations: usize,
    /// `total_removed` over `total_isolations`, rounded percent.
    pub removal_rate: u32,
    /// Removals per risk level.
    pub removals_by_risk: RiskCounts,
    /// Removals per plant system.
    pub removals_by_system: BTreeMap<String, usize>,
    /// Every removal, newest meeting first.
    pub recent_removals: Vec<Removal>,
    /// One warning per group of related isolations.
    pub related_warnings: Vec<RelatedWarning>,
}

/// An isolation seen with a response, kept for related-id grouping.
#[derive(Debug, Clone)]
struct Considered {
    id: String,
    description: String,
}

impl IsolationRef for Considered {
    fn isolation_id(&self) -> &str {
        &self.id
    }

    fn isolation_description(&self) -> &str {
        &self.description
    }
}

impl RemovalReport {
    /// Builds the report from meetings in store order.
    pub fn from_meetings<C>(
        meetings: &[Meeting],
        classifier: &C,
        system_names: &BTreeMap<String, String>,
    ) -> Self
    where
        C: IdClassifier + ?Sized,
    {
        let mut removals = Vec::new();
        let mut considered = Vec::new();
        let system = |id: &str| system_name(classifier, Some(id), system_names);

        for meeting in meetings {
            for entry in meeting.removed_isolations.iter().flatten() {
                let id = Some(entry.id.as_str())
                    .filter(|id| !id.is_empty())
                    .or_else(|| first_present([&entry.title]));
                removals.push(Removal {
                    system: system_name(classifier, id, system_names),
                    id: id.unwrap_or_default().to_string(),
                    description: first_present([&entry.description, &entry.title])
                        .unwrap_or(NO_DESCRIPTION)
                        .to_string(),
                    date: meeting.date.clone(),
                    risk: entry.register_risk().unwrap_or(DEFAULT_REMOVAL_RISK).to_string(),
                    reason: EXPLICIT_REASON.to_string(),
                });
            }

            let Some(responses) = meeting.responses.as_ref() else {
                continue;
            };

            match meeting.isolations.as_ref() {
                Some(isolations) => {
                    for entry in isolations {
                        let Some(response) = responses.get(&entry.id) else {
                            continue;
                        };
                        let description = entry.display_description().to_string();
                        if is_completed(response) {
                            removals.push(completed(
                                &entry.id,
                                &description,
                                meeting,
                                response,
                                COMPLETED_REASON,
                                system(&entry.id),
                            ));
                        }
                        considered.push(Considered {
                            id: entry.id.clone(),
                            description,
                        });
                    }
                }
                None => {
                    tracing::debug!(date = ?meeting.date, "reading legacy meeting from responses");
                    for (id, response) in responses {
                        let description = first_present([&response.description])
                            .unwrap_or(id.as_str())
                            .to_string();
                        if is_completed(response) {
                            removals.push(completed(
                                id,
                                &description,
                                meeting,
                                response,
                                LEGACY_COMPLETED_REASON,
                                system(id),
                            ));
                        }
                        considered.push(Considered {
                            id: id.clone(),
                            description,
                        });
                    }
                }
            }
        }

        let mut removals_by_risk = RiskCounts::default();
        let mut removals_by_system = BTreeMap::new();
        for removal in &removals {
            removals_by_risk.record(&removal.risk);
            *removals_by_system.entry(removal.system.clone()).or_insert(0) += 1;
        }

        // Stable: removals from the same date keep their discovery order.
        removals.sort_by_key(|r| Reverse(r.date.as_deref().and_then(parse_date)));

        let report = Self {
            total_removed: removals.len(),
            total_isolations: considered.len(),
            removal_rate: percentage(removals.len(), considered.len()),
            removals_by_risk,
            removals_by_system,
            recent_removals: removals,
            related_warnings: grouped_related_warnings(classifier, &considered),
        };

        tracing::debug!(
            removed = report.total_removed,
            considered = report.total_isolations,
            "built removal report"
        );
        report
    }
}

fn completed(
    id: &str,
    description: &str,
    meeting: &Meeting,
    response: &ResponseRecord,
    default_reason: &str,
    system: String,
) -> Removal {
    let risk = response
        .effective_risk()
        .unwrap_or(DEFAULT_REMOVAL_RISK)
        .to_string();
    Removal {
        id: id.to_string(),
        description: description.to_string(),
        date: meeting.date.clone(),
        risk,
        system,
        reason: first_present([&response.comments])
            .unwrap_or(default_reason)
            .to_string(),
    }
}
