//! Stored meeting, isolation and response shapes.
//!
//! These mirror what the browser store holds, including its inconsistent
//! field names. Downstream code should not read them directly; the
//! normalizer flattens them into [`CanonicalRecord`](crate::CanonicalRecord)s.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::lenient;

/// Fallback description for isolations with no description or title.
pub const NO_DESCRIPTION: &str = "No description";

// ============================================================================
// Meeting
// ============================================================================

/// One review session: the isolations discussed and a response per isolation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Meeting identifier, if the store assigned one.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human name of the meeting.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Calendar date the meeting was held.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Isolations reviewed in this meeting. Absent in legacy meetings.
    #[serde(default, deserialize_with = "lenient::opt_list", skip_serializing_if = "Option::is_none")]
    pub isolations: Option<Vec<IsolationEntry>>,

    /// Responses keyed by isolation id.
    #[serde(default, deserialize_with = "lenient::opt_map", skip_serializing_if = "Option::is_none")]
    pub responses: Option<BTreeMap<String, ResponseRecord>>,

    /// Isolations explicitly taken off the list during the meeting.
    #[serde(default, deserialize_with = "lenient::opt_list", skip_serializing_if = "Option::is_none")]
    pub removed_isolations: Option<Vec<IsolationEntry>>,
}

impl Meeting {
    /// Looks up the response recorded for an isolation id.
    pub fn response(&self, isolation_id: &str) -> Option<&ResponseRecord> {
        self.responses.as_ref()?.get(isolation_id)
    }

    /// Returns `true` when both the isolation list and the response map are
    /// present, which is what the dashboard needs to produce records.
    pub fn is_complete(&self) -> bool {
        self.isolations.is_some() && self.responses.is_some()
    }
}

// ============================================================================
// IsolationEntry
// ============================================================================

/// A single isolation as imported into a meeting.
///
/// Upstream data entry spells the planned start date three ways, so all
/// three are kept and resolved by [`IsolationEntry::planned_start_date`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsolationEntry {
    /// Isolation id, normally `PREFIX-DDD-SUFFIX`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,

    /// Free-text description.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Title as exported by the isolation register.
    #[serde(rename = "Title", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Lowercase title spelling used by some imports.
    #[serde(rename = "title", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub title_lower: Option<String>,

    /// Planned start date as labelled by the isolation register.
    #[serde(rename = "Planned Start Date", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub planned_start_label: Option<String>,

    /// camelCase spelling of the planned start date.
    #[serde(rename = "plannedStartDate", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub planned_start_camel: Option<String>,

    /// PascalCase spelling of the planned start date.
    #[serde(rename = "PlannedStartDate", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub planned_start_pascal: Option<String>,

    /// Risk level as labelled by the isolation register.
    #[serde(rename = "Risk Level", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub risk_level_label: Option<String>,

    /// camelCase spelling of the register risk level.
    #[serde(rename = "riskLevel", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,

    /// Any other columns carried over from the register.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IsolationEntry {
    /// Creates an entry with only an id.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the planned start date using the register's labelled field.
    pub fn with_planned_start<S: Into<String>>(mut self, date: S) -> Self {
        self.planned_start_label = Some(date.into());
        self
    }

    /// Resolves the planned start date.
    ///
    /// Checks `Planned Start Date`, then `plannedStartDate`, then
    /// `PlannedStartDate`; the first non-empty value wins.
    pub fn planned_start_date(&self) -> Option<&str> {
        first_present([
            &self.planned_start_label,
            &self.planned_start_camel,
            &self.planned_start_pascal,
        ])
    }

    /// Resolves a display description: `description`, then `Title`, then
    /// `title`, then [`NO_DESCRIPTION`].
    pub fn display_description(&self) -> &str {
        first_present([&self.description, &self.title, &self.title_lower])
            .unwrap_or(NO_DESCRIPTION)
    }

    /// Register risk level: `Risk Level`, then `riskLevel`.
    pub fn register_risk(&self) -> Option<&str> {
        first_present([&self.risk_level_label, &self.risk_level])
    }
}

// ============================================================================
// ResponseRecord
// ============================================================================

/// One action agreed for an isolation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// What needs doing.
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,

    /// Who owns it.
    #[serde(default, deserialize_with = "lenient::string")]
    pub owner: String,
}

/// The answers recorded for one isolation in one meeting.
///
/// Every field is optional. Defaults are applied by the normalizer, not
/// here, so a record can be written back without inventing values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    /// Overall risk level.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,

    /// Legacy spelling of the risk level.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,

    /// Business impact rating.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub business_impact: Option<String>,

    /// Whether a Management of Change is required.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub moc_required: Option<String>,

    /// MOC reference number.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub moc_number: Option<String>,

    /// MOC progress.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub moc_status: Option<String>,

    /// Whether parts are needed to de-isolate.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub parts_required: Option<String>,

    /// Parts procurement status.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub parts_status: Option<String>,

    /// When parts are expected on site.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub parts_expected_date: Option<String>,

    /// Whether equipment must be disconnected.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub equipment_disconnection_required: Option<String>,

    /// Whether equipment must be removed.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub equipment_removal_required: Option<String>,

    /// Target date for resolving the isolation.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub planned_resolution_date: Option<String>,

    /// Follow-up urgency.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub action_required: Option<String>,

    /// Agreed actions.
    #[serde(default, deserialize_with = "lenient::opt_list", skip_serializing_if = "Option::is_none")]
    pub action_items: Option<Vec<ActionItem>>,

    /// Free-text comments.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    /// WMS manual: corrosion risk.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub corrosion_risk: Option<String>,

    /// WMS manual: dead legs risk.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub dead_legs_risk: Option<String>,

    /// WMS manual: loss of automation risk.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub automation_loss_risk: Option<String>,

    /// Explicit status, e.g. `Completed`.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Explicit isolation status, e.g. `Removed`.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub isolation_status: Option<String>,

    /// Description captured with legacy responses that had no isolation list.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Per-question comments and any fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResponseRecord {
    /// Risk level: `riskLevel`, then the legacy `risk` field.
    pub fn effective_risk(&self) -> Option<&str> {
        first_present([&self.risk_level, &self.risk])
    }

    /// Reads an unmodelled scalar field, such as `riskLevelComment`.
    pub fn extra_field(&self, name: &str) -> Option<String> {
        self.extra
            .get(name)
            .and_then(lenient::scalar_to_string)
            .filter(|value| !value.is_empty())
    }

    /// Number of action items recorded.
    pub fn action_item_count(&self) -> usize {
        self.action_items.as_ref().map_or(0, Vec::len)
    }
}

/// Returns the first value that is present and non-empty.
pub(crate) fn first_present<'a, const N: usize>(
    candidates: [&'a Option<String>; N],
) -> Option<&'a str> {
    candidates
        .into_iter()
        .filter_map(|candidate| candidate.as_deref())
        .find(|value| !value.is_empty())
}
