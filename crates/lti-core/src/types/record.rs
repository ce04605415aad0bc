//! The flattened per-isolation record consumed by every report.

use serde::{Deserialize, Serialize};

use crate::age::AgeInfo;
use crate::types::{ActionItem, ActionRequired, Answer, MocStatus, RiskLevel};

/// Parts status shown when nothing has been recorded.
pub const PARTS_NOT_ASSESSED: &str = "Not Assessed";

/// One isolation joined with its response and age, with every field
/// defaulted.
///
/// Built once by [`normalize`](crate::normalize) and never persisted. Free
/// text fields default to `""`, enumerated fields to `N/A`, lists to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Isolation id.
    pub id: String,
    /// Description, title or `No description`.
    pub description: String,
    /// Planned start date as stored, if any.
    pub planned_start_date: Option<String>,
    /// Age derived from the planned start date.
    pub age_info: AgeInfo,
    /// Date of the meeting the record came from.
    pub meeting_date: Option<String>,

    /// Overall risk level.
    pub risk_level: RiskLevel,
    /// Business impact rating, verbatim.
    pub business_impact: String,

    /// Whether a Management of Change is required.
    pub moc_required: Answer,
    /// MOC reference number.
    pub moc_number: String,
    /// MOC progress.
    pub moc_status: MocStatus,

    /// Whether parts are needed.
    pub parts_required: Answer,
    /// Parts expected date.
    pub parts_expected_date: String,
    /// Parts procurement status, `Not Assessed` by default.
    pub parts_status: String,

    /// Whether equipment must be disconnected.
    pub equipment_disconnection_required: Answer,
    /// Whether equipment must be removed.
    pub equipment_removal_required: Answer,
    /// Target resolution date.
    pub planned_resolution_date: String,

    /// Follow-up urgency.
    pub action_required: ActionRequired,
    /// Agreed actions.
    pub action_items: Vec<ActionItem>,
    /// Free-text comments.
    pub comments: String,

    /// WMS manual: corrosion risk.
    pub corrosion_risk: RiskLevel,
    /// WMS manual: dead legs risk.
    pub dead_legs_risk: RiskLevel,
    /// WMS manual: loss of automation risk.
    pub automation_loss_risk: RiskLevel,
}

impl CanonicalRecord {
    /// Returns `true` if either equipment question was answered `Yes`.
    pub fn has_equipment_issue(&self) -> bool {
        self.equipment_disconnection_required.is_yes() || self.equipment_removal_required.is_yes()
    }

    /// Returns `true` when a MOC is required and is moving.
    pub fn moc_in_progress(&self) -> bool {
        self.moc_required.is_yes() && self.moc_status.is_active()
    }
}
