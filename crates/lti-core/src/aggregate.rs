//! Dashboard statistics over canonical records.
//!
//! The buckets are independent filters: a record can land in several, and
//! `Critical` and `High` are disjoint (High is not folded into Critical
//! here). Record lists are kept for the buckets the dashboard renders as
//! tables.

use serde::{Deserialize, Serialize};

use crate::types::{CanonicalRecord, RiskLevel};

/// Counters and record lists shown on the Asset Manager dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of records.
    #[serde(rename = "totalLTIs")]
    pub total_ltis: usize,
    /// Records at least six months old.
    pub six_months_plus: usize,
    /// Records rated `Critical`.
    pub critical_risk: usize,
    /// Records rated `High`.
    pub high_risk: usize,
    /// Records requiring a MOC.
    pub moc_required: usize,
    /// Records requiring a MOC that is submitted, approved or in progress.
    pub moc_in_progress: usize,
    /// Records needing equipment disconnection or removal.
    pub equipment_issues: usize,
    /// Records flagged for urgent action.
    pub urgent_action: usize,

    /// The six-months-plus records, in input order.
    #[serde(rename = "sixMonthsPlusLTIs")]
    pub six_months_plus_ltis: Vec<CanonicalRecord>,
    /// The critical records, in input order.
    #[serde(rename = "criticalLTIs")]
    pub critical_ltis: Vec<CanonicalRecord>,
    /// The urgent records, in input order.
    #[serde(rename = "urgentLTIs")]
    pub urgent_ltis: Vec<CanonicalRecord>,
}

/// Computes dashboard statistics. An empty input gives all-zero stats.
pub fn aggregate(records: &[CanonicalRecord]) -> DashboardStats {
    let six_months_plus_ltis = collect(records, |r| r.age_info.is_six_months_plus);
    let critical_ltis = collect(records, |r| r.risk_level == RiskLevel::Critical);
    let urgent_ltis = collect(records, |r| r.action_required.is_urgent());

    let stats = DashboardStats {
        total_ltis: records.len(),
        six_months_plus: six_months_plus_ltis.len(),
        critical_risk: critical_ltis.len(),
        high_risk: count(records, |r| r.risk_level == RiskLevel::High),
        moc_required: count(records, |r| r.moc_required.is_yes()),
        moc_in_progress: count(records, CanonicalRecord::moc_in_progress),
        equipment_issues: count(records, CanonicalRecord::has_equipment_issue),
        urgent_action: urgent_ltis.len(),
        six_months_plus_ltis,
        critical_ltis,
        urgent_ltis,
    };

    tracing::debug!(
        total = stats.total_ltis,
        six_months_plus = stats.six_months_plus,
        critical = stats.critical_risk,
        urgent = stats.urgent_action,
        "aggregated dashboard stats"
    );
    stats
}

fn count<F>(records: &[CanonicalRecord], predicate: F) -> usize
where
    F: Fn(&CanonicalRecord) -> bool,
{
    records.iter().filter(|&r| predicate(r)).count()
}

fn collect<F>(records: &[CanonicalRecord], predicate: F) -> Vec<CanonicalRecord>
where
    F: Fn(&CanonicalRecord) -> bool,
{
    records.iter().filter(|&r| predicate(r)).cloned().collect()
}
