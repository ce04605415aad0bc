//! End-to-end dashboard scenarios.

use lti_core::{
    ActionRequired, Answer, MocStatus, RiskLevel, aggregate, normalize, normalize_all,
    normalize_with_diagnostics, related_warnings,
};
use serde_json::json;

use crate::common::{TestHarness, meeting_from};

#[test]
fn test_single_old_high_risk_isolation() {
    let h = TestHarness::new();
    let meeting = h.meeting(
        "2025-01-10",
        &[("A-123-001", 200)],
        json!({
            "A-123-001": {"riskLevel": "High", "mocRequired": "Yes", "mocStatus": "Submitted"}
        }),
    );

    let records = normalize(&meeting, h.now);
    let stats = aggregate(&records);

    assert_eq!(stats.total_ltis, 1);
    assert_eq!(stats.six_months_plus, 1);
    assert_eq!(stats.high_risk, 1);
    assert_eq!(stats.critical_risk, 0);
    assert_eq!(stats.moc_required, 1);
    assert_eq!(stats.moc_in_progress, 1);
    assert_eq!(stats.equipment_issues, 0);
    assert_eq!(stats.urgent_action, 0);
    assert_eq!(stats.six_months_plus_ltis[0].age_info.display, "6 months");
}

#[test]
fn test_isolation_without_response_gets_defaults() {
    let h = TestHarness::new();
    let meeting = h.meeting("2025-01-10", &[("CAHE-123-001", 10)], json!({}));

    let records = normalize(&meeting, h.now);
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.risk_level, RiskLevel::NotAssessed);
    assert_eq!(r.moc_required, Answer::NotAssessed);
    assert_eq!(r.moc_status, MocStatus::NotAssessed);
    assert_eq!(r.action_required, ActionRequired::NotAssessed);
    assert_eq!(r.parts_status, "Not Assessed");
    assert_eq!(r.business_impact, "N/A");
    assert!(r.action_items.is_empty());
    assert_eq!(r.age_info.display, "10 days");
}

#[test]
fn test_legacy_and_partial_meetings_are_skipped() {
    let h = TestHarness::new();
    let meetings = vec![
        meeting_from(json!({"date": "2024-07-01", "responses": {"CAHE-123-001": {}}})),
        meeting_from(json!({"date": "2024-10-01", "isolations": [{"id": "CAHE-123-001"}]})),
        h.meeting("2025-01-10", &[("CAHE-123-001", 300)], json!({})),
    ];

    let normalized = normalize_with_diagnostics(&meetings, h.now);
    assert_eq!(normalized.records.len(), 1);
    assert_eq!(normalized.diagnostics.meetings, 3);
    assert_eq!(normalized.diagnostics.incomplete_meetings, 2);
    assert_eq!(normalized.diagnostics.missing_responses, 1);
}

#[test]
fn test_same_id_in_two_meetings_counts_twice() {
    let h = TestHarness::new();
    let meetings = vec![
        h.meeting("2024-07-01", &[("CAHE-123-001", 250)], json!({})),
        h.meeting("2025-01-10", &[("CAHE-123-001", 250)], json!({})),
    ];
    let stats = aggregate(&normalize_all(&meetings, h.now));
    assert_eq!(stats.total_ltis, 2);
    assert_eq!(stats.six_months_plus, 2);
}

#[test]
fn test_degraded_dates_and_dangling_responses() {
    let h = TestHarness::new();
    let meeting = meeting_from(json!({
        "date": "2025-01-10",
        "isolations": [
            {"id": "CAHE-123-001"},
            {"id": "CAHE-123-002", "plannedStartDate": "next spring"},
            {"id": "CAHE-123-003", "PlannedStartDate": "2024-01-01"}
        ],
        "responses": {
            "CAHE-123-003": {"riskLevel": "Critical", "actionRequired": "Urgent"},
            "CAHE-999-999": {"riskLevel": "High"}
        }
    }));

    let normalized = normalize_with_diagnostics([&meeting], h.now);
    let d = normalized.diagnostics;
    assert_eq!(d.records, 3);
    assert_eq!(d.unknown_dates, 1);
    assert_eq!(d.invalid_dates, 1);
    assert_eq!(d.degraded_records(), 2);
    assert_eq!(d.dangling_responses, 1);

    let stats = aggregate(&normalized.records);
    assert_eq!(stats.six_months_plus, 1);
    assert_eq!(stats.critical_risk, 1);
    assert_eq!(stats.high_risk, 0);
    assert_eq!(stats.urgent_ltis[0].id, "CAHE-123-003");
    assert_eq!(normalized.records[0].age_info.display, "Unknown");
    assert_eq!(normalized.records[1].age_info.display, "Invalid Date");
}

#[test]
fn test_exact_threshold_boundary() {
    let h = TestHarness::new();
    let meeting = h.meeting(
        "2025-01-10",
        &[("CAHE-101-001", 182), ("CAHE-101-002", 183)],
        json!({}),
    );
    let records = normalize(&meeting, h.now);
    assert!(!records[0].age_info.is_six_months_plus);
    assert!(records[1].age_info.is_six_months_plus);
}

#[test]
fn test_related_warnings_over_records() {
    let h = TestHarness::new();
    let meeting = h.meeting(
        "2025-01-10",
        &[("CAHE-123-001", 10), ("CAHE-123-002", 10), ("CAHE-456-001", 10)],
        json!({}),
    );
    let records = normalize(&meeting, h.now);
    let warnings = related_warnings(&h.classifier, &records);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].related_ids, vec!["CAHE-123-002"]);
    assert_eq!(warnings[1].related_ids, vec!["CAHE-123-001"]);
    assert_eq!(warnings[0].related_descriptions, vec!["Isolation CAHE-123-002"]);
}
