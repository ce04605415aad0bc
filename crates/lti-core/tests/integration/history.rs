//! Removal history and meeting summaries across several meetings.

use lti_core::ids::default_system_names;
use lti_core::{MeetingSummary, RemovalReport};
use serde_json::json;

use crate::common::{TestHarness, meeting_from};

#[test]
fn test_report_combines_all_strategies() {
    let h = TestHarness::new();
    let meetings = vec![
        meeting_from(json!({
            "date": "2024-07-01",
            "responses": {
                "CAHE-789-001": {"riskLevel": "High", "comments": "Closed out by ops"},
                "CAHE-789-002": {"riskLevel": "Low"}
            }
        })),
        meeting_from(json!({
            "date": "2024-10-01",
            "removedIsolations": [{"id": "CAHE-303-001", "Risk Level": "Critical"}],
            "isolations": [{"id": "CAHE-303-002", "Title": "Steam trap"}],
            "responses": {"CAHE-303-002": {"isolationStatus": "Removed", "risk": "Medium"}}
        })),
        h.meeting(
            "2025-01-10",
            &[("CAHE-123-001", 400), ("CAHE-123-002", 400)],
            json!({"CAHE-123-001": {"actionRequired": "Monitor"}}),
        ),
    ];

    let report = RemovalReport::from_meetings(&meetings, &h.classifier, &default_system_names());

    assert_eq!(report.total_removed, 3);
    assert_eq!(report.total_isolations, 4);
    assert_eq!(report.removal_rate, 75);
    assert_eq!(report.removals_by_risk.critical, 1);
    assert_eq!(report.removals_by_risk.high, 1);
    assert_eq!(report.removals_by_risk.medium, 1);
    assert_eq!(report.removals_by_risk.low, 0);
    assert_eq!(report.removals_by_system["Steam System"], 2);
    assert_eq!(report.removals_by_system["Heat Exchange System"], 1);

    let dates: Vec<_> = report
        .recent_removals
        .iter()
        .map(|r| r.date.as_deref().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-10-01", "2024-10-01", "2024-07-01"]);
    assert_eq!(report.recent_removals[1].description, "Steam trap");
    assert_eq!(report.recent_removals[2].reason, "Closed out by ops");

    // CAHE-123-002 has no response, so only the 789 pair is grouped.
    assert_eq!(report.related_warnings.len(), 1);
    assert_eq!(report.related_warnings[0].isolation_id, "CAHE-789-001");
}

#[test]
fn test_custom_system_names() {
    let h = TestHarness::new();
    let meetings = vec![meeting_from(json!({
        "removedIsolations": [{"id": "CAHE-555-001"}, {"id": "CAHE-123-001"}]
    }))];
    let mut names = default_system_names();
    names.insert("555".to_string(), "Flare System".to_string());

    let report = RemovalReport::from_meetings(&meetings, &h.classifier, &names);
    assert_eq!(report.removals_by_system["Flare System"], 1);
    assert_eq!(report.removals_by_system["Pump System"], 1);
}

#[test]
fn test_meeting_summary_folds_high_into_critical() {
    let h = TestHarness::new();
    let meeting = h.meeting(
        "2025-01-10",
        &[("CAHE-202-001", 30), ("CAHE-202-002", 30), ("CAHE-101-001", 30)],
        json!({
            "CAHE-202-001": {"riskLevel": "Critical"},
            "CAHE-202-002": {"riskLevel": "High",
                             "actionItems": [{"description": "Rewire panel", "owner": "Electrical"}]},
            "CAHE-101-001": {"riskLevel": "Medium"}
        }),
    );

    let summary = MeetingSummary::from_meeting(&meeting, &h.classifier);
    assert_eq!(summary.total_isolations_reviewed, 3);
    assert_eq!(summary.critical_findings, 2);
    assert_eq!(summary.action_items_generated, 1);
    assert_eq!(summary.risk_distribution.medium.percentage, 33);
    assert_eq!(summary.related_warnings.len(), 2);

    let json = serde_json::to_value(&summary).unwrap();
    assert!(json.get("relatedIsolationWarnings").is_some());
}
