//! Dashboard built straight from a browser store export.

use lti_core::{Agenda, Error, MeetingSource, StoreSnapshot, aggregate, normalize_all};
use serde_json::json;

use crate::common::TestHarness;

#[test]
fn test_dashboard_from_snapshot() {
    let h = TestHarness::new();
    let past = h.meeting(
        "2024-07-01",
        &[("CAHE-123-001", 400)],
        json!({"CAHE-123-001": {"riskLevel": "Critical", "equipmentDisconnectionRequired": "Yes"}}),
    );
    let saved = h.meeting(
        "2025-01-10",
        &[("CAHE-456-001", 20)],
        json!({"CAHE-456-001": {"actionRequired": "Urgent"}}),
    );
    let export = json!({
        "pastMeetings": [past],
        // Browser storage holds strings, so exports often nest JSON text.
        "savedMeetings": serde_json::to_string(&vec![saved]).unwrap(),
        "theme": "dark"
    });

    let snapshot = StoreSnapshot::from_json(&export.to_string()).unwrap();
    let meetings = snapshot.meetings().unwrap();
    assert_eq!(meetings.len(), 2);

    let stats = aggregate(&normalize_all(&meetings, h.now));
    assert_eq!(stats.total_ltis, 2);
    assert_eq!(stats.critical_risk, 1);
    assert_eq!(stats.equipment_issues, 1);
    assert_eq!(stats.urgent_action, 1);
    assert_eq!(stats.six_months_plus_ltis[0].age_info.display, "1 year 1 months");

    let agenda = Agenda::from_stats(&stats, "2025-01-10").to_string();
    assert!(agenda.contains("CAHE-123-001: 1 year 1 months old, Critical risk"));
    assert!(agenda.contains("Equipment Issues: Disconnect"));
    assert!(agenda.contains("Urgent Actions: 1 LTIs"));
}

#[test]
fn test_corrupt_key_reports_store_error() {
    let snapshot = StoreSnapshot::from_value(json!({"savedMeetings": "{not json"})).unwrap();
    match snapshot.meetings() {
        Err(Error::Store { key, .. }) => assert_eq!(key, "savedMeetings"),
        other => panic!("expected a store error, got {other:?}"),
    }
}

#[test]
fn test_dirty_entries_do_not_block_dashboard() {
    let h = TestHarness::new();
    let good = h.meeting(
        "2025-01-10",
        &[("CAHE-123-001", 200)],
        json!({"CAHE-123-001": {"riskLevel": "High"}}),
    );
    let export = json!({
        "savedMeetings": [
            serde_json::to_value(&good).unwrap(),
            null,
            {
                "date": "2024-10-01",
                "isolations": [{"id": "CAHE-123-002"}],
                "responses": {"CAHE-123-002": null}
            },
            {"date": "2024-07-01", "isolations": [{"id": "CAHE-123-003"}], "responses": []}
        ]
    });

    let snapshot = StoreSnapshot::from_value(export).unwrap();
    let meetings = snapshot.meetings().unwrap();
    let stats = aggregate(&normalize_all(&meetings, h.now));
    // The null response reads as an unanswered isolation; the array-shaped
    // responses leave that meeting without records.
    assert_eq!(stats.total_ltis, 2);
    assert_eq!(stats.high_risk, 1);
    assert_eq!(stats.six_months_plus, 1);
}
