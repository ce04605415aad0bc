//! Previous-review lookup through a store snapshot.

use lti_core::review::{PREVIOUS_MEETING, find_in_store, notable_previous_review};
use lti_core::{StoreSnapshot, is_meaningful};
use serde_json::json;

use crate::common::meeting_from;

fn snapshot() -> StoreSnapshot {
    StoreSnapshot::from_value(json!({
        "savedMeetings": [
            {"date": "2025-01-10", "name": "January review", "responses": {
                "CAHE-123-001": {"riskLevel": "N/A", "mocRequired": "N/A"}
            }}
        ],
        "pastMeetings": [
            {"date": "2024-07-01", "responses": {
                "CAHE-123-001": {"riskLevel": "High", "comments": "Valve passing"},
                "CAHE-456-001": {"corrosionRiskComment": "Pitting on flange"}
            }}
        ],
        "previousMeetingResponses": {
            "CAHE-789-001": {"actionItems": [{"description": "Order gasket", "owner": "Stores"}]}
        }
    }))
    .unwrap()
}

#[test]
fn test_most_recent_review_wins_even_when_empty() {
    let review = find_in_store(&snapshot(), "CAHE-123-001").unwrap().unwrap();
    assert_eq!(review.meeting_name, "January review");
    assert!(!is_meaningful(&review.response));
}

#[test]
fn test_archived_meeting_comment_is_meaningful() {
    let review = find_in_store(&snapshot(), "CAHE-456-001").unwrap().unwrap();
    assert_eq!(review.meeting_date, "2024-07-01");
    assert_eq!(review.meeting_name, PREVIOUS_MEETING);
    assert!(is_meaningful(&review.response));
}

#[test]
fn test_previous_responses_map_is_last_resort() {
    let review = find_in_store(&snapshot(), "CAHE-789-001").unwrap().unwrap();
    assert_eq!(review.meeting_date, PREVIOUS_MEETING);
    assert!(is_meaningful(&review.response));
    assert!(find_in_store(&snapshot(), "CAHE-000-000").unwrap().is_none());
}

#[test]
fn test_notable_review_over_meeting_list() {
    let meetings = vec![
        meeting_from(json!({"responses": {"A": {"riskLevel": "Low"}}})),
        meeting_from(json!({"responses": {"B": {"comments": "  "}}})),
    ];
    assert!(notable_previous_review(&meetings, "A").is_some());
    assert!(notable_previous_review(&meetings, "B").is_none());
}
