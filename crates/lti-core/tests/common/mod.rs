//! Common test utilities and harness for LTI engine integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use lti_core::{Meeting, PrefixClassifier};
use serde_json::{Value, json};

/// Test harness pinned to a fixed "now".
///
/// Planned start dates are expressed as a number of days before `now`, so
/// expected ages stay stable regardless of when the suite runs.
pub struct TestHarness {
    /// Reference time for age classification.
    pub now: DateTime<Utc>,
    /// Id classifier for the default `CAHE` prefix.
    pub classifier: PrefixClassifier,
}

impl TestHarness {
    /// Creates a harness with `now` at 2025-01-10 00:00 UTC.
    pub fn new() -> Self {
        Self {
            now: Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap(),
            classifier: PrefixClassifier::default(),
        }
    }

    /// ISO date `days` before `now`.
    pub fn days_ago(&self, days: i64) -> String {
        (self.now - Duration::days(days)).format("%Y-%m-%d").to_string()
    }

    /// Builds a meeting from `(id, days_old)` isolations and a response map.
    pub fn meeting(&self, date: &str, isolations: &[(&str, i64)], responses: Value) -> Meeting {
        let isolations: Vec<Value> = isolations
            .iter()
            .map(|(id, days)| {
                json!({
                    "id": id,
                    "description": format!("Isolation {id}"),
                    "Planned Start Date": self.days_ago(*days),
                })
            })
            .collect();
        serde_json::from_value(json!({
            "date": date,
            "isolations": isolations,
            "responses": responses,
        }))
        .expect("test meeting should deserialize")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a meeting from JSON.
pub fn meeting_from(value: Value) -> Meeting {
    serde_json::from_value(value).expect("test meeting should deserialize")
}
