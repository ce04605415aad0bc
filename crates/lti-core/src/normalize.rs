//! Meeting flattening into canonical records.
//!
//! Each isolation in a meeting is joined with its response (or an empty
//! response) and an age classification to produce one
//! [`CanonicalRecord`]. Meetings missing either the isolation list or the
//! response map contribute nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::age::classify_age;
use crate::types::{
    CanonicalRecord, IsolationEntry, Meeting, PARTS_NOT_ASSESSED, ResponseRecord, RiskLevel,
};

/// Data-quality counters gathered while normalizing.
///
/// None of these stop normalization; they let callers report how much of
/// the input was degraded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeDiagnostics {
    /// Meetings seen.
    pub meetings: usize,
    /// Meetings skipped for lacking isolations or responses.
    pub incomplete_meetings: usize,
    /// Records produced.
    pub records: usize,
    /// Records whose isolation had no planned start date.
    pub unknown_dates: usize,
    /// Records whose planned start date did not parse.
    pub invalid_dates: usize,
    /// Isolations with no response, normalized from defaults.
    pub missing_responses: usize,
    /// Responses keyed by an id absent from the meeting's isolation list.
    pub dangling_responses: usize,
}

impl NormalizeDiagnostics {
    /// Records whose age fell back to a sentinel.
    pub fn degraded_records(&self) -> usize {
        self.unknown_dates + self.invalid_dates
    }
}

/// Records and diagnostics from normalizing a set of meetings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    /// Canonical records in meeting then isolation order.
    pub records: Vec<CanonicalRecord>,
    /// Data-quality counters.
    pub diagnostics: NormalizeDiagnostics,
}

/// Flattens one meeting into canonical records.
pub fn normalize(meeting: &Meeting, now: DateTime<Utc>) -> Vec<CanonicalRecord> {
    let mut diagnostics = NormalizeDiagnostics::default();
    let mut records = Vec::new();
    normalize_into(meeting, now, &mut records, &mut diagnostics);
    records
}

/// Flattens every meeting, in order, into canonical records.
pub fn normalize_all<'a, I>(meetings: I, now: DateTime<Utc>) -> Vec<CanonicalRecord>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    normalize_with_diagnostics(meetings, now).records
}

/// Flattens every meeting and reports degraded input.
pub fn normalize_with_diagnostics<'a, I>(meetings: I, now: DateTime<Utc>) -> Normalized
where
    I: IntoIterator<Item = &'a Meeting>,
{
    let mut normalized = Normalized::default();
    for meeting in meetings {
        normalize_into(
            meeting,
            now,
            &mut normalized.records,
            &mut normalized.diagnostics,
        );
    }

    let diagnostics = &normalized.diagnostics;
    if diagnostics.degraded_records() > 0 || diagnostics.incomplete_meetings > 0 {
        tracing::debug!(
            records = diagnostics.records,
            unknown_dates = diagnostics.unknown_dates,
            invalid_dates = diagnostics.invalid_dates,
            incomplete_meetings = diagnostics.incomplete_meetings,
            "normalized with degraded input"
        );
    }
    normalized
}

/// Builds the canonical record for one isolation.
pub fn canonical_record(
    entry: &IsolationEntry,
    response: &ResponseRecord,
    meeting_date: Option<&str>,
    now: DateTime<Utc>,
) -> CanonicalRecord {
    let planned_start_date = entry.planned_start_date();

    CanonicalRecord {
        id: entry.id.clone(),
        description: entry.display_description().to_string(),
        planned_start_date: planned_start_date.map(str::to_string),
        age_info: classify_age(planned_start_date, now),
        meeting_date: meeting_date.map(str::to_string),

        risk_level: enumerated(&response.risk_level),
        business_impact: text_or(&response.business_impact, crate::types::NOT_ASSESSED),

        moc_required: enumerated(&response.moc_required),
        moc_number: text(&response.moc_number),
        moc_status: enumerated(&response.moc_status),

        parts_required: enumerated(&response.parts_required),
        parts_expected_date: text(&response.parts_expected_date),
        parts_status: text_or(&response.parts_status, PARTS_NOT_ASSESSED),

        equipment_disconnection_required: enumerated(&response.equipment_disconnection_required),
        equipment_removal_required: enumerated(&response.equipment_removal_required),
        planned_resolution_date: text(&response.planned_resolution_date),

        action_required: enumerated(&response.action_required),
        action_items: response.action_items.clone().unwrap_or_default(),
        comments: text(&response.comments),

        corrosion_risk: enumerated::<RiskLevel>(&response.corrosion_risk),
        dead_legs_risk: enumerated::<RiskLevel>(&response.dead_legs_risk),
        automation_loss_risk: enumerated::<RiskLevel>(&response.automation_loss_risk),
    }
}

fn normalize_into(
    meeting: &Meeting,
    now: DateTime<Utc>,
    records: &mut Vec<CanonicalRecord>,
    diagnostics: &mut NormalizeDiagnostics,
) {
    diagnostics.meetings += 1;

    let (Some(isolations), Some(responses)) = (&meeting.isolations, &meeting.responses) else {
        tracing::debug!(
            meeting = meeting.id.as_deref().or(meeting.date.as_deref()).unwrap_or("?"),
            "skipping meeting without isolations or responses"
        );
        diagnostics.incomplete_meetings += 1;
        return;
    };

    let empty = ResponseRecord::default();
    for entry in isolations {
        let response = match responses.get(&entry.id) {
            Some(response) => response,
            None => {
                diagnostics.missing_responses += 1;
                &empty
            }
        };

        let record = canonical_record(entry, response, meeting.date.as_deref(), now);
        if record.age_info.is_unknown() {
            diagnostics.unknown_dates += 1;
        } else if record.age_info.is_invalid() {
            diagnostics.invalid_dates += 1;
        }
        tracing::trace!(id = %record.id, age = %record.age_info.display, "normalized isolation");

        diagnostics.records += 1;
        records.push(record);
    }

    let dangling = responses
        .keys()
        .filter(|id| !isolations.iter().any(|entry| &entry.id == *id))
        .count();
    if dangling > 0 {
        tracing::warn!(
            dangling,
            meeting = meeting.date.as_deref().unwrap_or("?"),
            "ignoring responses for isolations not in the meeting"
        );
        diagnostics.dangling_responses += dangling;
    }
}

fn enumerated<T: for<'s> From<&'s str> + Default>(value: &Option<String>) -> T {
    value
        .as_deref()
        .map(<T as From<&str>>::from)
        .unwrap_or_default()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn text_or(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
