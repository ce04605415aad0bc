//! Agenda for the six-monthly Asset Manager review.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregate::DashboardStats;
use crate::types::CanonicalRecord;

/// Total meeting length in minutes.
pub const AGENDA_MINUTES: u32 = 90;

/// Stated purpose of the review.
pub const AGENDA_PURPOSE: &str = "6-Month LTI Review (WMS Manual Compliance)";

/// How many six-months-plus records are listed by name.
pub const LISTED_LTIS: usize = 5;

/// One line of an agenda section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Main text.
    pub text: String,
    /// Secondary line, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AgendaItem {
    fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            detail: None,
        }
    }
}

/// A timed block of the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaSection {
    /// Section heading.
    pub title: String,
    /// Allotted minutes.
    pub minutes: u32,
    /// Discussion points.
    pub items: Vec<AgendaItem>,
}

/// The full review agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agenda {
    /// Meeting date as displayed.
    pub date: String,
    /// Meeting length in minutes.
    pub duration_minutes: u32,
    /// Meeting purpose.
    pub purpose: String,
    /// Timed sections, in running order.
    pub sections: Vec<AgendaSection>,
}

impl Agenda {
    /// Builds the agenda from dashboard statistics.
    pub fn from_stats<S: Into<String>>(stats: &DashboardStats, date: S) -> Self {
        let section = |title: &str, minutes, items| AgendaSection {
            title: title.to_string(),
            minutes,
            items,
        };

        let sections = vec![
            section(
                "Executive Summary",
                10,
                vec![
                    AgendaItem::new(format!("Total LTIs: {}", stats.total_ltis)),
                    AgendaItem::new(format!(
                        "LTIs Over 6 Months: {} (Require Review)",
                        stats.six_months_plus
                    )),
                    AgendaItem::new(format!(
                        "Critical Risk: {} | High Risk: {}",
                        stats.critical_risk, stats.high_risk
                    )),
                ],
            ),
            section("Critical LTIs Review", 30, critical_items(&stats.six_months_plus_ltis)),
            section(
                "MOC Status Review",
                20,
                vec![
                    AgendaItem::new(format!("MOCs Required: {}", stats.moc_required)),
                    AgendaItem::new(format!("MOCs In Progress: {}", stats.moc_in_progress)),
                    AgendaItem::new("Discussion: Barriers to completion, resource allocation"),
                ],
            ),
            section(
                "Equipment Management",
                15,
                vec![
                    AgendaItem::new(format!(
                        "Equipment Issues: {} LTIs requiring disconnection/removal",
                        stats.equipment_issues
                    )),
                    AgendaItem::new(
                        "Discussion: Resource requirements, safety considerations, work windows",
                    ),
                ],
            ),
            section(
                "Action Items",
                10,
                vec![
                    AgendaItem::new(format!("Urgent Actions: {} LTIs", stats.urgent_action)),
                    AgendaItem::new("Assign owners and timelines for critical LTIs"),
                    AgendaItem::new("Schedule next Asset Manager review (6 months)"),
                ],
            ),
        ];

        Self {
            date: date.into(),
            duration_minutes: AGENDA_MINUTES,
            purpose: AGENDA_PURPOSE.to_string(),
            sections,
        }
    }
}

fn critical_items(records: &[CanonicalRecord]) -> Vec<AgendaItem> {
    if records.is_empty() {
        return vec![AgendaItem::new("No LTIs over 6 months requiring review.")];
    }

    let mut items: Vec<AgendaItem> = records
        .iter()
        .take(LISTED_LTIS)
        .map(|record| AgendaItem {
            text: format!(
                "{}: {} old, {} risk",
                record.id, record.age_info.display, record.risk_level
            ),
            detail: Some(format!(
                "MOC: {} | Equipment Issues: {}",
                record.moc_required,
                equipment_issues(record)
            )),
        })
        .collect();

    if records.len() > LISTED_LTIS {
        items.push(AgendaItem::new(format!(
            "... and {} more LTIs",
            records.len() - LISTED_LTIS
        )));
    }
    items
}

fn equipment_issues(record: &CanonicalRecord) -> String {
    let mut issues = Vec::new();
    if record.equipment_disconnection_required.is_yes() {
        issues.push("Disconnect");
    }
    if record.equipment_removal_required.is_yes() {
        issues.push("Remove");
    }
    if issues.is_empty() {
        "None".to_string()
    } else {
        issues.join(", ")
    }
}

impl fmt::Display for Agenda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Asset Manager Review Meeting")?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Duration: {} minutes", self.duration_minutes)?;
        writeln!(f, "Purpose: {}", self.purpose)?;

        for (index, section) in self.sections.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {} ({} min)", index + 1, section.title, section.minutes)?;
            for item in &section.items {
                writeln!(f, "  - {}", item.text)?;
                if let Some(detail) = &item.detail {
                    writeln!(f, "    {detail}")?;
                }
            }
        }
        Ok(())
    }
}
