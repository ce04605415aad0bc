//! Assessment value types recorded against an isolation.
//!
//! Every enum here carries an `Other(String)` variant. Review data is typed
//! in by hand and the engine must keep unexpected values intact rather than
//! reject them. Matching is exact: `"high"` is `Other("high")`, not
//! [`RiskLevel::High`]. An empty string reads as "not assessed", the same as
//! a missing field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for any assessment that has not been filled in.
pub const NOT_ASSESSED: &str = "N/A";

// ============================================================================
// RiskLevel
// ============================================================================

/// Risk rating for an isolation, also used for the WMS manual sub-scores
/// (corrosion, dead legs, automation loss).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    /// No rating given.
    #[default]
    NotAssessed,
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
    /// Critical risk.
    Critical,
    /// Any other recorded value, kept verbatim.
    Other(String),
}

impl RiskLevel {
    /// Returns the value as it is written in review data.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotAssessed => NOT_ASSESSED,
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Other(value) => value,
        }
    }

    /// Returns `true` unless the rating is missing or `N/A`.
    pub fn is_assessed(&self) -> bool {
        !matches!(self, Self::NotAssessed)
    }
}

impl From<&str> for RiskLevel {
    fn from(value: &str) -> Self {
        match value {
            "" | NOT_ASSESSED => Self::NotAssessed,
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            "Critical" => Self::Critical,
            other => Self::Other(other.to_string()),
        }
    }
}

// ============================================================================
// Answer
// ============================================================================

/// A `Yes`/`No` question that may be left unanswered (MOC required, parts
/// required, equipment disconnection, equipment removal).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Answer {
    /// Question not answered.
    #[default]
    NotAssessed,
    /// Yes.
    Yes,
    /// No.
    No,
    /// Any other recorded value, kept verbatim.
    Other(String),
}

impl Answer {
    /// Returns the value as it is written in review data.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotAssessed => NOT_ASSESSED,
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Other(value) => value,
        }
    }

    /// Returns `true` only for an explicit `Yes`.
    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        match value {
            "" | NOT_ASSESSED => Self::NotAssessed,
            "Yes" => Self::Yes,
            "No" => Self::No,
            other => Self::Other(other.to_string()),
        }
    }
}

// ============================================================================
// ActionRequired
// ============================================================================

/// Follow-up urgency decided in the review.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionRequired {
    /// No decision recorded.
    #[default]
    NotAssessed,
    /// Nothing to do.
    None,
    /// Keep watching.
    Monitor,
    /// Plan work in a future window.
    PlanWork,
    /// Act now.
    Urgent,
    /// Any other recorded value, kept verbatim.
    Other(String),
}

impl ActionRequired {
    /// Returns the value as it is written in review data.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotAssessed => NOT_ASSESSED,
            Self::None => "None",
            Self::Monitor => "Monitor",
            Self::PlanWork => "Plan Work",
            Self::Urgent => "Urgent",
            Self::Other(value) => value,
        }
    }

    /// Returns `true` for [`ActionRequired::Urgent`].
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Urgent)
    }
}

impl From<&str> for ActionRequired {
    fn from(value: &str) -> Self {
        match value {
            "" | NOT_ASSESSED => Self::NotAssessed,
            "None" => Self::None,
            "Monitor" => Self::Monitor,
            "Plan Work" => Self::PlanWork,
            "Urgent" => Self::Urgent,
            other => Self::Other(other.to_string()),
        }
    }
}

// ============================================================================
// MocStatus
// ============================================================================

/// Progress of a Management of Change request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MocStatus {
    /// No status recorded.
    #[default]
    NotAssessed,
    /// MOC raised but not yet submitted.
    NotStarted,
    /// Submitted for approval.
    Submitted,
    /// Approved.
    Approved,
    /// Being implemented.
    InProgress,
    /// Implemented and closed.
    Completed,
    /// Any other recorded value, kept verbatim.
    Other(String),
}

impl MocStatus {
    /// Returns the value as it is written in review data.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotAssessed => NOT_ASSESSED,
            Self::NotStarted => "Not Started",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Other(value) => value,
        }
    }

    /// Returns `true` while the MOC is moving: submitted, approved or in
    /// progress.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Submitted | Self::Approved | Self::InProgress)
    }
}

impl From<&str> for MocStatus {
    fn from(value: &str) -> Self {
        match value {
            "" | NOT_ASSESSED => Self::NotAssessed,
            "Not Started" => Self::NotStarted,
            "Submitted" => Self::Submitted,
            "Approved" => Self::Approved,
            "In Progress" => Self::InProgress,
            "Completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }
}

// ============================================================================
// Shared conversions
// ============================================================================

macro_rules! string_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    Self::from(value.as_str())
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

string_conversions!(RiskLevel, Answer, ActionRequired, MocStatus);
