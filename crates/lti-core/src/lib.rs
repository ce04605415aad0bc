#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! LTI Core Library
//!
//! Age classification, record normalization and dashboard aggregation for
//! Long-Term Isolation review meetings.

pub mod age;
pub mod agenda;
pub mod aggregate;
pub mod completion;
pub mod error;
pub mod history;
pub mod ids;
pub mod normalize;
pub mod related;
pub mod review;
pub mod store;
pub mod summary;
pub mod types;

// Re-exports for convenience
pub use age::{AgeInfo, classify_age};
pub use agenda::Agenda;
pub use aggregate::{DashboardStats, aggregate};
pub use completion::is_completed;
pub use error::{Error, Result};
pub use history::{Removal, RemovalReport};
pub use ids::{IdClassifier, PrefixClassifier};
pub use normalize::{NormalizeDiagnostics, Normalized, normalize, normalize_all, normalize_with_diagnostics};
pub use related::{RelatedWarning, find_related, grouped_related_warnings, related_warnings};
pub use review::{PreviousReview, find_previous_review, is_meaningful};
pub use store::{MeetingSource, StoreSnapshot};
pub use summary::MeetingSummary;
pub use types::{
    ActionItem, ActionRequired, Answer, CanonicalRecord, IsolationEntry, Meeting, MocStatus,
    ResponseRecord, RiskLevel,
};
