//! Core types for LTI review data.

mod assessment;
mod lenient;
mod meeting;
mod proptests;
mod record;

pub use assessment::{ActionRequired, Answer, MocStatus, NOT_ASSESSED, RiskLevel};
pub use meeting::{ActionItem, IsolationEntry, Meeting, NO_DESCRIPTION, ResponseRecord};
pub use record::{CanonicalRecord, PARTS_NOT_ASSESSED};

pub(crate) use meeting::first_present;
