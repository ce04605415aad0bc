//! Related-isolation detection.
//!
//! Two isolations are related when both ids carry a system code, the codes
//! are equal and the ids differ. Related isolations on one system often
//! need to be de-isolated together, so reviews surface them as warnings.
//!
//! [`find_related`] is symmetric and stateless. The two warning builders
//! differ only in reporting policy:
//!
//! - [`related_warnings`] reports every isolation that has a relative, so a
//!   pair shows up in both directions (the per-isolation view).
//! - [`grouped_related_warnings`] reports each group once: after an
//!   isolation is reported, neither it nor its relatives are reported again.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ids::IdClassifier;
use crate::types::{CanonicalRecord, IsolationEntry};

/// Anything identified by an isolation id.
pub trait IsolationRef {
    /// The isolation id.
    fn isolation_id(&self) -> &str;

    /// A display description for warnings.
    fn isolation_description(&self) -> &str;
}

impl IsolationRef for IsolationEntry {
    fn isolation_id(&self) -> &str {
        &self.id
    }

    fn isolation_description(&self) -> &str {
        self.display_description()
    }
}

impl IsolationRef for CanonicalRecord {
    fn isolation_id(&self) -> &str {
        &self.id
    }

    fn isolation_description(&self) -> &str {
        &self.description
    }
}

impl<T: IsolationRef + ?Sized> IsolationRef for &T {
    fn isolation_id(&self) -> &str {
        (**self).isolation_id()
    }

    fn isolation_description(&self) -> &str {
        (**self).isolation_description()
    }
}

/// An isolation sharing its system code with others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedWarning {
    /// The isolation the warning is about.
    pub isolation_id: String,
    /// Its description.
    pub isolation_description: String,
    /// How many other isolations share the code.
    pub related_count: usize,
    /// Ids of the related isolations, in input order.
    pub related_ids: Vec<String>,
    /// Descriptions of the related isolations, in input order.
    pub related_descriptions: Vec<String>,
}

impl RelatedWarning {
    /// Alert text shown alongside the warning.
    pub fn message(&self) -> String {
        format!(
            "This isolation shares the same system prefix with {} other isolation(s).",
            self.related_count
        )
    }
}

/// Returns `true` if two ids are related under `classifier`.
pub fn are_related<C>(classifier: &C, a: &str, b: &str) -> bool
where
    C: IdClassifier + ?Sized,
{
    if a == b {
        return false;
    }
    match (classifier.system_code(a), classifier.system_code(b)) {
        (Some(code_a), Some(code_b)) => code_a == code_b,
        _ => false,
    }
}

/// Finds every entry in `all` related to `target`, in input order.
pub fn find_related<'a, T, C>(classifier: &C, all: &'a [T], target: &T) -> Vec<&'a T>
where
    T: IsolationRef,
    C: IdClassifier + ?Sized,
{
    let target_id = target.isolation_id();
    all.iter()
        .filter(|entry| are_related(classifier, target_id, entry.isolation_id()))
        .collect()
}

/// Builds a warning for every entry with at least one relative.
pub fn related_warnings<T, C>(classifier: &C, all: &[T]) -> Vec<RelatedWarning>
where
    T: IsolationRef,
    C: IdClassifier + ?Sized,
{
    all.iter()
        .filter_map(|entry| warning_for(entry, &find_related(classifier, all, entry)))
        .collect()
}

/// Builds one warning per related group, never reporting an id twice.
pub fn grouped_related_warnings<T, C>(classifier: &C, all: &[T]) -> Vec<RelatedWarning>
where
    T: IsolationRef,
    C: IdClassifier + ?Sized,
{
    let mut reported: HashSet<&str> = HashSet::new();
    let mut warnings = Vec::new();

    for entry in all {
        if reported.contains(entry.isolation_id()) {
            continue;
        }
        let related = find_related(classifier, all, entry);
        if let Some(warning) = warning_for(entry, &related) {
            reported.insert(entry.isolation_id());
            reported.extend(related.iter().map(|r| (*r).isolation_id()));
            warnings.push(warning);
        }
    }

    tracing::debug!(groups = warnings.len(), "grouped related isolations");
    warnings
}

fn warning_for<T: IsolationRef>(entry: &T, related: &[&T]) -> Option<RelatedWarning> {
    if related.is_empty() {
        return None;
    }
    Some(RelatedWarning {
        isolation_id: entry.isolation_id().to_string(),
        isolation_description: entry.isolation_description().to_string(),
        related_count: related.len(),
        related_ids: related.iter().map(|r| r.isolation_id().to_string()).collect(),
        related_descriptions: related
            .iter()
            .map(|r| r.isolation_description().to_string())
            .collect(),
    })
}
