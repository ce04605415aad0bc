//! Isolation id classification.
//!
//! Isolation ids look like `CAHE-123-001`: a literal prefix, a hyphen, a
//! three-digit system code and a suffix. The system code is what ties
//! isolations on the same plant system together. The format is behind the
//! [`IdClassifier`] trait so another site can plug in its own scheme.
//!
//! # Example
//!
//! ```rust
//! use lti_core::ids::{IdClassifier, PrefixClassifier};
//!
//! let classifier = PrefixClassifier::default();
//! assert_eq!(classifier.system_code("CAHE-123-001"), Some("123"));
//! assert_eq!(classifier.system_code("CAHE-X"), None);
//!
//! let other_site = PrefixClassifier::new("NPHE").unwrap();
//! assert_eq!(other_site.system_code("NPHE-456-002"), Some("456"));
//! assert_eq!(other_site.system_code("CAHE-456-002"), None);
//! ```

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::{Error, Result};

/// Prefix used by the default classifier.
pub const DEFAULT_PREFIX: &str = "CAHE";

/// System name for an id that carries no system code.
pub const UNKNOWN_SYSTEM: &str = "Unknown System";

/// System name for a missing id.
pub const UNKNOWN: &str = "Unknown";

static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&pattern_for(DEFAULT_PREFIX)).expect("Invalid default id regex"));

/// Extracts the system code from an isolation id.
pub trait IdClassifier {
    /// Returns the system code, or `None` if the id does not follow the
    /// expected format. Ids without a code are never related to anything.
    fn system_code<'a>(&self, id: &'a str) -> Option<&'a str>;
}

/// Classifier for `PREFIX-DDD...` ids.
///
/// The match is unanchored and takes the first three ASCII digits after
/// `PREFIX-`, so `CAHE-1234` yields `123`.
#[derive(Debug, Clone)]
pub struct PrefixClassifier {
    prefix: String,
    pattern: Regex,
}

impl PrefixClassifier {
    /// Creates a classifier for the given literal prefix.
    ///
    /// Returns a configuration error if the prefix is empty.
    pub fn new<S: Into<String>>(prefix: S) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.trim().is_empty() {
            return Err(Error::config("id prefix must not be empty"));
        }
        let pattern = Regex::new(&pattern_for(&prefix))?;
        Ok(Self { prefix, pattern })
    }

    /// The literal prefix this classifier matches.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixClassifier {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl IdClassifier for PrefixClassifier {
    fn system_code<'a>(&self, id: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(id)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

fn pattern_for(prefix: &str) -> String {
    format!("{}-([0-9]{{3}})", regex::escape(prefix))
}

/// Display names for the system codes used on site.
pub fn default_system_names() -> BTreeMap<String, String> {
    [
        ("123", "Pump System"),
        ("456", "Compressor System"),
        ("789", "Heat Exchange System"),
        ("101", "Cooling System"),
        ("202", "Electrical System"),
        ("303", "Steam System"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect()
}

/// Resolves the plant system an isolation belongs to.
///
/// Known codes map through `names`; other codes read `System {code}`. Ids
/// without a code are [`UNKNOWN_SYSTEM`], missing ids [`UNKNOWN`].
pub fn system_name<C>(classifier: &C, id: Option<&str>, names: &BTreeMap<String, String>) -> String
where
    C: IdClassifier + ?Sized,
{
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return UNKNOWN.to_string();
    };
    match classifier.system_code(id) {
        Some(code) => names
            .get(code)
            .cloned()
            .unwrap_or_else(|| format!("System {code}")),
        None => UNKNOWN_SYSTEM.to_string(),
    }
}
