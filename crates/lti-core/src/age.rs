//! Isolation age classification.
//!
//! An isolation's age is the number of calendar days between its planned
//! start date and a reference "now", rounded up so that a partial day counts
//! as a whole one. Dates in the future produce a positive age as well.
//!
//! # Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use lti_core::age::classify_age;
//!
//! let now = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
//!
//! let age = classify_age(Some("2024-12-11"), now);
//! assert_eq!(age.age_in_days, 30);
//! assert_eq!(age.display, "1 months");
//! assert!(!age.is_six_months_plus);
//!
//! assert_eq!(classify_age(None, now).display, "Unknown");
//! assert_eq!(classify_age(Some("soon"), now).display, "Invalid Date");
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Age at which an isolation needs Asset Manager review.
pub const SIX_MONTHS_DAYS: u64 = 183;

/// Display string for an isolation with no planned start date.
pub const UNKNOWN_AGE: &str = "Unknown";

/// Display string for a planned start date that does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// How long an isolation has been in place.
///
/// A pure function of the planned start date and "now"; recompute it
/// whenever "now" moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeInfo {
    /// Whole days since the planned start, rounded up.
    pub age_in_days: u64,
    /// Human display, e.g. `"7 months"` or `"2 years 1 months"`.
    pub display: String,
    /// `true` once the age reaches [`SIX_MONTHS_DAYS`].
    pub is_six_months_plus: bool,
}

impl AgeInfo {
    /// Builds the classification for a known day count.
    pub fn from_days(age_in_days: u64) -> Self {
        Self {
            age_in_days,
            display: format_age(age_in_days),
            is_six_months_plus: age_in_days >= SIX_MONTHS_DAYS,
        }
    }

    /// Classification for an isolation without a planned start date.
    pub fn unknown() -> Self {
        Self::sentinel(UNKNOWN_AGE)
    }

    /// Classification for a planned start date that could not be read.
    pub fn invalid() -> Self {
        Self::sentinel(INVALID_DATE)
    }

    /// Returns `true` if this is the no-date sentinel.
    pub fn is_unknown(&self) -> bool {
        self.age_in_days == 0 && self.display == UNKNOWN_AGE
    }

    /// Returns `true` if this is the unparsable-date sentinel.
    pub fn is_invalid(&self) -> bool {
        self.age_in_days == 0 && self.display == INVALID_DATE
    }

    fn sentinel(display: &str) -> Self {
        Self {
            age_in_days: 0,
            display: display.to_string(),
            is_six_months_plus: false,
        }
    }
}

/// Classifies the age of an isolation relative to `now`.
///
/// Never fails: a missing or empty date yields [`AgeInfo::unknown`], an
/// unreadable one [`AgeInfo::invalid`].
pub fn classify_age(planned_start_date: Option<&str>, now: DateTime<Utc>) -> AgeInfo {
    let Some(raw) = planned_start_date.filter(|s| !s.is_empty()) else {
        return AgeInfo::unknown();
    };

    match parse_date(raw) {
        Some(start) => AgeInfo::from_days(days_between(start, now)),
        None => {
            tracing::trace!(value = raw, "unparsable planned start date");
            AgeInfo::invalid()
        }
    }
}

/// Parses the date spellings found in review data.
///
/// Accepts RFC 3339 timestamps, ISO dates (`2024-06-01`), slash dates
/// (`2024/06/01`, `06/01/2024`) and timestamps without an offset. Values
/// without an offset are read as UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| dt.and_utc())
}

/// Absolute distance between two instants in days, rounded up.
pub fn days_between(start: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = now
        .signed_duration_since(start)
        .num_milliseconds()
        .unsigned_abs();
    millis.div_ceil(MILLIS_PER_DAY)
}

/// Formats a day count for display.
///
/// Under 30 days: `"N days"`. Under a year: `"N months"` with 30-day months.
/// A year or more: `"N year"`/`"N years"`, followed by `" M months"` when
/// the remainder holds at least one 30-day month.
pub fn format_age(days: u64) -> String {
    if days < 30 {
        return format!("{days} days");
    }
    if days < 365 {
        return format!("{} months", days / 30);
    }

    let years = days / 365;
    let months = (days % 365) / 30;
    let plural = if years > 1 { "s" } else { "" };
    if months > 0 {
        format!("{years} year{plural} {months} months")
    } else {
        format!("{years} year{plural}")
    }
}
