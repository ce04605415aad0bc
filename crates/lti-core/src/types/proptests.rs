//! Property-based tests for age classification and id matching.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::age::{AgeInfo, SIX_MONTHS_DAYS, classify_age, days_between, format_age};
    use crate::ids::PrefixClassifier;
    use crate::related::are_related;
    use crate::types::RiskLevel;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use regex::Regex;

    fn id_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "CAHE-[0-9]{3}-[0-9]{3}",
            "CAHE-[0-9]{1,4}[A-Z]?",
            "[A-Z]{2,5}-[0-9]{3}-[0-9]{2}",
            "\\PC{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn test_whole_days_are_exact(days in 0i64..20_000) {
            let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
            let now = start + Duration::days(days);
            prop_assert_eq!(days_between(start, now), days as u64);
        }

        #[test]
        fn test_partial_days_round_up(days in 0i64..20_000, millis in 1i64..86_400_000) {
            let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
            let now = start + Duration::days(days) + Duration::milliseconds(millis);
            prop_assert_eq!(days_between(start, now), days as u64 + 1);
        }

        #[test]
        fn test_direction_does_not_matter(a in 0i64..10_000_000_000, b in 0i64..10_000_000_000) {
            let a = Utc.timestamp_millis_opt(a).unwrap();
            let b = Utc.timestamp_millis_opt(b).unwrap();
            prop_assert_eq!(days_between(a, b), days_between(b, a));
        }

        #[test]
        fn test_six_month_flag_threshold(days in 0u64..5_000) {
            let info = AgeInfo::from_days(days);
            prop_assert_eq!(info.is_six_months_plus, days >= SIX_MONTHS_DAYS);
            prop_assert_eq!(info.age_in_days, days);
        }

        #[test]
        fn test_display_shape(days in 0u64..50_000) {
            let shape = Regex::new(r"^\d+ (days|months|years?( \d+ months)?)$").unwrap();
            let display = format_age(days);
            prop_assert!(shape.is_match(&display), "unexpected display {display:?}");
        }

        #[test]
        fn test_classify_age_is_total(raw in "\\PC{0,24}") {
            let now = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
            let info = classify_age(Some(&raw), now);
            if info.is_unknown() || info.is_invalid() {
                prop_assert_eq!(info.age_in_days, 0);
                prop_assert!(!info.is_six_months_plus);
            }
        }

        #[test]
        fn test_related_is_symmetric(a in id_strategy(), b in id_strategy()) {
            let c = PrefixClassifier::default();
            prop_assert_eq!(are_related(&c, &a, &b), are_related(&c, &b, &a));
        }

        #[test]
        fn test_related_is_irreflexive(a in id_strategy()) {
            let c = PrefixClassifier::default();
            prop_assert!(!are_related(&c, &a, &a));
        }

        #[test]
        fn test_risk_level_preserves_text(raw in "\\PC{0,16}") {
            let level = RiskLevel::from(raw.as_str());
            if raw.is_empty() {
                prop_assert_eq!(level.as_str(), "N/A");
            } else {
                prop_assert_eq!(level.as_str(), raw.as_str());
            }
        }
    }
}
