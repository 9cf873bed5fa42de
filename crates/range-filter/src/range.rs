//! Extracted ranges and the match that produced them.

use serde::Serialize;

use crate::calendar::Instant;

/// A possibly open-ended time range.
///
/// Either side may be absent. No ordering between `start` and `stop` is
/// enforced: "22-6" yields a start later than its stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeRange {
    pub start: Option<Instant>,
    pub stop: Option<Instant>,
}

impl TimeRange {
    pub fn new(start: Option<Instant>, stop: Option<Instant>) -> Self {
        Self { start, stop }
    }

    /// A range with only a start.
    pub fn starting(start: Instant) -> Self {
        Self::new(Some(start), None)
    }

    /// A range with both sides.
    pub fn between(start: Instant, stop: Instant) -> Self {
        Self::new(Some(start), Some(stop))
    }

    /// At least one side is present.
    pub fn is_matched(&self) -> bool {
        self.start.is_some() || self.stop.is_some()
    }
}

/// The text consumed by whichever rule produced a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Name of the rule that fired (e.g. `"full-range"`, `"yesterday"`).
    pub rule: &'static str,
    /// The exact matched substring, removed from the note by `clean`.
    pub text: String,
    /// The `start` capture of an explicit range, if present and non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// The `stop` capture of an explicit range, if present and non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(h: u32) -> Instant {
        NaiveDate::from_ymd_opt(2015, 8, 31)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_range_is_not_matched() {
        assert!(!TimeRange::default().is_matched());
    }

    #[test]
    fn test_one_sided_ranges_are_matched() {
        assert!(TimeRange::starting(instant(10)).is_matched());
        assert!(TimeRange::new(None, Some(instant(12))).is_matched());
    }

    #[test]
    fn test_reversed_range_is_accepted() {
        let range = TimeRange::between(instant(22), instant(6));
        assert!(range.is_matched());
        assert!(range.start > range.stop);
    }

    #[test]
    fn test_range_serializes_null_sides() {
        let json = serde_json::to_string(&TimeRange::starting(instant(10))).unwrap();
        assert_eq!(json, r#"{"start":"2015-08-31T10:00:00","stop":null}"#);
    }

    #[test]
    fn test_match_record_omits_missing_captures() {
        let record = MatchRecord {
            rule: "today",
            text: "today".to_string(),
            start: None,
            stop: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"rule":"today","text":"today"}"#);
    }
}
