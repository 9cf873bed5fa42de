//! Range extraction from activity notes.
//!
//! [`RangeFilterParser`] first looks for a literal clock-time range
//! (`10-12`, `10:00-`, `-12:00`) and, failing that, for a relative-date
//! keyword (`yesterday`, `last month`, `last 3 weeks`). The first rule that
//! matches decides the range, and its matched text is what
//! [`Parser::clean`] later strips from the note.
//!
//! # Example
//!
//! ```
//! use range_filter::{parse_instant, Clock, Parser, RangeFilterParser};
//!
//! let now = parse_instant("2015-08-31 22:25").unwrap();
//! let mut parser = RangeFilterParser::with_clock(Clock::fixed(now)).unwrap();
//!
//! let input = "standup 10:00-10:15";
//! let range = parser.run(input).range.unwrap();
//! assert_eq!(range.start, parse_instant("2015-08-31 10:00").ok());
//! assert_eq!(range.stop, parse_instant("2015-08-31 10:15").ok());
//! assert_eq!(parser.clean(input), "standup");
//! ```

use log::debug;

use crate::calendar::{Instant, WeekStartDay};
use crate::clock::Clock;
use crate::error::Result;
use crate::explicit::ExplicitPatterns;
use crate::keyword::{CurrentPeriod, KeywordPatterns};
use crate::parser::{ParseResult, Parser};
use crate::range::{MatchRecord, TimeRange};
use crate::rule::{first_match, Hit};

/// Options for [`RangeFilterParser::with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Which day starts the week for week-based keywords.
    pub week_start: WeekStartDay,
    /// How `current <unit>` anchors its start.
    pub current_period: CurrentPeriod,
}

/// Extracts a [`TimeRange`] from a note and strips the matched text.
#[derive(Debug, Clone)]
pub struct RangeFilterParser {
    clock: Clock,
    options: FilterOptions,
    explicit: ExplicitPatterns,
    keywords: KeywordPatterns,
    result: ParseResult,
    last_match: Option<MatchRecord>,
}

impl RangeFilterParser {
    /// A parser anchored to the local system clock.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRule`](crate::RangeError::InvalidRule) if a
    /// built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_options(Clock::default(), FilterOptions::default())
    }

    /// A parser anchored to `clock`, with default options.
    pub fn with_clock(clock: Clock) -> Result<Self> {
        Self::with_options(clock, FilterOptions::default())
    }

    pub fn with_options(clock: Clock, options: FilterOptions) -> Result<Self> {
        Ok(Self {
            clock,
            options,
            explicit: ExplicitPatterns::compile()?,
            keywords: KeywordPatterns::compile()?,
            result: ParseResult::default(),
            last_match: None,
        })
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// The match recorded by the last [`run`](Parser::run), if any.
    pub fn last_match(&self) -> Option<&MatchRecord> {
        self.last_match.as_ref()
    }

    /// Run on `input` and return just the range.
    pub fn extract(&mut self, input: &str) -> Option<TimeRange> {
        self.run(input).range
    }

    /// Explicit ranges take precedence over keywords.
    fn find(&self, input: &str, now: Instant) -> Option<Hit> {
        first_match(&self.explicit.rules(now), input).or_else(|| {
            let rules =
                self.keywords
                    .rules(now, self.options.week_start, self.options.current_period);
            first_match(&rules, input)
        })
    }
}

impl Parser for RangeFilterParser {
    fn name(&self) -> &str {
        "range"
    }

    fn run(&mut self, input: &str) -> &ParseResult {
        self.last_match = None;
        self.result.range = None;

        // Read once: every rule of this extraction sees the same instant.
        let now = self.clock.now();

        match self.find(input, now) {
            Some(Hit { range, record }) => {
                debug!(
                    "rule '{}' matched '{}': start={:?} stop={:?}",
                    record.rule, record.text, range.start, range.stop
                );
                self.result.range = Some(range);
                self.last_match = Some(record);
            }
            None => debug!("no range found in '{}'", input),
        }

        &self.result
    }

    fn clean(&self, input: &str) -> String {
        match &self.last_match {
            Some(record) => input.replace(&record.text, "").trim().to_string(),
            None => input.to_string(),
        }
    }

    fn result(&self) -> &ParseResult {
        &self.result
    }

    fn set_result(&mut self, result: ParseResult) {
        self.result = result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, mi: u32) -> Instant {
        NaiveDate::from_ymd_opt(2015, 8, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn parser() -> RangeFilterParser {
        RangeFilterParser::with_clock(Clock::fixed(at(31, 22, 25))).unwrap()
    }

    #[test]
    fn test_explicit_range_beats_keyword() {
        let mut p = parser();
        let range = p.extract("yesterday 10-12").unwrap();
        assert_eq!(range, TimeRange::between(at(31, 10, 0), at(31, 12, 0)));
        assert_eq!(p.last_match().unwrap().rule, "full-range");
        assert_eq!(p.clean("yesterday 10-12"), "yesterday");
    }

    #[test]
    fn test_keyword_used_when_no_explicit_range() {
        let mut p = parser();
        let range = p.extract("did stuff yesterday").unwrap();
        assert_eq!(range.start, Some(at(30, 0, 0)));
        assert_eq!(p.last_match().unwrap().rule, "yesterday");
    }

    #[test]
    fn test_no_match_leaves_range_absent() {
        let mut p = parser();
        let result = p.run("just some words");
        assert!(result.range.is_none());
        assert!(result.is_empty());
        assert!(p.last_match().is_none());
    }

    #[test]
    fn test_clean_without_match_is_verbatim() {
        let mut p = parser();
        p.run("  nothing here  ");
        assert_eq!(p.clean("  nothing here  "), "  nothing here  ");
    }

    #[test]
    fn test_failed_run_forgets_previous_match() {
        let mut p = parser();
        p.run("10-12");
        assert!(p.last_match().is_some());

        let result = p.run("nothing");
        assert!(result.range.is_none());
        assert!(p.last_match().is_none());
        assert_eq!(p.clean("10-12"), "10-12");
    }

    #[test]
    fn test_clean_removes_every_occurrence() {
        let mut p = parser();
        let input = "today, really today";
        p.run(input);
        assert_eq!(p.clean(input), ", really");
    }

    #[test]
    fn test_run_keeps_other_fields() {
        let mut p = parser();
        p.set_result(ParseResult {
            range: None,
            description: Some("kept".to_string()),
        });
        let result = p.run("10-");
        assert_eq!(result.description.as_deref(), Some("kept"));
        assert_eq!(result.range, Some(TimeRange::starting(at(31, 10, 0))));
    }

    #[test]
    fn test_set_result_clears() {
        let mut p = parser();
        p.run("10-12");
        p.set_result(ParseResult::default());
        assert!(p.result().is_empty());
    }

    #[test]
    fn test_options_are_applied() {
        let options = FilterOptions {
            week_start: WeekStartDay::Sunday,
            current_period: CurrentPeriod::Captured,
        };
        let mut p = RangeFilterParser::with_options(Clock::fixed(at(31, 22, 25)), options).unwrap();
        assert_eq!(p.options(), &options);
        assert_eq!(p.extract("current week").unwrap().start, Some(at(30, 0, 0)));
        assert_eq!(p.extract("current month").unwrap().start, Some(at(1, 0, 0)));
    }

    #[test]
    fn test_system_clock_parser_builds() {
        let mut p = RangeFilterParser::new().unwrap();
        assert_eq!(p.clock(), Clock::System);
        assert!(p.extract("today").is_some());
    }

    #[test]
    fn test_zoned_clock_anchors_today_in_zone() {
        use chrono::Utc;

        let tz = chrono_tz::Pacific::Kiritimati;
        let mut p = RangeFilterParser::with_clock(Clock::Zoned(tz)).unwrap();
        let before = Utc::now().with_timezone(&tz).date_naive();
        let start = p.extract("today").unwrap().start.unwrap();
        let after = Utc::now().with_timezone(&tz).date_naive();

        // Either zoned date is fine if the zone crossed midnight mid-test.
        assert!(start.date() == before || start.date() == after);
        assert_eq!(start.time(), chrono::NaiveTime::MIN);
        assert_eq!(p.last_match().unwrap().rule, "today");
    }
}
