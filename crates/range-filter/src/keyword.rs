//! Relative-date keyword ranges.
//!
//! | Phrase                     | start                         | stop                        |
//! |----------------------------|-------------------------------|-----------------------------|
//! | `today`                    | start of today                | —                           |
//! | `yesterday`                | start of yesterday            | end of yesterday            |
//! | `current <unit>`           | start of this week (or unit)  | —                           |
//! | `last <unit>`              | start of previous unit        | end of previous unit        |
//! | `last N <units>`           | start of the unit N units ago | —                           |
//!
//! Phrases match anywhere in the note, case-sensitively and without word
//! boundaries ("last days" contains "last day"). The first row that matches
//! wins.

use regex::{Captures, Regex};

use crate::calendar::{self, Instant, Unit, WeekStartDay};
use crate::error::RangeError;
use crate::range::TimeRange;
use crate::rule::{self, Rule};

const TODAY: &str = "today";
const YESTERDAY: &str = "yesterday";
const CURRENT: &str = r"current (?P<unit>day|week|month|year)";
const LAST: &str = r"last (?P<unit>day|week|month|year)";
const LAST_N: &str = r"last (?P<qty>[0-9]+) (?P<unit>days|weeks|months|years)";

/// How `current <unit>` picks the start of its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentPeriod {
    /// Start of the current week whatever unit was written
    /// ("current month" starts on Monday of this week).
    #[default]
    Week,
    /// Start of the unit actually written ("current month" starts on the 1st).
    Captured,
}

/// Compiled keyword patterns, in evaluation order.
#[derive(Debug, Clone)]
pub(crate) struct KeywordPatterns {
    today: Regex,
    yesterday: Regex,
    current: Regex,
    last: Regex,
    last_n: Regex,
}

impl KeywordPatterns {
    pub(crate) fn compile() -> Result<Self, RangeError> {
        Ok(Self {
            today: rule::compile(TODAY)?,
            yesterday: rule::compile(YESTERDAY)?,
            current: rule::compile(CURRENT)?,
            last: rule::compile(LAST)?,
            last_n: rule::compile(LAST_N)?,
        })
    }

    /// The rule table for one extraction.
    ///
    /// Every closure captures `now` by value; computing a range never
    /// changes the instant seen by the other rules or by later calls.
    pub(crate) fn rules(
        &self,
        now: Instant,
        ws: WeekStartDay,
        current: CurrentPeriod,
    ) -> Vec<Rule<'_>> {
        vec![
            Rule::new("today", &self.today, move |_| {
                let start = calendar::start_of(now, Unit::Day, ws)?;
                Some(TimeRange::starting(start))
            }),
            Rule::new("yesterday", &self.yesterday, move |_| {
                previous_period(now, 1, Unit::Day, ws)
            }),
            Rule::new("current", &self.current, move |caps| {
                let unit = match current {
                    CurrentPeriod::Week => Unit::Week,
                    CurrentPeriod::Captured => captured_unit(caps)?,
                };
                let start = calendar::start_of(now, unit, ws)?;
                Some(TimeRange::starting(start))
            }),
            Rule::new("last", &self.last, move |caps| {
                previous_period(now, 1, captured_unit(caps)?, ws)
            }),
            Rule::new("last-n", &self.last_n, move |caps| {
                let qty: u32 = caps.name("qty")?.as_str().parse().ok()?;
                let unit = captured_unit(caps)?;
                let then = calendar::subtract(now, qty, unit)?;
                let start = calendar::start_of(then, unit, ws)?;
                Some(TimeRange::starting(start))
            }),
        ]
    }
}

/// The whole `unit` that lies `n` units before `now`.
fn previous_period(now: Instant, n: u32, unit: Unit, ws: WeekStartDay) -> Option<TimeRange> {
    let then = calendar::subtract(now, n, unit)?;
    Some(TimeRange::between(
        calendar::start_of(then, unit, ws)?,
        calendar::end_of(then, unit, ws)?,
    ))
}

fn captured_unit(caps: &Captures<'_>) -> Option<Unit> {
    Unit::from_word(caps.name("unit")?.as_str())
}
