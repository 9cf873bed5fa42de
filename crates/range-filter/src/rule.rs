//! Ordered rule cascade shared by the explicit and keyword tables.
//!
//! A rule pairs a compiled pattern with a function from its captures to a
//! [`TimeRange`]. Rules are tried in declaration order and the first one
//! that both matches and yields a non-empty range wins.

use log::trace;
use regex::{Captures, Regex};

use crate::error::RangeError;
use crate::range::{MatchRecord, TimeRange};

type Compute<'a> = Box<dyn Fn(&Captures<'_>) -> Option<TimeRange> + 'a>;

pub(crate) struct Rule<'a> {
    name: &'static str,
    pattern: &'a Regex,
    compute: Compute<'a>,
}

impl<'a> Rule<'a> {
    pub(crate) fn new<F>(name: &'static str, pattern: &'a Regex, compute: F) -> Self
    where
        F: Fn(&Captures<'_>) -> Option<TimeRange> + 'a,
    {
        Self {
            name,
            pattern,
            compute: Box::new(compute),
        }
    }
}

/// The winning rule's range and the text it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hit {
    pub range: TimeRange,
    pub record: MatchRecord,
}

/// Run `rules` in order against `input`, returning the first hit.
///
/// A rule whose pattern matches but whose compute yields nothing (or a range
/// with both sides absent) does not stop the cascade.
pub(crate) fn first_match(rules: &[Rule<'_>], input: &str) -> Option<Hit> {
    rules.iter().find_map(|rule| {
        let caps = rule.pattern.captures(input)?;
        match (rule.compute)(&caps).filter(TimeRange::is_matched) {
            Some(range) => Some(Hit {
                range,
                record: MatchRecord {
                    rule: rule.name,
                    text: caps[0].to_string(),
                    start: named_capture(&caps, "start"),
                    stop: named_capture(&caps, "stop"),
                },
            }),
            None => {
                trace!("rule '{}' matched '{}' but produced no range", rule.name, &caps[0]);
                None
            }
        }
    })
}

/// A named capture, treating an empty or missing group as absent.
pub(crate) fn named_capture(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Compile a rule pattern, reporting failures as [`RangeError::InvalidRule`].
pub(crate) fn compile(pattern: &str) -> Result<Regex, RangeError> {
    Regex::new(pattern).map_err(|e| RangeError::InvalidRule(format!("'{}': {}", pattern, e)))
}
