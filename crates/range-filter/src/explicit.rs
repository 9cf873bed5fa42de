//! Literal clock-time ranges: `10:00-12:00`, `10-12`, `10-`, `-12`.
//!
//! Three forms are tried in order: full range, start-only, stop-only. The
//! first one that matches with at least one resolvable side wins. Spaces
//! around the dash are allowed.

use regex::{Captures, Regex};

use crate::calendar::Instant;
use crate::error::RangeError;
use crate::range::TimeRange;
use crate::rule::{self, named_capture, Rule};
use crate::time_string;

const FULL_RANGE: &str = r"(?P<start>[0-9]+(?::[0-9]+)?)\s*-\s*(?P<stop>[0-9]+(?::[0-9]+)?)";
const START_ONLY: &str = r"(?P<start>[0-9]+(?::[0-9]+)?)\s*-";
const STOP_ONLY: &str = r"-\s*(?P<stop>[0-9]+(?::[0-9]+)?)";

/// Compiled explicit-range patterns, in evaluation order.
#[derive(Debug, Clone)]
pub(crate) struct ExplicitPatterns {
    full: Regex,
    start_only: Regex,
    stop_only: Regex,
}

impl ExplicitPatterns {
    pub(crate) fn compile() -> Result<Self, RangeError> {
        Ok(Self {
            full: rule::compile(FULL_RANGE)?,
            start_only: rule::compile(START_ONLY)?,
            stop_only: rule::compile(STOP_ONLY)?,
        })
    }

    /// The rule table for one extraction, anchored to `now`.
    pub(crate) fn rules(&self, now: Instant) -> Vec<Rule<'_>> {
        vec![
            Rule::new("full-range", &self.full, move |caps| resolve_sides(caps, now)),
            Rule::new("start-only", &self.start_only, move |caps| {
                resolve_sides(caps, now)
            }),
            Rule::new("stop-only", &self.stop_only, move |caps| {
                resolve_sides(caps, now)
            }),
        ]
    }
}

fn resolve_sides(caps: &Captures<'_>, now: Instant) -> Option<TimeRange> {
    let start = resolve_side(caps, "start", now)?;
    let stop = resolve_side(caps, "stop", now)?;
    Some(TimeRange::new(start, stop))
}

/// `Some(None)` for an empty side; `None` if a present side cannot be placed
/// on the calendar, which rejects the whole form.
fn resolve_side(caps: &Captures<'_>, name: &str, now: Instant) -> Option<Option<Instant>> {
    match named_capture(caps, name) {
        None => Some(None),
        Some(fragment) => time_string::resolve(&fragment, now).map(Some),
    }
}
