//! Reference clock: the "now" every relative range is anchored to.
//!
//! A [`Clock`] is read once per extraction, and the resulting [`Instant`] is
//! passed by value to every rule of that extraction.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::calendar::Instant;
use crate::error::RangeError;

/// Where a parser takes its reference instant from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The system clock in the local timezone, read at each extraction.
    #[default]
    System,
    /// The system clock read in an IANA timezone, at each extraction.
    Zoned(Tz),
    /// A fixed instant, for deterministic results.
    Fixed(Instant),
}

impl Clock {
    /// A clock pinned to `now`.
    pub fn fixed(now: Instant) -> Self {
        Clock::Fixed(now)
    }

    /// A system clock read in the named IANA timezone (e.g. `"Europe/Berlin"`).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidTimezone`] if the name is not a known IANA timezone.
    pub fn in_timezone(name: &str) -> Result<Self, RangeError> {
        parse_timezone(name).map(Clock::Zoned)
    }

    /// The current reference instant.
    pub fn now(&self) -> Instant {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Zoned(tz) => Utc::now().with_timezone(tz).naive_local(),
            Clock::Fixed(now) => *now,
        }
    }
}

/// Parse a reference datetime.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]`, or RFC 3339.
/// An RFC 3339 value keeps its own wall-clock time; the offset is dropped.
///
/// # Errors
///
/// Returns [`RangeError::InvalidDatetime`] if none of the formats match.
pub fn parse_instant(s: &str) -> Result<Instant, RangeError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| RangeError::InvalidDatetime(format!("'{}'", s)))
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz, RangeError> {
    s.parse::<Tz>()
        .map_err(|_| RangeError::InvalidTimezone(format!("'{}'", s)))
}
