//! Clock-time fragments captured from explicit ranges ("10", "10:30").

use crate::calendar::{self, Instant};

/// Hour and minute parsed from an `H` or `H:MM` fragment.
///
/// Neither field is range-checked; see [`calendar::at_clock_time`] for how
/// out-of-range values land on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Parse `H` (read as `H:00`) or `H:MM`.
    ///
    /// Returns `None` for an empty string, non-digit content, or digits too
    /// long to fit a `u32`.
    pub fn parse(s: &str) -> Option<Self> {
        let (hour, minute) = s.split_once(':').unwrap_or((s, "00"));
        Some(Self {
            hour: parse_digits(hour)?,
            minute: parse_digits(minute)?,
        })
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Project a captured fragment onto the reference instant's day.
pub fn resolve(fragment: &str, now: Instant) -> Option<Instant> {
    let time = ClockTime::parse(fragment)?;
    calendar::at_clock_time(now, time.hour, time.minute)
}
