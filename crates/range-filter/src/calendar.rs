//! Calendar arithmetic over reference instants.
//!
//! An [`Instant`] is a wall-clock `NaiveDateTime`. Every function here takes
//! the instant by value and returns a new one; nothing is adjusted in place,
//! so one reference "now" can be handed to any number of rules without one
//! of them shifting it for the others.
//!
//! Functions return `None` when the result falls outside the range chrono
//! can represent.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// A point in wall-clock time. Carries whatever zone the caller read it in.
pub type Instant = NaiveDateTime;

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week for week-based keyword ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStartDay {
    /// ISO 8601 standard (Monday = day 0 of the week).
    #[default]
    Monday,
    /// US/Canada convention (Sunday = day 0 of the week).
    Sunday,
}

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> i64 {
    match week_start {
        WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
        WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
    }
}

// ── Units ───────────────────────────────────────────────────────────────────

/// A calendar unit that keyword phrases count in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Parse a singular or plural unit word ("day", "weeks", ...).
    pub fn from_word(s: &str) -> Option<Self> {
        match s {
            "day" | "days" => Some(Unit::Day),
            "week" | "weeks" => Some(Unit::Week),
            "month" | "months" => Some(Unit::Month),
            "year" | "years" => Some(Unit::Year),
            _ => None,
        }
    }
}

// ── Boundaries ──────────────────────────────────────────────────────────────

/// First instant (00:00:00) of the `unit` containing `instant`.
pub fn start_of(instant: Instant, unit: Unit, ws: WeekStartDay) -> Option<Instant> {
    let date = instant.date();
    let first = match unit {
        Unit::Day => date,
        Unit::Week => {
            let days_since_start = days_from_week_start(date.weekday(), ws);
            date.checked_sub_signed(Duration::days(days_since_start))?
        }
        Unit::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?,
        Unit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)?,
    };
    first.and_hms_opt(0, 0, 0)
}

/// Last second (23:59:59) of the `unit` containing `instant`.
pub fn end_of(instant: Instant, unit: Unit, ws: WeekStartDay) -> Option<Instant> {
    let date = instant.date();
    let last = match unit {
        Unit::Day => date,
        Unit::Week => {
            let days_until_end = 6 - days_from_week_start(date.weekday(), ws);
            date.checked_add_signed(Duration::days(days_until_end))?
        }
        Unit::Month => last_day_of_month(date.year(), date.month())?,
        Unit::Year => NaiveDate::from_ymd_opt(date.year(), 12, 31)?,
    };
    last.and_hms_opt(23, 59, 59)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

// ── Arithmetic ──────────────────────────────────────────────────────────────

/// Go back `n` units from `instant`.
///
/// Month and year steps clamp to the last valid day (Mar 31 minus one month
/// is Feb 28/29), keeping the time of day.
pub fn subtract(instant: Instant, n: u32, unit: Unit) -> Option<Instant> {
    match unit {
        Unit::Day => instant.checked_sub_signed(Duration::try_days(i64::from(n))?),
        Unit::Week => instant.checked_sub_signed(Duration::try_weeks(i64::from(n))?),
        Unit::Month => instant.checked_sub_months(Months::new(n)),
        Unit::Year => instant.checked_sub_months(Months::new(n.checked_mul(12)?)),
    }
}

/// Set the hour and minute of `instant`, keeping its date and seconds.
///
/// Values past 23 hours or 59 minutes roll forward instead of being
/// rejected: hour 25 lands at 01:00 on the following day.
pub fn at_clock_time(instant: Instant, hour: u32, minute: u32) -> Option<Instant> {
    let midnight = instant.date().and_hms_opt(0, 0, 0)?;
    let sub_minute = Duration::seconds(i64::from(instant.second()))
        + Duration::nanoseconds(i64::from(instant.nanosecond()));
    midnight
        .checked_add_signed(Duration::try_hours(i64::from(hour))?)?
        .checked_add_signed(Duration::try_minutes(i64::from(minute))?)?
        .checked_add_signed(sub_minute)
}

// ── Tests ───────────────────────────────────────────────────────────────────
