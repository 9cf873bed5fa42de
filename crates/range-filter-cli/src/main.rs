//! `range-filter` — split a time range off a free-text activity note.
//!
//! ```text
//! $ range-filter --now "2015-08-31 22:25" meeting 10-12
//! start:       2015-08-31 10:00:00
//! stop:        2015-08-31 12:00:00
//! description: meeting
//! ```
//!
//! Notes that begin with a dash (`-12:00`) must follow `--`.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use range_filter::{
    parse_instant, Clock, CurrentPeriod, FilterOptions, Instant, NoteParser, ParseResult,
    WeekStartDay,
};

#[derive(Parser, Debug)]
#[command(
    name = "range-filter",
    version,
    about = "Extract a time range from a free-text activity note"
)]
struct Cli {
    /// The note to parse; several words are joined with single spaces
    #[arg(required = true)]
    note: Vec<String>,

    /// Reference "now", e.g. "2015-08-31 22:25" (defaults to the system clock)
    #[arg(long)]
    now: Option<String>,

    /// IANA timezone used to read the system clock, e.g. "Europe/Berlin"
    #[arg(long, conflicts_with = "now")]
    timezone: Option<String>,

    /// First day of the week for week-based keywords
    #[arg(long, value_enum, default_value_t = WeekStart::Monday)]
    week_start: WeekStart,

    /// How "current <unit>" picks its start
    #[arg(long, value_enum, default_value_t = CurrentMode::Week)]
    current_period: CurrentMode,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log which rule matched
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum WeekStart {
    Monday,
    Sunday,
}

impl From<WeekStart> for WeekStartDay {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Monday => WeekStartDay::Monday,
            WeekStart::Sunday => WeekStartDay::Sunday,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CurrentMode {
    /// Always the start of the current week
    Week,
    /// The start of the unit written in the note
    Captured,
}

impl From<CurrentMode> for CurrentPeriod {
    fn from(value: CurrentMode) -> Self {
        match value {
            CurrentMode::Week => CurrentPeriod::Week,
            CurrentMode::Captured => CurrentPeriod::Captured,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let clock = build_clock(cli.now.as_deref(), cli.timezone.as_deref())?;
    let options = FilterOptions {
        week_start: cli.week_start.into(),
        current_period: cli.current_period.into(),
    };
    let mut notes =
        NoteParser::with_options(clock, options).context("Failed to build note parser")?;

    let note = cli.note.join(" ");
    log::info!("parsing note '{}' with {:?}", note, clock);
    let result = notes.parse(&note);

    if cli.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{json}");
    } else {
        print!("{}", render(&result));
    }

    Ok(())
}

fn build_clock(now: Option<&str>, timezone: Option<&str>) -> Result<Clock> {
    match (now, timezone) {
        (Some(now), _) => {
            let instant = parse_instant(now).context("Invalid --now value")?;
            Ok(Clock::fixed(instant))
        }
        (None, Some(tz)) => Clock::in_timezone(tz).context("Invalid --timezone value"),
        (None, None) => Ok(Clock::System),
    }
}

fn render(result: &ParseResult) -> String {
    let mut out = String::new();
    match &result.range {
        Some(range) => {
            out.push_str(&format!("start:       {}\n", side(range.start)));
            out.push_str(&format!("stop:        {}\n", side(range.stop)));
        }
        None => out.push_str("no range found\n"),
    }
    if let Some(description) = &result.description {
        out.push_str(&format!("description: {description}\n"));
    }
    out
}

fn side(instant: Option<Instant>) -> String {
    instant
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "open".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use range_filter::TimeRange;

    fn instant(s: &str) -> Instant {
        parse_instant(s).unwrap()
    }

    #[test]
    fn test_render_full_result() {
        let result = ParseResult {
            range: Some(TimeRange::between(
                instant("2015-08-31 10:00"),
                instant("2015-08-31 12:00"),
            )),
            description: Some("meeting".to_string()),
        };
        assert_eq!(
            render(&result),
            "start:       2015-08-31 10:00:00\n\
             stop:        2015-08-31 12:00:00\n\
             description: meeting\n"
        );
    }

    #[test]
    fn test_render_open_side() {
        let result = ParseResult {
            range: Some(TimeRange::starting(instant("2015-08-31 10:00"))),
            description: None,
        };
        assert_eq!(
            render(&result),
            "start:       2015-08-31 10:00:00\nstop:        open\n"
        );
    }

    #[test]
    fn test_render_no_range() {
        let result = ParseResult {
            range: None,
            description: Some("reading".to_string()),
        };
        assert_eq!(render(&result), "no range found\ndescription: reading\n");
    }

    #[test]
    fn test_build_clock_fixed() {
        let clock = build_clock(Some("2015-08-31 22:25"), None).unwrap();
        assert_eq!(clock, Clock::fixed(instant("2015-08-31 22:25")));
    }

    #[test]
    fn test_build_clock_invalid_inputs() {
        assert!(build_clock(Some("not a date"), None).is_err());
        assert!(build_clock(None, Some("Nowhere/Special")).is_err());
    }

    #[test]
    fn test_build_clock_default_system() {
        assert_eq!(build_clock(None, None).unwrap(), Clock::System);
    }
}
