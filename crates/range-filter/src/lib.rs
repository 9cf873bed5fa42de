//! # range-filter
//!
//! Extract time ranges from free-text activity notes.
//!
//! Users write "meeting 10-12" or "worked on X last week" instead of filling
//! in separate start/stop fields. This crate finds the range, returns it as a
//! [`TimeRange`] anchored to a reference clock, and strips the matched text
//! so the rest of the note can serve as a description.
//!
//! ## Modules
//!
//! - [`filter`] — `RangeFilterParser`: explicit clock-time ranges first, then keywords
//! - [`note`] — Chain of parsers producing range + description for one note
//! - [`parser`] — The `Parser` contract and `ParseResult`
//! - [`description`] — Passthrough parser for the leftover text
//! - [`keyword`] — Relative-date phrases ("yesterday", "last 3 weeks")
//! - [`time_string`] — `H` / `H:MM` fragments projected onto the reference day
//! - [`calendar`] — Start/end of day, week, month, year and unit arithmetic
//! - [`clock`] — Reference clock (system, zoned, or fixed)
//! - [`range`] — `TimeRange` and `MatchRecord`
//! - [`error`] — Error types

pub mod calendar;
pub mod clock;
pub mod description;
pub mod error;
mod explicit;
pub mod filter;
pub mod keyword;
pub mod note;
pub mod parser;
pub mod range;
mod rule;
pub mod time_string;

pub use calendar::{Instant, Unit, WeekStartDay};
pub use clock::{parse_instant, Clock};
pub use description::DescriptionParser;
pub use error::RangeError;
pub use filter::{FilterOptions, RangeFilterParser};
pub use keyword::CurrentPeriod;
pub use note::NoteParser;
pub use parser::{ParseResult, Parser};
pub use range::{MatchRecord, TimeRange};
