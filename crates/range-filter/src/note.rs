//! A chain of parsers applied to one note.
//!
//! Each parser sees the text left over by the one before it and adds its
//! fields to the shared [`ParseResult`]. The default chain splits a time
//! range off the note and keeps the rest as its description:
//!
//! ```
//! use range_filter::{parse_instant, Clock, NoteParser};
//!
//! let now = parse_instant("2015-08-31 22:25").unwrap();
//! let mut notes = NoteParser::with_clock(Clock::fixed(now)).unwrap();
//!
//! let result = notes.parse("meeting 10-12");
//! assert_eq!(result.description.as_deref(), Some("meeting"));
//! assert_eq!(result.range.unwrap().start, parse_instant("2015-08-31 10:00").ok());
//! ```

use log::debug;

use crate::clock::Clock;
use crate::description::DescriptionParser;
use crate::error::Result;
use crate::filter::{FilterOptions, RangeFilterParser};
use crate::parser::{ParseResult, Parser};

pub struct NoteParser {
    parsers: Vec<Box<dyn Parser>>,
}

impl std::fmt::Debug for NoteParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.parsers.iter().map(|p| p.name()).collect();
        f.debug_struct("NoteParser").field("parsers", &names).finish()
    }
}

impl NoteParser {
    /// The default chain (range, then description) on the system clock.
    pub fn new() -> Result<Self> {
        Self::with_options(Clock::default(), FilterOptions::default())
    }

    pub fn with_clock(clock: Clock) -> Result<Self> {
        Self::with_options(clock, FilterOptions::default())
    }

    pub fn with_options(clock: Clock, options: FilterOptions) -> Result<Self> {
        Ok(Self::from_parsers(vec![
            Box::new(RangeFilterParser::with_options(clock, options)?),
            Box::new(DescriptionParser::new()),
        ]))
    }

    /// A custom chain, run in the given order.
    pub fn from_parsers(parsers: Vec<Box<dyn Parser>>) -> Self {
        Self { parsers }
    }

    /// Append a parser to the end of the chain.
    pub fn register(&mut self, parser: Box<dyn Parser>) {
        self.parsers.push(parser);
    }

    /// Names of the chained parsers, in order.
    pub fn names(&self) -> Vec<&str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Run every parser over `note` and return the combined result.
    pub fn parse(&mut self, note: &str) -> ParseResult {
        let mut result = ParseResult::default();
        let mut remaining = note.to_string();

        for parser in &mut self.parsers {
            parser.set_result(result);
            result = parser.run(&remaining).clone();
            remaining = parser.clean(&remaining);
            debug!("parser '{}' left '{}'", parser.name(), remaining);
        }

        result
    }
}
