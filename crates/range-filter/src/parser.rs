//! The contract every note parser follows.
//!
//! A parser owns a [`ParseResult`] that it fills in on [`Parser::run`], and
//! remembers enough about its last match to strip the consumed text with
//! [`Parser::clean`]. Chained parsers hand the accumulated result on through
//! [`Parser::set_result`].

use serde::Serialize;

use crate::range::TimeRange;

/// Fields extracted from a note so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParseResult {
    /// No field has been extracted.
    pub fn is_empty(&self) -> bool {
        self.range.is_none() && self.description.is_none()
    }
}

pub trait Parser: Send + Sync {
    /// Short identifier used in logs (e.g. `"range"`).
    fn name(&self) -> &str;

    /// Extract this parser's fields from `input` into its result and return it.
    fn run(&mut self, input: &str) -> &ParseResult;

    /// Remove the text consumed by the last [`run`](Parser::run) from `input`.
    ///
    /// Meant to be called with the same input that was passed to `run`.
    fn clean(&self, input: &str) -> String;

    /// The result so far.
    fn result(&self) -> &ParseResult;

    /// Replace the result so far, e.g. with the output of a previous parser.
    fn set_result(&mut self, result: ParseResult);
}
