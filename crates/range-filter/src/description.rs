//! Passthrough parser: whatever text is left becomes the description.

use crate::parser::{ParseResult, Parser};

#[derive(Debug, Clone, Default)]
pub struct DescriptionParser {
    result: ParseResult,
}

impl DescriptionParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Parser for DescriptionParser {
    fn name(&self) -> &str {
        "description"
    }

    /// Store `input` verbatim as the description. Empty input leaves the
    /// field unset.
    fn run(&mut self, input: &str) -> &ParseResult {
        self.result.description = (!input.is_empty()).then(|| input.to_string());
        &self.result
    }

    /// The whole input is consumed.
    fn clean(&self, _input: &str) -> String {
        String::new()
    }

    fn result(&self) -> &ParseResult {
        &self.result
    }

    fn set_result(&mut self, result: ParseResult) {
        self.result = result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stores_input() {
        let mut p = DescriptionParser::new();
        let result = p.run("write the release notes");
        assert_eq!(result.description.as_deref(), Some("write the release notes"));
        assert!(result.range.is_none());
    }

    #[test]
    fn test_run_empty_input() {
        let mut p = DescriptionParser::new();
        assert!(p.run("").is_empty());
    }

    #[test]
    fn test_clean_consumes_everything() {
        let p = DescriptionParser::new();
        assert_eq!(p.clean("anything at all"), "");
    }
}
