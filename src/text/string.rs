use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Success};
use std::borrow::Cow;

/// Parser that matches an exact literal at the start of the input
#[derive(Debug, Clone)]
pub struct IsString {
    expected: Cow<'static, str>,
}

impl IsString {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// The input prefix spanning as many chars as the literal has
    fn found<'code>(&self, input: &'code str) -> &'code str {
        let width = self.expected.chars().count();
        let end = input
            .char_indices()
            .nth(width)
            .map_or(input.len(), |(index, _)| index);
        &input[..end]
    }
}

impl<'code> Parser<'code> for IsString {
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match input.strip_prefix(&*self.expected) {
            Some(rest) => {
                let matched = &input[..self.expected.len()];
                Ok(Success::new(matched, rest))
            }
            None => Err(ParseError::failure(format!(
                "expected '{}', got '{}' instead",
                self.expected,
                self.found(input)
            ))),
        }
    }
}

/// Convenience function to create an IsString parser
pub fn string(expected: impl Into<Cow<'static, str>>) -> IsString {
    IsString::new(expected)
}
