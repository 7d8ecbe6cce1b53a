use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Success};
use crate::text::symbol::symbol;

/// Parser that matches a specific character
#[derive(Debug, Clone, Copy)]
pub struct IsChar {
    expected: char,
}

impl IsChar {
    pub fn new(expected: char) -> Self {
        IsChar { expected }
    }
}

impl<'code> Parser<'code> for IsChar {
    type Output = char;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let Success { value, rest } = symbol().parse(input)?;
        if value != self.expected {
            return Err(ParseError::failure(format!(
                "expected '{}' but got '{}'",
                self.expected, value
            )));
        }
        Ok(Success::new(value, rest))
    }
}

/// Convenience function to create an IsChar parser
pub fn char(expected: char) -> IsChar {
    IsChar::new(expected)
}
