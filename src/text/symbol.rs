use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Success};

/// Parser that consumes and returns a single character
#[derive(Debug, Clone, Copy)]
pub struct Symbol;

impl<'code> Parser<'code> for Symbol {
    type Output = char;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) => Ok(Success::new(c, chars.as_str())),
            None => Err(ParseError::failure("expected a symbol, got empty string")),
        }
    }
}

/// Convenience function to create a Symbol parser
pub fn symbol() -> Symbol {
    Symbol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_ascii() {
        assert_eq!(symbol().parse("abc"), Ok(Success::new('a', "bc")));
    }

    #[test]
    fn test_symbol_multibyte() {
        let input = "こんにちは";
        let Success { value, rest } = symbol().parse(input).unwrap();
        assert_eq!(value, 'こ');
        assert_eq!(rest, "んにちは");
    }

    #[test]
    fn test_symbol_last_char() {
        assert_eq!(symbol().parse("x"), Ok(Success::new('x', "")));
    }

    #[test]
    fn test_symbol_empty_input() {
        let error = symbol().parse("").unwrap_err();
        assert_eq!(error.message(), Some("expected a symbol, got empty string"));
    }
}
