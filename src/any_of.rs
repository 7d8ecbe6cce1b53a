use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that tries alternatives in order and returns the first success
///
/// Every alternative starts from the same input. Ordering matters: an earlier
/// alternative shadows any later one that would also match. When all of them
/// fail the individual errors are dropped in favour of a single
/// "none matched" failure. Errors that are not recoverable stop the search
/// and are returned as they are.
pub struct AnyOf<P> {
    parsers: Vec<P>,
}

impl<P> AnyOf<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        AnyOf { parsers }
    }
}

impl<'code, P> Parser<'code> for AnyOf<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        for parser in &self.parsers {
            match parser.parse(input) {
                Ok(success) => return Ok(success),
                Err(error) if error.is_recoverable() => continue,
                Err(error) => return Err(error),
            }
        }
        Err(ParseError::none_matched())
    }
}

/// Convenience function to create an AnyOf parser
pub fn any_of<'code, P>(parsers: impl IntoIterator<Item = P>) -> AnyOf<P>
where
    P: Parser<'code>,
{
    AnyOf::new(parsers.into_iter().collect())
}

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Behaves like a two-element [`AnyOf`] for parsers of different types.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(input) {
            Err(error) if error.is_recoverable() => {}
            result => return result,
        }
        match self.parser2.parse(input) {
            Err(error) if error.is_recoverable() => Err(ParseError::none_matched()),
            result => result,
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::BoxedExt;
    use crate::fold::fold1;
    use crate::map::MapExt;
    use crate::pure::pure;
    use crate::result::Success;
    use crate::test_util::Counting;
    use crate::text::is_char::IsChar;
    use crate::text::{char, string};
    use std::cell::Cell;

    #[test]
    fn test_any_of_first_succeeds() {
        let parser = any_of([char('a'), char('b')]);
        assert_eq!(parser.parse("abc"), Ok(Success::new('a', "bc")));
    }

    #[test]
    fn test_any_of_later_succeeds() {
        let parser = any_of([char('a'), char('b'), char('c')]);
        assert_eq!(parser.parse("cab"), Ok(Success::new('c', "ab")));
    }

    #[test]
    fn test_any_of_all_fail() {
        let parser = any_of([char('a'), char('b')]);
        assert_eq!(parser.parse("xyz"), Err(ParseError::none_matched()));
    }

    #[test]
    fn test_any_of_empty_list() {
        let parser = any_of(Vec::<IsChar>::new());
        assert_eq!(parser.parse("abc"), Err(ParseError::none_matched()));
    }

    #[test]
    fn test_any_of_left_precedence() {
        // Both alternatives match; the first one wins even though it is shorter
        let parser = any_of(["*", "**"].map(string));
        assert_eq!(parser.parse("**2"), Ok(Success::new("*", "*2")));

        let parser = any_of(["**", "*"].map(string));
        assert_eq!(parser.parse("**2"), Ok(Success::new("**", "2")));
    }

    #[test]
    fn test_any_of_each_alternative_sees_original_input() {
        let parser = any_of(["abx", "aby", "ab"].map(string));
        assert_eq!(parser.parse("abz"), Ok(Success::new("ab", "z")));
    }

    #[test]
    fn test_any_of_stops_after_first_success() {
        let calls = Cell::new(0);
        let parser = any_of([
            Counting::new(char('a'), &calls),
            Counting::new(char('a'), &calls),
        ]);

        parser.parse("a").unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_any_of_propagates_contract_errors() {
        let broken = fold1(pure(Vec::<char>::new()), |first, _| first);
        let parser = any_of([broken.boxed(), char('a').boxed()]);
        assert_eq!(parser.parse("a"), Err(ParseError::EmptyFold));
    }

    #[test]
    fn test_or_method_chain() {
        let parser = char('a').or(char('b')).or(char('c'));
        assert_eq!(parser.parse("c"), Ok(Success::new('c', "")));
        assert_eq!(parser.parse("d"), Err(ParseError::none_matched()));
    }

    #[test]
    fn test_or_mixed_types() {
        let parser = or(string("yes").map(|_| true), char('n').map(|_| false));
        assert_eq!(parser.parse("yes!"), Ok(Success::new(true, "!")));
        assert_eq!(parser.parse("no"), Ok(Success::new(false, "o")));
    }
}
