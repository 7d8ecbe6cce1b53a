use crate::error::ParseError;
use crate::optional::optional;
use crate::parser::Parser;
use crate::result::{ParseResult, Success};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The remainder is the one left by the last successful match. The wrapped
/// parser must consume input whenever it succeeds; a success that consumes
/// nothing ends the loop with [`ParseError::NoProgress`].
pub struct OneOrMore<P> {
    parser: P,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore { parser }
    }
}

impl<'code, P> Parser<'code> for OneOrMore<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::new();
        let mut rest = input;

        loop {
            match self.parser.parse(rest) {
                Ok(success) => {
                    if success.rest.len() == rest.len() {
                        return Err(ParseError::NoProgress {
                            matched: values.len(),
                        });
                    }
                    values.push(success.value);
                    rest = success.rest;
                }
                // First parse must succeed
                Err(error) if values.is_empty() => return Err(error),
                Err(error) if error.is_recoverable() => break,
                Err(error) => return Err(error),
            }
        }

        Ok(Success::new(values, rest))
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<'code, P>(parser: P) -> OneOrMore<P>
where
    P: Parser<'code>,
{
    OneOrMore::new(parser)
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Built as an optional [`OneOrMore`], so the same progress requirement applies.
pub struct ZeroOrMore<P> {
    inner: OneOrMore<P>,
}

impl<P> ZeroOrMore<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore {
            inner: OneOrMore::new(parser),
        }
    }
}

impl<'code, P> Parser<'code> for ZeroOrMore<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let success = optional(&self.inner).parse(input)?;
        Ok(success.map(Option::unwrap_or_default))
    }
}

/// Convenience function to create a ZeroOrMore parser
pub fn zero_or_more<'code, P>(parser: P) -> ZeroOrMore<P>
where
    P: Parser<'code>,
{
    ZeroOrMore::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pure::pure;
    use crate::text::{char, one_or_more_chars, string, symbol, zero_or_more_chars};
    use proptest::prelude::*;

    #[test]
    fn test_one_or_more_zero_matches_fails() {
        let parser = one_or_more(char('a'));
        assert_eq!(parser.parse("xyz").unwrap_err(), char('a').parse("xyz").unwrap_err());
    }

    #[test]
    fn test_one_or_more_one_match() {
        let parser = one_or_more(char('a'));
        assert_eq!(parser.parse("abc"), Ok(Success::new(vec!['a'], "bc")));
    }

    #[test]
    fn test_one_or_more_multiple_matches() {
        let parser = one_or_more(char('a'));
        assert_eq!(parser.parse("aaabcd"), Ok(Success::new(vec!['a', 'a', 'a'], "bcd")));
    }

    #[test]
    fn test_one_or_more_all_matches() {
        let parser = one_or_more(symbol());
        assert_eq!(
            parser.parse("hello"),
            Ok(Success::new(vec!['h', 'e', 'l', 'l', 'o'], ""))
        );
    }

    #[test]
    fn test_one_or_more_keeps_rest_of_last_success() {
        // The failed third attempt leaves the remainder of the second success
        let parser = one_or_more(string("abab"));
        assert_eq!(parser.parse("ababababc"), Ok(Success::new(vec!["abab", "abab"], "c")));
    }

    #[test]
    fn test_one_or_more_empty_input() {
        assert!(one_or_more(char('a')).parse("").is_err());
    }

    #[test]
    fn test_one_or_more_detects_no_progress() {
        let parser = one_or_more(zero_or_more_chars(|c| c == ' '));
        assert_eq!(parser.parse("  x"), Err(ParseError::NoProgress { matched: 1 }));
        assert_eq!(parser.parse("x"), Err(ParseError::NoProgress { matched: 0 }));
    }

    #[test]
    fn test_zero_or_more_zero_matches() {
        let parser = zero_or_more(char('a'));
        assert_eq!(parser.parse("xyz"), Ok(Success::new(vec![], "xyz")));
    }

    #[test]
    fn test_zero_or_more_multiple_matches() {
        let parser = zero_or_more(char('a'));
        assert_eq!(parser.parse("aab"), Ok(Success::new(vec!['a', 'a'], "b")));
    }

    #[test]
    fn test_zero_or_more_empty_input() {
        let parser = zero_or_more(char('a'));
        assert_eq!(parser.parse(""), Ok(Success::new(vec![], "")));
    }

    #[test]
    fn test_zero_or_more_detects_no_progress() {
        let parser = zero_or_more(pure('x'));
        assert_eq!(parser.parse("abc"), Err(ParseError::NoProgress { matched: 0 }));
    }

    proptest! {
        #[test]
        fn test_one_or_more_needs_first_match(input in "[a-z]\\PC*") {
            let digits = one_or_more_chars(|c| c.is_ascii_digit(), "expected digits");
            prop_assert!(digits.parse(&input).is_err());
            prop_assert!(one_or_more(digits).parse(&input).is_err());
        }

        #[test]
        fn test_zero_or_more_counts_prefix(count in 0usize..8, tail in "[b-z]{0,4}") {
            let input = format!("{}{}", "a".repeat(count), tail);
            let Success { value, rest } = zero_or_more(char('a')).parse(&input).unwrap();
            prop_assert_eq!(value.len(), count);
            prop_assert_eq!(rest, tail.as_str());
        }
    }
}
