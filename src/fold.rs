use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Success};

/// Reduces the sequence produced by a parser, left to right, from a seed
pub struct Fold<P, R, B> {
    parser: P,
    reducer: R,
    initial: B,
}

impl<P, R, B> Fold<P, R, B> {
    pub fn new(parser: P, reducer: R, initial: B) -> Self {
        Fold {
            parser,
            reducer,
            initial,
        }
    }
}

impl<'code, P, R, B> Parser<'code> for Fold<P, R, B>
where
    P: Parser<'code>,
    P::Output: IntoIterator,
    R: Fn(B, <P::Output as IntoIterator>::Item) -> B,
    B: Clone,
{
    type Output = B;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let Success { value, rest } = self.parser.parse(input)?;
        let folded = value.into_iter().fold(self.initial.clone(), &self.reducer);
        Ok(Success::new(folded, rest))
    }
}

/// Reduces a non-empty sequence produced by a parser, using its first
/// element as the seed
///
/// The wrapped parser must never yield an empty sequence, which holds for
/// anything built on [`one_or_more`](crate::one_or_more). An empty sequence
/// is reported as [`ParseError::EmptyFold`].
pub struct Fold1<P, R> {
    parser: P,
    reducer: R,
}

impl<P, R> Fold1<P, R> {
    pub fn new(parser: P, reducer: R) -> Self {
        Fold1 { parser, reducer }
    }
}

impl<'code, P, R> Parser<'code> for Fold1<P, R>
where
    P: Parser<'code>,
    P::Output: IntoIterator,
    R: Fn(
        <P::Output as IntoIterator>::Item,
        <P::Output as IntoIterator>::Item,
    ) -> <P::Output as IntoIterator>::Item,
{
    type Output = <P::Output as IntoIterator>::Item;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let Success { value, rest } = self.parser.parse(input)?;
        let folded = value
            .into_iter()
            .reduce(&self.reducer)
            .ok_or(ParseError::EmptyFold)?;
        Ok(Success::new(folded, rest))
    }
}

/// Convenience function to create a Fold parser
pub fn fold<'code, P, R, B>(parser: P, reducer: R, initial: B) -> Fold<P, R, B>
where
    P: Parser<'code>,
    P::Output: IntoIterator,
    R: Fn(B, <P::Output as IntoIterator>::Item) -> B,
    B: Clone,
{
    Fold::new(parser, reducer, initial)
}

/// Convenience function to create a Fold1 parser
pub fn fold1<'code, P, R>(parser: P, reducer: R) -> Fold1<P, R>
where
    P: Parser<'code>,
    P::Output: IntoIterator,
    R: Fn(
        <P::Output as IntoIterator>::Item,
        <P::Output as IntoIterator>::Item,
    ) -> <P::Output as IntoIterator>::Item,
{
    Fold1::new(parser, reducer)
}

/// Extension trait to add .fold() and .fold1() to sequence-producing parsers
pub trait FoldExt<'code>: Parser<'code> + Sized
where
    Self::Output: IntoIterator,
{
    fn fold<R, B>(self, reducer: R, initial: B) -> Fold<Self, R, B>
    where
        R: Fn(B, <Self::Output as IntoIterator>::Item) -> B,
        B: Clone,
    {
        Fold::new(self, reducer, initial)
    }

    fn fold1<R>(self, reducer: R) -> Fold1<Self, R>
    where
        R: Fn(
            <Self::Output as IntoIterator>::Item,
            <Self::Output as IntoIterator>::Item,
        ) -> <Self::Output as IntoIterator>::Item,
    {
        Fold1::new(self, reducer)
    }
}

/// Implement FoldExt for all parsers producing sequences
impl<'code, P> FoldExt<'code> for P
where
    P: Parser<'code>,
    P::Output: IntoIterator,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::pure::pure;
    use crate::repeat::{one_or_more, zero_or_more};
    use crate::text::{char, satisfy, symbol};

    fn digit<'code>() -> impl Parser<'code, Output = u32> {
        satisfy(|c| c.is_ascii_digit(), "expected a digit").map(|c| c.to_digit(10).unwrap_or(0))
    }

    #[test]
    fn test_fold_sums_digits() {
        let parser = fold(one_or_more(digit()), |acc, d| acc + d, 0u32);
        assert_eq!(parser.parse("1234x"), Ok(Success::new(10, "x")));
    }

    #[test]
    fn test_fold_uses_seed_on_empty_sequence() {
        let parser = zero_or_more(char('a'))
            .fold(|acc: String, c| acc + &c.to_string(), String::from(">"));
        assert_eq!(parser.parse("bbb"), Ok(Success::new(String::from(">"), "bbb")));
        assert_eq!(parser.parse("aab"), Ok(Success::new(String::from(">aa"), "b")));
    }

    #[test]
    fn test_fold_is_left_to_right() {
        let parser = one_or_more(digit()).fold(|acc, d| acc * 10 + d, 0u32);
        assert_eq!(parser.parse("907"), Ok(Success::new(907, "")));
    }

    #[test]
    fn test_fold_propagates_failure() {
        let parser = fold(one_or_more(digit()), |acc, d| acc + d, 0u32);
        assert!(parser.parse("abc").is_err());
    }

    #[test]
    fn test_fold1_concatenates() {
        let parser = one_or_more(symbol().map(String::from)).fold1(|acc, s| acc + &s);
        assert_eq!(parser.parse("abc"), Ok(Success::new(String::from("abc"), "")));
    }

    #[test]
    fn test_fold1_empty_sequence_is_contract_error() {
        let parser = fold1(pure(Vec::<u32>::new()), |a, b| a + b);
        let error = parser.parse("abc").unwrap_err();
        assert_eq!(error, ParseError::EmptyFold);
        assert!(!error.is_recoverable());
    }
}
