use crate::result::ParseResult;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse a prefix of `input`
    ///
    /// Returns the parsed value together with the unconsumed suffix of
    /// `input` on success. Parsers never mutate anything, so running the same
    /// parser twice on the same input gives the same result.
    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}
