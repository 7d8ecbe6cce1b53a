use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// A parser combinator that also yields the slice of input the wrapped parser consumed
///
/// Fails with [`ParseError::InvalidRest`] when the wrapped parser hands back a
/// remainder that cannot be a suffix of its input.
pub struct Consumed<P> {
    parser: P,
}

impl<P> Consumed<P> {
    pub fn new(parser: P) -> Self {
        Consumed { parser }
    }
}

impl<'code, P> Parser<'code> for Consumed<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, &'code str);

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let success = self.parser.parse(input)?;
        let text = input
            .get(..success.consumed(input))
            .filter(|text| text.len() + success.rest.len() == input.len())
            .ok_or(ParseError::InvalidRest)?;
        Ok(success.map(|value| (value, text)))
    }
}

/// Convenience function to create a Consumed parser
pub fn consumed<'code, P>(parser: P) -> Consumed<P>
where
    P: Parser<'code>,
{
    Consumed::new(parser)
}

/// Extension trait to add .consumed() method support for parsers
pub trait ConsumedExt<'code>: Parser<'code> + Sized {
    fn consumed(self) -> Consumed<Self> {
        Consumed::new(self)
    }
}

/// Implement ConsumedExt for all parsers
impl<'code, P> ConsumedExt<'code> for P where P: Parser<'code> {}
