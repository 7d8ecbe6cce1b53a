use crate::parser::Parser;
use crate::result::{ParseResult, Success};

/// Monadic bind: runs a parser, builds the next parser from its value, and
/// runs that on the remaining input
///
/// Unlike [`Ap`](crate::Ap), the second parser may depend on what the first
/// one produced, which makes context-sensitive grammars expressible.
pub struct Chain<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Chain { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for Chain<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let Success { value, rest } = self.parser.parse(input)?;
        (self.binder)(value).parse(rest)
    }
}

/// Convenience function to create a Chain parser
pub fn chain<'code, P, F, Q>(parser: P, binder: F) -> Chain<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Chain::new(parser, binder)
}

/// Extension trait to add .chain() method support for parsers
pub trait ChainExt<'code>: Parser<'code> + Sized {
    fn chain<F, Q>(self, binder: F) -> Chain<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Chain::new(self, binder)
    }
}

/// Implement ChainExt for all parsers
impl<'code, P> ChainExt<'code> for P where P: Parser<'code> {}
