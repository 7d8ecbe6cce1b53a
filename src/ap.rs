use crate::parser::Parser;
use crate::result::{ParseResult, Success};

/// Applicative application: runs a parser producing a function, then a parser
/// producing its argument, and applies one to the other
///
/// Input is consumed strictly left to right. If the argument parser fails the
/// failure is returned as is; there is no backtracking into the function
/// parser.
pub struct Ap<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Ap<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Ap { function, argument }
    }
}

impl<'code, PF, PA, F, B> Parser<'code> for Ap<PF, PA>
where
    PF: Parser<'code, Output = F>,
    PA: Parser<'code>,
    F: FnOnce(PA::Output) -> B,
{
    type Output = B;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let Success { value: f, rest } = self.function.parse(input)?;
        let Success { value: a, rest } = self.argument.parse(rest)?;
        Ok(Success::new(f(a), rest))
    }
}

/// Convenience function to create an Ap parser
pub fn ap<'code, PF, PA, F, B>(function: PF, argument: PA) -> Ap<PF, PA>
where
    PF: Parser<'code, Output = F>,
    PA: Parser<'code>,
    F: FnOnce(PA::Output) -> B,
{
    Ap::new(function, argument)
}

/// Extension trait to add .ap() method support for function-producing parsers
pub trait ApExt<'code>: Parser<'code> + Sized {
    fn ap<PA, B>(self, argument: PA) -> Ap<Self, PA>
    where
        PA: Parser<'code>,
        Self::Output: FnOnce(PA::Output) -> B,
    {
        Ap::new(self, argument)
    }
}

/// Implement ApExt for all parsers
impl<'code, P> ApExt<'code> for P where P: Parser<'code> {}
