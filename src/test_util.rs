use crate::parser::Parser;
use crate::result::ParseResult;
use std::cell::Cell;

/// Test double that counts how often the wrapped parser is invoked
pub(crate) struct Counting<'calls, P> {
    parser: P,
    calls: &'calls Cell<usize>,
}

impl<'calls, P> Counting<'calls, P> {
    pub(crate) fn new(parser: P, calls: &'calls Cell<usize>) -> Self {
        Counting { parser, calls }
    }
}

impl<'code, P> Parser<'code> for Counting<'_, P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.calls.set(self.calls.get() + 1);
        self.parser.parse(input)
    }
}
