use crate::parser::Parser;
use crate::result::{ParseResult, Success};

/// Parser combinator that runs a list of parsers one after another
///
/// Each parser sees the input left by the previous one. The first failure is
/// returned verbatim and the parsers after it are never run.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, P> Parser<'code> for Sequence<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut rest = input;

        for parser in &self.parsers {
            let success = parser.parse(rest)?;
            values.push(success.value);
            rest = success.rest;
        }

        Ok(Success::new(values, rest))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, P>(parsers: impl IntoIterator<Item = P>) -> Sequence<P>
where
    P: Parser<'code>,
{
    Sequence::new(parsers.into_iter().collect())
}
