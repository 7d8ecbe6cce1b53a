use crate::parser::Parser;
use crate::result::ParseResult;

/// Type-erased parser
///
/// Lets parsers of different concrete types but the same output share a
/// `Vec`, e.g. as the alternatives of [`any_of`](fn@crate::any_of), or be
/// returned from the different arms of a [`chain`](fn@crate::chain) callback.
pub struct BoxedParser<'code, T> {
    inner: Box<dyn Parser<'code, Output = T> + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new(parser: impl Parser<'code, Output = T> + 'code) -> Self {
        BoxedParser {
            inner: Box::new(parser),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, T> {
        self.inner.parse(input)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
