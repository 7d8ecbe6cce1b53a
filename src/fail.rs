use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with a fixed message
pub struct Fail<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, _input: &'code str) -> ParseResult<'code, T> {
        Err(ParseError::failure(self.message.clone()))
    }
}

/// Parser that rejects every input; useful as a `chain` outcome
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(message)
}
