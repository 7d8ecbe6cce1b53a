use crate::error::ParseError;
use std::borrow::Cow;

/// A successful parse: the produced value and the input left unconsumed
///
/// `rest` is always a suffix of the input the parser was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<'code, T> {
    pub value: T,
    pub rest: &'code str,
}

impl<'code, T> Success<'code, T> {
    pub fn new(value: T, rest: &'code str) -> Self {
        Success { value, rest }
    }

    /// Number of bytes of `input` consumed to reach `rest`
    ///
    /// Saturates at zero when `rest` is longer than `input`.
    pub fn consumed(&self, input: &str) -> usize {
        input.len().saturating_sub(self.rest.len())
    }

    /// Replace the value, keeping the remaining input
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<'code, U> {
        Success::new(f(self.value), self.rest)
    }
}

/// Outcome of running a parser
pub type ParseResult<'code, T> = Result<Success<'code, T>, ParseError>;

/// Build a successful result
pub fn success<T>(value: T, rest: &str) -> ParseResult<'_, T> {
    Ok(Success::new(value, rest))
}

/// Build a failed result with a message
pub fn failure<'code, T>(message: impl Into<Cow<'static, str>>) -> ParseResult<'code, T> {
    Err(ParseError::failure(message))
}

/// Queries on a [`ParseResult`] without taking it apart
pub trait ParseResultExt<'code, T> {
    fn is_success(&self) -> bool;

    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The parsed value, if any
    fn value(&self) -> Option<&T>;

    /// The unconsumed input, if the parse succeeded
    fn rest(&self) -> Option<&'code str>;
}

impl<'code, T> ParseResultExt<'code, T> for ParseResult<'code, T> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn value(&self) -> Option<&T> {
        self.as_ref().ok().map(|success| &success.value)
    }

    fn rest(&self) -> Option<&'code str> {
        self.as_ref().ok().map(|success| success.rest)
    }
}
