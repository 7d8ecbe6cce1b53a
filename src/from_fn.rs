use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser backed by a plain function or closure
pub struct FromFn<F> {
    function: F,
}

impl<F> FromFn<F> {
    pub fn new(function: F) -> Self {
        FromFn { function }
    }
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(&'code str) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, T> {
        (self.function)(input)
    }
}

/// Wrap a function from input to result as a parser
///
/// # Example
/// ```
/// use parsalg::{from_fn, success, failure, Parser, Success};
///
/// let dot = from_fn(|input| match input.strip_prefix('.') {
///     Some(rest) => success((), rest),
///     None => failure("expected '.'"),
/// });
/// assert_eq!(dot.parse(".5"), Ok(Success::new((), "5")));
/// assert!(dot.parse("5").is_err());
/// ```
pub fn from_fn<'code, F, T>(function: F) -> FromFn<F>
where
    F: Fn(&'code str) -> ParseResult<'code, T>,
{
    FromFn::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Success, failure, success};
    use std::cell::Cell;

    #[test]
    fn test_from_fn_success() {
        let parser = from_fn(|input| success(input.len(), &input[input.len()..]));
        assert_eq!(parser.parse("abc"), Ok(Success::new(3, "")));
    }

    #[test]
    fn test_from_fn_failure() {
        let parser = from_fn(|_| failure::<()>("always fails"));
        let error = parser.parse("abc").unwrap_err();
        assert_eq!(error.message(), Some("always fails"));
    }

    #[test]
    fn test_from_fn_counts_calls() {
        let calls = Cell::new(0);
        let parser = from_fn(|input| {
            calls.set(calls.get() + 1);
            success((), input)
        });

        parser.parse("a").unwrap();
        parser.parse("b").unwrap();
        assert_eq!(calls.get(), 2);
    }
}
