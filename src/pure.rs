use crate::parser::Parser;
use crate::result::{ParseResult, Success};

/// Parser that always succeeds with a clone of its value without consuming input
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        Ok(Success::new(self.value.clone(), input))
    }
}

/// Lift a plain value into a parser; the identity of `ap` and `chain`
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}

/// Alias of [`pure`]
pub fn of<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}
