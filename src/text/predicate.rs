use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Success};
use crate::text::symbol::symbol;
use std::borrow::Cow;

const DEFAULT_LABEL: &str = "char expectation failed";

/// Split `input` after the longest prefix whose chars all satisfy `predicate`
fn split_while<F>(input: &str, predicate: F) -> (&str, &str)
where
    F: Fn(char) -> bool,
{
    let end = input
        .char_indices()
        .find(|&(_, c)| !predicate(c))
        .map_or(input.len(), |(index, _)| index);
    input.split_at(end)
}

/// Parser that matches a single character satisfying a predicate
pub struct Satisfy<F> {
    predicate: F,
    label: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, label: impl Into<Cow<'static, str>>) -> Self {
        Satisfy {
            predicate,
            label: label.into(),
        }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let Success { value, rest } = symbol().parse(input)?;
        if !(self.predicate)(value) {
            return Err(ParseError::failure(format!("{}, got '{}'", self.label, value)));
        }
        Ok(Success::new(value, rest))
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F, label: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, label)
}

/// Parser that greedily matches one or more characters satisfying a predicate
pub struct OneOrMoreChars<F> {
    predicate: F,
    label: Cow<'static, str>,
}

impl<F> OneOrMoreChars<F> {
    /// Uses a generic message when nothing matches
    pub fn new(predicate: F) -> Self {
        OneOrMoreChars {
            predicate,
            label: Cow::Borrowed(DEFAULT_LABEL),
        }
    }

    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl<'code, F> Parser<'code> for OneOrMoreChars<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (found, rest) = split_while(input, &self.predicate);
        if found.is_empty() {
            return Err(ParseError::failure(format!("{}: {}", self.label, input)));
        }
        Ok(Success::new(found, rest))
    }
}

/// Matches the longest non-empty run of characters satisfying `predicate`;
/// `label` describes the expectation when the run would be empty
pub fn one_or_more_chars<F>(predicate: F, label: impl Into<Cow<'static, str>>) -> OneOrMoreChars<F>
where
    F: Fn(char) -> bool,
{
    OneOrMoreChars::new(predicate).with_label(label)
}

/// Parser that greedily matches zero or more characters satisfying a predicate
pub struct ZeroOrMoreChars<F> {
    predicate: F,
}

impl<F> ZeroOrMoreChars<F> {
    pub fn new(predicate: F) -> Self {
        ZeroOrMoreChars { predicate }
    }
}

impl<'code, F> Parser<'code> for ZeroOrMoreChars<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (found, rest) = split_while(input, &self.predicate);
        Ok(Success::new(found, rest))
    }
}

/// Matches the longest, possibly empty, run of characters satisfying `predicate`
pub fn zero_or_more_chars<F>(predicate: F) -> ZeroOrMoreChars<F>
where
    F: Fn(char) -> bool,
{
    ZeroOrMoreChars::new(predicate)
}
