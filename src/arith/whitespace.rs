use crate::arith::is_space;
use crate::lift::lift3;
use crate::parser::Parser;
use crate::text::zero_or_more_chars;

/// Parser that matches any run of spaces, including none
pub fn maybe_whitespace<'code>() -> impl Parser<'code, Output = &'code str> {
    zero_or_more_chars(is_space)
}

/// Wraps a parser so that spaces before and after it are skipped
pub fn trimmed<'code, P>(parser: P) -> impl Parser<'code, Output = P::Output>
where
    P: Parser<'code>,
{
    lift3(
        |_, value, _| value,
        maybe_whitespace(),
        parser,
        maybe_whitespace(),
    )
}
