use crate::any_of::any_of;
use crate::arith::is_digit;
use crate::arith::whitespace::trimmed;
use crate::boxed::{BoxedExt, BoxedParser};
use crate::chain::ChainExt;
use crate::consumed::ConsumedExt;
use crate::fail::fail;
use crate::fold::FoldExt;
use crate::lift::lift2;
use crate::map::MapExt;
use crate::optional::optional;
use crate::parser::Parser;
use crate::pure::pure;
use crate::repeat::one_or_more;
use crate::text::{char, satisfy};

/// Parser that matches a single decimal digit
pub fn digit<'code>() -> impl Parser<'code, Output = char> {
    satisfy(is_digit, "expected a digit")
}

/// Parser that matches a run of decimal digits
pub fn digits<'code>() -> impl Parser<'code, Output = String> {
    one_or_more(digit().map(String::from)).fold1(|mut acc, d| {
        acc.push_str(&d);
        acc
    })
}

/// Parser that matches a leading `-` or `+`
pub fn sign<'code>() -> impl Parser<'code, Output = char> {
    any_of([char('-'), char('+')])
}

fn to_integer<'code>(text: &str) -> BoxedParser<'code, i64> {
    match text.parse::<i64>() {
        Ok(value) => pure(value).boxed(),
        Err(_) => fail(format!("integer literal out of range: {}", text)).boxed(),
    }
}

/// Parser that matches a signed decimal integer surrounded by optional spaces
pub fn number<'code>() -> impl Parser<'code, Output = i64> {
    let literal = lift2(|_, _| (), optional(sign()), digits()).consumed();
    trimmed(literal).chain(|((), text)| to_integer(text))
}
