use crate::arith::number::number;
use crate::arith::operator::{BinaryOperator, binary_operator};
use crate::boxed::{BoxedExt, BoxedParser};
use crate::chain::ChainExt;
use crate::error::ParseError;
use crate::fail::fail;
use crate::lift::lift3;
use crate::parser::Parser;
use crate::pure::pure;
use crate::result::Success;

fn apply<'code>(lhs: i64, operator: BinaryOperator, rhs: i64) -> BoxedParser<'code, i64> {
    match operator.apply(lhs, rhs) {
        Ok(value) => pure(value).boxed(),
        Err(error) => fail(error.to_string()).boxed(),
    }
}

/// Parser for `<number> <operator> <number>` that yields the evaluated result
pub fn operate_on_two_integers<'code>() -> impl Parser<'code, Output = i64> {
    lift3(
        |lhs, operator, rhs| (lhs, operator, rhs),
        number(),
        binary_operator(),
        number(),
    )
    .chain(|(lhs, operator, rhs)| apply(lhs, operator, rhs))
}

/// Evaluate a complete binary expression; trailing input is an error
pub fn evaluate(input: &str) -> Result<i64, ParseError> {
    let Success { value, rest } = operate_on_two_integers().parse(input)?;
    if !rest.is_empty() {
        return Err(ParseError::failure(format!(
            "unexpected trailing input: '{}'",
            rest
        )));
    }
    Ok(value)
}
