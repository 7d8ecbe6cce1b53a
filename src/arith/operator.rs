use crate::any_of::any_of;
use crate::arith::whitespace::trimmed;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::text::string;
use std::fmt;

/// Arithmetic problems detected while evaluating an operator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("{lhs} {operator} {rhs} overflows a 64-bit integer")]
    Overflow {
        lhs: i64,
        operator: BinaryOperator,
        rhs: i64,
    },
    #[error("division by zero: {lhs} / 0")]
    DivisionByZero { lhs: i64 },
    #[error("negative exponent: {base} ** {exponent}")]
    NegativeExponent { base: i64, exponent: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Pow,
    Add,
    Sub,
    Mul,
    Div,
    Xor,
}

impl BinaryOperator {
    /// All operators, in the order their tokens are tried.
    /// `**` has to come before `*`.
    pub const ALL: [BinaryOperator; 6] = [
        BinaryOperator::Pow,
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
        BinaryOperator::Xor,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Pow => "**",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Xor => "^",
        }
    }

    /// Apply the operator with overflow checking
    ///
    /// Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
        let overflow = ArithmeticError::Overflow {
            lhs,
            operator: self,
            rhs,
        };
        match self {
            BinaryOperator::Pow => {
                if rhs < 0 {
                    return Err(ArithmeticError::NegativeExponent {
                        base: lhs,
                        exponent: rhs,
                    });
                }
                match lhs {
                    0 if rhs > 0 => return Ok(0),
                    1 => return Ok(1),
                    -1 => return Ok(if rhs % 2 == 0 { 1 } else { -1 }),
                    _ => {}
                }
                let exponent = u32::try_from(rhs).map_err(|_| overflow.clone())?;
                lhs.checked_pow(exponent).ok_or(overflow)
            }
            BinaryOperator::Add => lhs.checked_add(rhs).ok_or(overflow),
            BinaryOperator::Sub => lhs.checked_sub(rhs).ok_or(overflow),
            BinaryOperator::Mul => lhs.checked_mul(rhs).ok_or(overflow),
            BinaryOperator::Div => {
                if rhs == 0 {
                    return Err(ArithmeticError::DivisionByZero { lhs });
                }
                lhs.checked_div(rhs).ok_or(overflow)
            }
            BinaryOperator::Xor => Ok(lhs ^ rhs),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parser that matches one binary operator token surrounded by optional spaces
pub fn binary_operator<'code>() -> impl Parser<'code, Output = BinaryOperator> {
    let tokens = BinaryOperator::ALL.map(|operator| string(operator.symbol()).map(move |_| operator));
    trimmed(any_of(tokens))
}
