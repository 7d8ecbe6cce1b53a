//! A small integer arithmetic grammar built only from the public combinators
//!
//! Parses a single binary expression such as `"  -10 +  +35  "` and evaluates
//! it with checked 64-bit arithmetic.
pub mod expression;
pub mod number;
pub mod operator;
pub mod whitespace;

pub use expression::{evaluate, operate_on_two_integers};
pub use number::{digit, digits, number, sign};
pub use operator::{ArithmeticError, BinaryOperator, binary_operator};
pub use whitespace::{maybe_whitespace, trimmed};

/// ASCII decimal digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Only the plain space separates tokens
pub fn is_space(c: char) -> bool {
    c == ' '
}
