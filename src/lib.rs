//! # Parsalg - Algebraic Parser Combinators
//!
//! A parser is anything that turns a `&str` into either a [`Success`] carrying a
//! value and the unconsumed rest of the input, or a [`ParseError`]. Parsers are
//! plain values and do not mutate anything, so the same parser can be run any
//! number of times on any number of inputs.
//!
//! The library is organised in three layers:
//!
//! - **Algebra**: [`map`](fn@map), [`pure`](fn@pure), [`ap`](fn@ap), [`chain`](fn@chain), [`lift2`] to [`lift5`],
//!   [`fold`](fn@fold) and [`fold1`]. These obey the functor, applicative and monad laws.
//! - **Text primitives**: [`symbol`], [`char`](fn@char), [`string`], [`satisfy`] and the
//!   predicate based [`one_or_more_chars`] / [`zero_or_more_chars`].
//! - **Structure**: [`sequence`](fn@sequence), [`any_of`](fn@any_of), [`optional`](fn@optional), [`one_or_more`] and
//!   [`zero_or_more`].
//!
//! The [`arith`] module builds a small integer calculator from these pieces.
//!
//! ```
//! use parsalg::{Parser, Success, char, lift3, one_or_more_chars};
//!
//! let word = || one_or_more_chars(|c| c.is_ascii_alphabetic(), "expected a word");
//! let pair = lift3(|key, _, value| (key, value), word(), char('='), word());
//!
//! assert_eq!(pair.parse("key=value;"), Ok(Success::new(("key", "value"), ";")));
//! ```

pub mod any_of;
pub mod ap;
pub mod arith;
pub mod boxed;
pub mod chain;
pub mod consumed;
pub mod error;
pub mod fail;
pub mod fold;
pub mod from_fn;
pub mod lift;
pub mod map;
pub mod optional;
pub mod parser;
pub mod pure;
pub mod repeat;
pub mod result;
pub mod sequence;
pub mod text;

#[cfg(test)]
mod test_util;

pub use any_of::{AnyOf, Or, OrExt, any_of, or};
pub use ap::{Ap, ApExt, ap};
pub use boxed::{BoxedExt, BoxedParser};
pub use chain::{Chain, ChainExt, chain};
pub use consumed::{Consumed, ConsumedExt, consumed};
pub use error::ParseError;
pub use fail::{Fail, fail};
pub use fold::{Fold, Fold1, FoldExt, fold, fold1};
pub use from_fn::{FromFn, from_fn};
pub use lift::{Lift, lift2, lift3, lift4, lift5};
pub use map::{Map, MapExt, map};
pub use optional::{Optional, OptionalExt, optional};
pub use parser::Parser;
pub use pure::{Pure, of, pure};
pub use repeat::{OneOrMore, ZeroOrMore, one_or_more, zero_or_more};
pub use result::{ParseResult, ParseResultExt, Success, failure, success};
pub use sequence::{Sequence, sequence};
pub use text::{char, one_or_more_chars, satisfy, string, symbol, zero_or_more_chars};
