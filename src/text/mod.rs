//! Parsers over single characters and literal text
pub mod is_char;
pub mod predicate;
pub mod string;
pub mod symbol;

pub use is_char::char;
pub use predicate::{one_or_more_chars, satisfy, zero_or_more_chars};
pub use string::string;
pub use symbol::symbol;
