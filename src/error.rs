use std::borrow::Cow;

/// Reasons a parser can fail.
///
/// `Failure` is the ordinary "input did not match" outcome and is the only
/// variant alternatives and optional parsers are allowed to swallow. The
/// other variants report a combinator used outside its contract and always
/// propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input did not match, with an optional description of the first
    /// point of mismatch.
    #[error("{}", .message.as_deref().unwrap_or("parse failed"))]
    Failure { message: Option<Cow<'static, str>> },

    /// A repeated parser succeeded without consuming any input, which would
    /// otherwise loop forever.
    #[error("repeated parser succeeded without consuming input after {matched} matches")]
    NoProgress { matched: usize },

    /// `fold1` was given an empty sequence.
    #[error("fold1 requires at least one element")]
    EmptyFold,

    /// A parser returned a remainder that is not a suffix of its input.
    #[error("parser returned a remainder that is not a suffix of its input")]
    InvalidRest,
}

impl ParseError {
    /// A mismatch with a message
    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Failure {
            message: Some(message.into()),
        }
    }

    /// A mismatch without a message
    pub fn unlabelled() -> Self {
        ParseError::Failure { message: None }
    }

    /// The failure `any_of` reports when every alternative failed
    pub fn none_matched() -> Self {
        Self::failure("none matched")
    }

    /// Whether alternatives and optional parsers may absorb this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParseError::Failure { .. })
    }

    /// The mismatch message, if this is a failure that carries one
    pub fn message(&self) -> Option<&str> {
        match self {
            ParseError::Failure { message } => message.as_deref(),
            _ => None,
        }
    }
}
