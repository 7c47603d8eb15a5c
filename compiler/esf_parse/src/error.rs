//! Parse errors.

use esf_ir::TokenId;
use thiserror::Error;

/// Failure to parse a token stream.
///
/// The parser stops at the first error; there is no recovery.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected `{found}`, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        token: TokenId,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
}

impl ParseError {
    /// The offending token, if the error is not at end of input.
    pub fn token(&self) -> Option<TokenId> {
        match self {
            ParseError::UnexpectedToken { token, .. } => Some(*token),
            ParseError::UnexpectedEnd { .. } => None,
        }
    }
}
