//! Lexer errors.

use thiserror::Error;

/// Failure to tokenize a source text.
///
/// Offsets are byte positions into the source.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString { offset: usize },

    #[error("unterminated block comment starting at byte {offset}")]
    UnterminatedComment { offset: usize },

    #[error("template literals are not supported (byte {offset})")]
    TemplateLiteral { offset: usize },

    #[error("unexpected character {ch:?} at byte {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
}

impl LexError {
    /// Byte offset where the error starts.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnterminatedString { offset }
            | LexError::UnterminatedComment { offset }
            | LexError::TemplateLiteral { offset }
            | LexError::UnexpectedCharacter { offset, .. } => *offset,
        }
    }
}
