//! Lexical token categories.

use std::fmt;

/// Lexical category of a token.
///
/// Names follow the token types reported by ECMAScript tokenizers
/// (`Punctuator`, `Identifier`, ...), extended with the trivia kinds the
/// formatter needs to see: whitespace, line breaks, and comments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of horizontal whitespace (spaces, tabs, Unicode space separators).
    WhiteSpace,
    /// `\n`, `\r\n`, a lone `\r`, U+2028, or U+2029.
    LineBreak,
    /// `// ...` up to (not including) the line break.
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// Identifier: `foo`, `$bar`, `_baz`
    Identifier,
    /// Reserved word: `var`, `function`, `return`, ...
    Keyword,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
    /// Numeric literal: `42`, `1.5e3`, `0xff`
    Numeric,
    /// String literal, quotes included.
    String,
    /// Operator or delimiter: `(`, `=>`, `===`, ...
    Punctuator,
}

impl TokenKind {
    /// Whitespace or line break.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, TokenKind::WhiteSpace | TokenKind::LineBreak)
    }

    /// Line or block comment.
    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Anything that is neither whitespace nor a comment.
    #[inline]
    pub const fn is_code(self) -> bool {
        !self.is_empty() && !self.is_comment()
    }

    /// Tokenizer-style type name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::WhiteSpace => "WhiteSpace",
            TokenKind::LineBreak => "LineBreak",
            TokenKind::LineComment => "LineComment",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Boolean => "Boolean",
            TokenKind::Null => "Null",
            TokenKind::Numeric => "Numeric",
            TokenKind::String => "String",
            TokenKind::Punctuator => "Punctuator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
