//! esf Lexer
//!
//! Tokenizes an ECMAScript subset into a linked [`TokenList`], keeping every
//! byte of the input: whitespace runs, line breaks, and comments are tokens
//! alongside code tokens. Concatenating the token values reproduces the
//! source exactly, which is what lets the formatter edit whitespace in place.
//!
//! # Supported Syntax
//!
//! - Whitespace: ASCII spaces and tabs, NBSP, BOM, Unicode space separators
//! - Line breaks: `\n`, `\r\n`, lone `\r`, U+2028, U+2029
//! - Comments: `// line`, `/* block */`
//! - Identifiers, keywords, `true`/`false`, `null`
//! - Numbers: decimal, fractions, exponents, hex, `n` suffix
//! - Single- and double-quoted strings with escapes
//! - All ES2020 punctuators (longest match)
//!
//! Regular expression literals are not recognized (`/` is always a
//! punctuator) and template literals are rejected.

mod cursor;
mod error;
mod keywords;
mod scanner;

pub use error::LexError;

use esf_ir::{Token, TokenList};
use scanner::Scanner;

/// Tokenize `source`.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    let mut scanner = Scanner::new(source);
    // Roughly one token per four bytes of typical source.
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);
    while let Some(raw) = scanner.next_token()? {
        tokens.push(Token::new(raw.kind, &source[raw.start..raw.end]));
    }
    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "tokenized");
    Ok(tokens)
}
