//! Hand-written scanner producing one classified byte range at a time.
//!
//! Every byte of the input belongs to exactly one token: whitespace, line
//! breaks, and comments are tokens too. Keyword resolution happens here;
//! numeric and string values are never decoded.

use esf_ir::TokenKind;
use tracing::trace;

use crate::cursor::Cursor;
use crate::keywords::word_kind;
use crate::LexError;

/// A classified byte range `start..end` of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawToken {
    pub(crate) kind: TokenKind,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Punctuators, longest first so the first match is the longest match.
const PUNCTUATORS: &[&str] = &[
    ">>>=", //
    "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "...", //
    "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=",
    "%=", "&=", "|=", "^=", "**", "<<", ">>", //
    "{", "}", "(", ")", "[", "]", ";", ",", "<", ">", "+", "-", "*", "/", "%", "&", "|", "^",
    "!", "~", "?", ":", "=", ".", "@", "#",
];

pub(crate) struct Scanner<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            source,
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Result<Option<RawToken>, LexError> {
        if self.cursor.is_eof() {
            return Ok(None);
        }
        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            b' ' | b'\t' | 0x0B | 0x0C => {
                self.whitespace();
                TokenKind::WhiteSpace
            }
            b'\n' => {
                self.cursor.advance();
                TokenKind::LineBreak
            }
            b'\r' => {
                self.cursor.advance();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                }
                TokenKind::LineBreak
            }
            b'/' if self.cursor.peek(1) == b'/' => {
                self.cursor.eat_until_newline_or_eof();
                TokenKind::LineComment
            }
            b'/' if self.cursor.peek(1) == b'*' => {
                self.cursor.advance_n(2);
                if !self.cursor.eat_past(b"*/") {
                    return Err(LexError::UnterminatedComment { offset: start });
                }
                TokenKind::BlockComment
            }
            b'"' | b'\'' => self.string(start)?,
            b'`' => return Err(LexError::TemplateLiteral { offset: start }),
            b'0'..=b'9' => self.number(),
            b'.' if self.cursor.peek(1).is_ascii_digit() => self.number(),
            0x80..=0xFF => match self.cursor.current_char() {
                Some(ch) if is_line_terminator(ch) => {
                    self.cursor.advance_n(ch.len_utf8());
                    TokenKind::LineBreak
                }
                Some(ch) if is_unicode_whitespace(ch) => {
                    self.whitespace();
                    TokenKind::WhiteSpace
                }
                _ => self.word(start),
            },
            b if is_ident_start(b) => self.word(start),
            b => self.punctuator(start, b)?,
        };
        let token = RawToken {
            kind,
            start,
            end: self.cursor.pos(),
        };
        trace!(?token, "scanned");
        Ok(Some(token))
    }

    /// Consume a run of ASCII and Unicode whitespace.
    fn whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | 0x0B | 0x0C => self.cursor.advance(),
                0x80..=0xFF => match self.cursor.current_char() {
                    Some(ch) if is_unicode_whitespace(ch) => self.cursor.advance_n(ch.len_utf8()),
                    _ => break,
                },
                _ => break,
            }
        }
    }

    /// Identifier, keyword, or literal word. Any non-ASCII character other
    /// than whitespace or a line terminator continues the word.
    fn word(&mut self, start: usize) -> TokenKind {
        loop {
            let b = self.cursor.current();
            if b.is_ascii() {
                if !is_ident_continue(b) {
                    break;
                }
                self.cursor.advance();
                continue;
            }
            match self.cursor.current_char() {
                Some(ch) if !is_unicode_whitespace(ch) && !is_line_terminator(ch) => {
                    self.cursor.advance_n(ch.len_utf8());
                }
                _ => break,
            }
        }
        word_kind(&self.source[start..self.cursor.pos()])
    }

    fn string(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let quote = self.cursor.current();
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                b'\\' => self.cursor.advance_n(2),
                b'\n' | b'\r' => return Err(LexError::UnterminatedString { offset: start }),
                _ if self.cursor.is_eof() => {
                    return Err(LexError::UnterminatedString { offset: start });
                }
                b if b == quote => {
                    self.cursor.advance();
                    return Ok(TokenKind::String);
                }
                _ => self.cursor.advance(),
            }
        }
    }

    fn number(&mut self) -> TokenKind {
        if self.cursor.current() == b'0' && matches!(self.cursor.peek(1), b'x' | b'X') {
            self.cursor.advance_n(2);
            self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
        } else {
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            if self.cursor.current() == b'.' {
                self.cursor.advance();
                self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            }
            if matches!(self.cursor.current(), b'e' | b'E') {
                let sign = usize::from(matches!(self.cursor.peek(1), b'+' | b'-'));
                if self.cursor.peek(1 + sign).is_ascii_digit() {
                    self.cursor.advance_n(1 + sign);
                    self.cursor.eat_while(|b| b.is_ascii_digit());
                }
            }
        }
        // BigInt suffix
        if self.cursor.current() == b'n' {
            self.cursor.advance();
        }
        TokenKind::Numeric
    }

    fn punctuator(&mut self, start: usize, byte: u8) -> Result<TokenKind, LexError> {
        let Some(punct) = PUNCTUATORS
            .iter()
            .find(|p| self.cursor.starts_with(p.as_bytes()))
        else {
            return Err(LexError::UnexpectedCharacter {
                ch: char::from(byte),
                offset: start,
            });
        };
        // `a?.5:b` is a conditional, not optional chaining.
        let len = if *punct == "?." && self.cursor.peek(2).is_ascii_digit() {
            1
        } else {
            punct.len()
        };
        self.cursor.advance_n(len);
        Ok(TokenKind::Punctuator)
    }
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

/// Non-ASCII `WhiteSpace`: NBSP, BOM, and the `Zs` space separators.
#[inline]
fn is_unicode_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{00A0}'
            | '\u{FEFF}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// LINE SEPARATOR and PARAGRAPH SEPARATOR.
#[inline]
fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\u{2028}' | '\u{2029}')
}
