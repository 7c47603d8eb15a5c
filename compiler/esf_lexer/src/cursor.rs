//! Byte cursor over the source text.
//!
//! Non-ASCII input is stepped over a whole character at a time, so every
//! position the scanner stops on is a valid UTF-8 boundary.

/// Forward-only cursor over a source string.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Current byte, `0` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Byte `offset` positions ahead, `0` past EOF.
    #[inline]
    pub(crate) fn peek(&self, offset: usize) -> u8 {
        self.bytes.get(self.pos + offset).copied().unwrap_or(0)
    }

    /// Character starting at the cursor, `None` at EOF or inside a
    /// multi-byte sequence.
    #[inline]
    pub(crate) fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..)?.chars().next()
    }

    /// Whether the remaining input starts with `prefix`.
    #[inline]
    pub(crate) fn starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes[self.pos..].starts_with(prefix)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_n(1);
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    pub(crate) fn eat_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while !self.is_eof() && predicate(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` or `\r` (not consumed), or to EOF.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr2(b'\n', b'\r', &self.bytes[self.pos..]) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.bytes.len(),
        }
    }

    /// Advance past the next occurrence of `needle`.
    ///
    /// Returns `false` (cursor moved to EOF) when `needle` does not occur.
    pub(crate) fn eat_past(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(&self.bytes[self.pos..], needle) {
            Some(offset) => {
                self.pos += offset + needle.len();
                true
            }
            None => {
                self.pos = self.bytes.len();
                false
            }
        }
    }
}
