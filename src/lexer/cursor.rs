//! Byte cursor for scanning raw XML text

/// Cursor over the bytes of a `&str` input.
///
/// The cursor only ever stops on ASCII bytes or at end of input while
/// scanning markup, so every slice it hands out falls on a char boundary.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create cursor at the start of `input`
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Create cursor at a given byte position
    pub const fn at(input: &'a str, pos: usize) -> Self {
        Self { input, pos }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Peek at byte ahead without consuming
    pub fn peek(&self, ahead: usize) -> Option<u8> {
        self.input
            .as_bytes()
            .get(self.pos.saturating_add(ahead))
            .copied()
    }

    /// Advance cursor by one byte
    pub fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    /// Advance cursor by `n` bytes, stopping at end of input
    pub fn advance_by(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.input.len());
    }

    /// Check whether the remaining input starts with `pattern`
    pub fn starts_with(&self, pattern: &str) -> bool {
        self.remaining().starts_with(pattern)
    }

    /// Move past the next occurrence of `pattern`.
    ///
    /// Returns `false` and leaves the cursor untouched when `pattern` does
    /// not occur in the remaining input.
    pub fn skip_past(&mut self, pattern: &str) -> bool {
        match self.remaining().find(pattern) {
            Some(idx) => {
                self.advance_by(idx + pattern.len());
                true
            }
            None => false,
        }
    }

    /// Move to the next occurrence of `byte`, or to end of input
    pub fn skip_to(&mut self, byte: u8) {
        let rest = self.input.as_bytes().get(self.pos..).unwrap_or_default();
        match rest.iter().position(|&b| b == byte) {
            Some(idx) => self.advance_by(idx),
            None => self.pos = self.input.len(),
        }
    }

    /// Advance while `pred` holds for the current byte
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.advance();
        }
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get remaining input
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Get slice from start to current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}
