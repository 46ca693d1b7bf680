//! Permissive XML tokenizer
//!
//! Splits raw text into tags and text runs without building a tree. Input
//! that does not look like markup is kept as text, so tokens always cover the
//! whole input in order and concatenating their `raw` slices reproduces it.

use tracing::trace;

use super::cursor::Cursor;
use super::token::{Span, Token, TokenKind};

/// Iterator over the tokens of an XML string
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    cursor: Cursor<'a>,
    missing: Terminators,
}

/// Offsets from which a terminator is known not to occur.
///
/// A failed search proves the terminator is absent from there to the end of
/// input, so later `<` at or past that offset are text without searching
/// again. This keeps unterminated markup linear.
#[derive(Clone, Copy, Debug)]
struct Terminators {
    gt: usize,
    comment: usize,
    cdata: usize,
    pi: usize,
}

impl Terminators {
    const fn unknown() -> Self {
        Self {
            gt: usize::MAX,
            comment: usize::MAX,
            cdata: usize::MAX,
            pi: usize::MAX,
        }
    }
}

/// Move past `pattern` unless it is already known to be missing from the
/// cursor position on. A miss is recorded in `missing_from`.
fn skip_past_known(cursor: &mut Cursor<'_>, pattern: &str, missing_from: &mut usize) -> bool {
    if cursor.pos() >= *missing_from {
        return false;
    }
    if cursor.skip_past(pattern) {
        return true;
    }
    *missing_from = cursor.pos();
    false
}

impl<'a> Tokenizer<'a> {
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor::new(input),
            missing: Terminators::unknown(),
        }
    }

    /// Tokens carrying content: whitespace-only text between markup is
    /// dropped, which is the same as collapsing `>\s*<` to `><`.
    pub fn significant(self) -> impl Iterator<Item = Token<'a>> {
        self.filter(|token| !token.is_blank_text())
    }

    fn token(&self, kind: TokenKind<'a>, start: usize, end: usize) -> Token<'a> {
        let raw = self.input.get(start..end).unwrap_or_default();
        Token::new(kind, raw, Span::new(start, end))
    }

    /// Scan a text run starting at the cursor. A `<` that does not open
    /// markup is swallowed into the run.
    fn scan_text(&mut self) -> usize {
        loop {
            self.cursor.advance();
            self.cursor.skip_to(b'<');
            let pos = self.cursor.pos();
            if self.cursor.is_eof() || self.scan_markup(pos).is_some() {
                return self.cursor.pos();
            }
        }
    }

    /// Try to read one piece of markup beginning at `start`.
    ///
    /// Returns the token kind and the end offset (one past the closing `>`),
    /// or `None` if the bytes at `start` are not recognizable markup.
    fn scan_markup(&mut self, start: usize) -> Option<(TokenKind<'a>, usize)> {
        let missing = &mut self.missing;
        let mut cursor = Cursor::at(self.input, start);
        if cursor.current() != Some(b'<') {
            return None;
        }
        cursor.advance();

        match cursor.current()? {
            b'!' => {
                let kind = if cursor.starts_with("!--") {
                    cursor.advance_by(3);
                    if !skip_past_known(&mut cursor, "-->", &mut missing.comment) {
                        return None;
                    }
                    TokenKind::Comment
                } else if cursor.starts_with("![CDATA[") {
                    if !skip_past_known(&mut cursor, "]]>", &mut missing.cdata) {
                        return None;
                    }
                    TokenKind::Declaration
                } else {
                    if !skip_past_known(&mut cursor, ">", &mut missing.gt) {
                        return None;
                    }
                    TokenKind::Declaration
                };
                Some((kind, cursor.pos()))
            }
            b'?' => {
                if !skip_past_known(&mut cursor, "?>", &mut missing.pi)
                    && !skip_past_known(&mut cursor, ">", &mut missing.gt)
                {
                    return None;
                }
                Some((TokenKind::ProcessingInstruction, cursor.pos()))
            }
            b'/' => {
                cursor.advance();
                let name = scan_name(&mut cursor)?;
                if !skip_past_known(&mut cursor, ">", &mut missing.gt) {
                    return None;
                }
                Some((TokenKind::CloseTag { name }, cursor.pos()))
            }
            _ => {
                let name = scan_name(&mut cursor)?;
                let tail_start = cursor.pos();
                if !skip_past_known(&mut cursor, ">", &mut missing.gt) {
                    return None;
                }
                let tail = cursor.slice_from(tail_start);
                let tail = tail.strip_suffix('>').unwrap_or(tail);

                let kind = match tail.trim_end().strip_suffix('/') {
                    Some(attributes) => TokenKind::SelfClosingTag { name, attributes },
                    None => TokenKind::OpenTag {
                        name,
                        attributes: tail,
                    },
                };
                Some((kind, cursor.pos()))
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_eof() {
            return None;
        }

        let start = self.cursor.pos();
        if let Some((kind, end)) = self.scan_markup(start) {
            self.cursor = Cursor::at(self.input, end);
            trace!(kind = kind.name(), start, end, "markup token");
            return Some(self.token(kind, start, end));
        }

        let end = self.scan_text();
        Some(self.token(TokenKind::Text, start, end))
    }
}

fn scan_name<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cursor.pos();
    cursor.eat_while(is_name_byte);
    let name = cursor.slice_from(start);
    (!name.is_empty()).then_some(name)
}

/// Letters, digits, `_ : . -`, plus any non-ASCII byte
const fn is_name_byte(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b':' | b'.' | b'-') || b >= 0x80
}
