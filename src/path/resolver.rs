//! Offset-to-path resolution over raw XML text

use tracing::{debug, trace};

use super::state::{ScanState, StructuralPath};
use crate::lexer::{TokenKind, Tokenizer};

/// Maps byte offsets in an XML string to structural paths
#[derive(Clone, Copy, Debug)]
pub struct PathResolver<'a> {
    xml: &'a str,
}

impl<'a> PathResolver<'a> {
    pub const fn new(xml: &'a str) -> Self {
        Self { xml }
    }

    /// Path of the element whose text, tag or attributes contain `offset`.
    ///
    /// Text belongs to its nearest enclosing element. Inside an opening or
    /// self-closing tag the result is the path that tag is about to take;
    /// inside a closing tag it is the path of the element being closed.
    /// Returns `None` when no open element encloses the offset.
    pub fn resolve(&self, offset: usize) -> Option<StructuralPath<'a>> {
        let mut state = ScanState::new();
        let mut last_end = 0;

        let tags = Tokenizer::new(self.xml).filter(|token| token.kind.is_element_tag());
        for token in tags {
            let span = token.span;

            if offset >= last_end && offset < span.start && !state.current().is_empty() {
                trace!(offset, "offset in text");
                return Some(state.current().clone());
            }

            if span.contains(offset) {
                trace!(offset, kind = token.kind.name(), "offset in tag");
                return match token.kind {
                    TokenKind::CloseTag { .. } => {
                        Some(state.current().clone()).filter(|path| !path.is_empty())
                    }
                    TokenKind::OpenTag { name, .. } | TokenKind::SelfClosingTag { name, .. } => {
                        Some(state.peek_child_path(name))
                    }
                    _ => None,
                };
            }

            match token.kind {
                TokenKind::OpenTag { name, .. } => state.commit_open(name),
                TokenKind::SelfClosingTag { name, .. } => state.commit_self_closing(name),
                TokenKind::CloseTag { name } => state.commit_close(name),
                _ => {}
            }
            last_end = span.end;
        }

        // Trailing text inside an element left open
        if offset >= last_end && !state.current().is_empty() {
            return Some(state.current().clone());
        }

        debug!(offset, len = self.xml.len(), "no path at offset");
        None
    }
}

/// Structural path at byte `offset`, rendered as `/a[1]/b[2]`
pub fn get_path(xml: &str, offset: usize) -> Option<String> {
    PathResolver::new(xml)
        .resolve(offset)
        .map(|path| path.to_string())
}

/// Same as [`get_path`] with `char_offset` counted in characters.
/// Offsets past the end stay past the end.
pub fn get_path_at_char(xml: &str, char_offset: usize) -> Option<String> {
    let byte_offset = match xml.char_indices().nth(char_offset) {
        Some((idx, _)) => idx,
        None => xml
            .len()
            .saturating_add(char_offset.saturating_sub(xml.chars().count())),
    };
    get_path(xml, byte_offset)
}
