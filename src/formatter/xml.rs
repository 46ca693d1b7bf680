//! XML pretty-printer working directly on the token stream

use tracing::{debug, trace};

use super::attributes::render_tag;
use super::causality::strip_causality_data;
use crate::config::{FormatConfig, MAX_INDENT_SPACES};
use crate::lexer::{Token, TokenKind, Tokenizer};

/// Nesting depth while formatting, reset for every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentState {
    depth: usize,
    indent_spaces: usize,
}

impl IndentState {
    /// Widths above [`MAX_INDENT_SPACES`] are clamped
    pub fn new(indent_spaces: usize) -> Self {
        Self {
            depth: 0,
            indent_spaces: indent_spaces.min(MAX_INDENT_SPACES),
        }
    }

    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Column at which a line at the current depth starts
    pub const fn column(&self) -> usize {
        self.depth.saturating_mul(self.indent_spaces)
    }

    pub fn pad(&self) -> String {
        " ".repeat(self.column())
    }

    /// Children of an opened element go one level deeper
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    /// Unbalanced close tags never drive the depth below zero
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// XML formatter
#[derive(Debug, Clone, Default)]
pub struct XmlFormatter {
    config: FormatConfig,
}

impl XmlFormatter {
    pub const fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Re-indent `xml`. Never fails: fragments that are not markup are
    /// written out as text.
    pub fn format(&self, xml: &str) -> String {
        if xml.is_empty() {
            return String::new();
        }

        let stripped;
        let source = if self.config.hide_causality_data {
            stripped = strip_causality_data(xml);
            stripped.as_str()
        } else {
            xml
        };

        let tokens: Vec<Token<'_>> = Tokenizer::new(source).significant().collect();
        let mut state = IndentState::new(self.config.indent_spaces);
        let mut out = String::with_capacity(source.len() + source.len() / 2);

        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::OpenTag { name, attributes } => {
                    let inline = self.config.inline_element_values
                        && is_inline_candidate(&tokens, i, name);
                    self.write_start_tag(&mut out, &state, token, name, attributes, ">");
                    if inline {
                        trace!(name, "inline element");
                    } else {
                        out.push('\n');
                        state.enter();
                    }
                }
                TokenKind::SelfClosingTag { name, attributes } => {
                    self.write_start_tag(&mut out, &state, token, name, attributes, "/>");
                    out.push('\n');
                }
                TokenKind::CloseTag { .. } => {
                    // Mid-line means we are finishing an inline element
                    if at_line_start(&out) {
                        state.leave();
                        out.push_str(&state.pad());
                    }
                    out.push_str(token.raw);
                    out.push('\n');
                }
                TokenKind::Comment | TokenKind::ProcessingInstruction | TokenKind::Declaration => {
                    if at_line_start(&out) {
                        out.push_str(&state.pad());
                    }
                    out.push_str(token.raw);
                    out.push('\n');
                }
                TokenKind::Text => {
                    let text = token.raw.trim();
                    if at_line_start(&out) {
                        out.push_str(&state.pad());
                        out.push_str(text);
                        out.push('\n');
                    } else {
                        out.push_str(text);
                    }
                }
            }
        }

        debug!(
            tokens = tokens.len(),
            input_len = xml.len(),
            output_len = out.len(),
            "formatted xml"
        );
        out
    }

    fn write_start_tag(
        &self,
        out: &mut String,
        state: &IndentState,
        token: &Token<'_>,
        name: &str,
        attributes: &str,
        closing: &str,
    ) {
        if at_line_start(out) {
            out.push_str(&state.pad());
        }
        out.push_str(&render_tag(
            token.raw,
            name,
            attributes,
            closing,
            state.column(),
            self.config.align_attributes,
        ));
    }
}

fn at_line_start(out: &str) -> bool {
    out.is_empty() || out.ends_with('\n')
}

/// `<name>text</name>` or `<name></name>` starting at `tokens[i]`
fn is_inline_candidate(tokens: &[Token<'_>], i: usize, name: &str) -> bool {
    match (tokens.get(i + 1), tokens.get(i + 2)) {
        (Some(next), _) if next.closes(name) => true,
        (Some(text), Some(close)) => text.is_content_text() && close.closes(name),
        _ => false,
    }
}
