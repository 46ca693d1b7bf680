//! Token types for the XML tokenizer

/// Byte range `[start, end)` in the source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check whether `offset` lies inside the span
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// XML token kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// `<name attrs>`
    OpenTag { name: &'a str, attributes: &'a str },
    /// `</name>`
    CloseTag { name: &'a str },
    /// `<name attrs/>`, attributes exclude the trailing `/`
    SelfClosingTag { name: &'a str, attributes: &'a str },
    /// `<!-- ... -->`
    Comment,
    /// `<? ... ?>`
    ProcessingInstruction,
    /// `<!DOCTYPE ...>`, `<![CDATA[...]]>`
    Declaration,
    /// Character data between markup, possibly whitespace-only
    Text,
}

impl<'a> TokenKind<'a> {
    /// Get token name for diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenTag { .. } => "open tag",
            Self::CloseTag { .. } => "close tag",
            Self::SelfClosingTag { .. } => "self-closing tag",
            Self::Comment => "comment",
            Self::ProcessingInstruction => "processing instruction",
            Self::Declaration => "declaration",
            Self::Text => "text",
        }
    }

    /// Element tags take part in nesting and sibling counting
    pub const fn is_element_tag(&self) -> bool {
        matches!(
            self,
            Self::OpenTag { .. } | Self::CloseTag { .. } | Self::SelfClosingTag { .. }
        )
    }

    /// Leaf markup is emitted verbatim and never nests
    pub const fn is_leaf_markup(&self) -> bool {
        matches!(
            self,
            Self::Comment | Self::ProcessingInstruction | Self::Declaration
        )
    }

    /// Tag name for element tags
    pub fn tag_name(&self) -> Option<&'a str> {
        match *self {
            Self::OpenTag { name, .. }
            | Self::CloseTag { name }
            | Self::SelfClosingTag { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Token with its raw source text and location
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub raw: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind<'a>, raw: &'a str, span: Span) -> Self {
        Self { kind, raw, span }
    }

    /// Whitespace-only text carries no content
    pub fn is_blank_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text) && self.raw.trim().is_empty()
    }

    /// Text token with at least one non-whitespace character
    pub fn is_content_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text) && !self.raw.trim().is_empty()
    }

    /// Check whether this is the closing tag for `name`
    pub fn closes(&self, name: &str) -> bool {
        matches!(self.kind, TokenKind::CloseTag { name: close } if close == name)
    }
}
