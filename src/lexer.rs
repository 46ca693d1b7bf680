//! Lexer module for tokenization

pub mod cursor;
pub mod token;
pub mod tokenizer;

pub use cursor::Cursor;
pub use token::{Span, Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Tokenize raw XML text
pub fn tokenize(xml: &str) -> Tokenizer<'_> {
    Tokenizer::new(xml)
}
