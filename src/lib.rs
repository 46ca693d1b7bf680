//! soapfmt: tolerant XML formatting and structural paths for SOAP payloads
//!
//! This crate provides functionality to:
//! - Tokenize raw, possibly malformed XML without building a tree
//! - Pretty print XML with optional attribute alignment and inline values
//! - Strip `VsDebuggerCausalityData` noise injected by SOAP debuggers
//! - Map a cursor offset in raw XML to a path like `/Envelope[1]/Body[1]`
//!
//! # Examples
//! ```
//! use soapfmt::{format_xml, get_path, FormatConfig};
//!
//! let xml = "<root><item>first</item><item>second</item></root>";
//! let config = FormatConfig::default().with_inline_element_values(true);
//! assert_eq!(
//!     format_xml(xml, &config),
//!     "<root>\n  <item>first</item>\n  <item>second</item>\n</root>\n"
//! );
//!
//! let offset = xml.find("second").unwrap_or_default();
//! assert_eq!(get_path(xml, offset).as_deref(), Some("/root[1]/item[2]"));
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod path;
pub mod utils;

// Re-exports
pub use config::FormatConfig;
#[cfg(feature = "serde")]
pub use config::Settings;
pub use error::{Error, Result};
pub use formatter::{format_xml, format_xml_bytes, strip_causality_data, XmlFormatter};
pub use lexer::{tokenize, Token, TokenKind, Tokenizer};
pub use path::{get_path, get_path_at_char, PathResolver, StructuralPath};
