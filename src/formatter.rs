//! XML formatting: indentation, attribute alignment, inline values and
//! causality-data stripping

pub mod attributes;
pub mod causality;
pub mod xml;

pub use self::attributes::{parse_attributes, Attribute, Quote};
pub use self::causality::strip_causality_data;
pub use self::xml::{IndentState, XmlFormatter};
use crate::config::FormatConfig;

/// Format XML text with the given options
pub fn format_xml(xml: &str, config: &FormatConfig) -> String {
    XmlFormatter::new(config.clone()).format(xml)
}

/// Format raw bytes; input that is not UTF-8 text formats to an empty string
pub fn format_xml_bytes(bytes: &[u8], config: &FormatConfig) -> String {
    match std::str::from_utf8(bytes) {
        Ok(xml) => format_xml(xml, config),
        Err(_) => String::new(),
    }
}
