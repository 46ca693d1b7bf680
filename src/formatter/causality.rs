//! Removal of `VsDebuggerCausalityData` noise injected by SOAP debuggers

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

const MARKER: &str = "vsdebuggercausalitydata";

// Every comment, with an optional line break right before it.
#[allow(clippy::unwrap_used)]
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)(?:\r\n|\r|\n)?<!--.*?-->").unwrap());

#[allow(clippy::unwrap_used)]
static ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)(?:\r\n|\r|\n)?<(?:[\w.-]+:)?VsDebuggerCausalityData\b(?:[^>]*/>|.*?</(?:[\w.-]+:)?VsDebuggerCausalityData\s*>)",
    )
    .unwrap()
});

/// Strip causality-data comments and elements (any namespace prefix, case
/// insensitive), each together with a line break directly before it.
///
/// Everything else is left byte-identical.
pub fn strip_causality_data(xml: &str) -> String {
    if xml.is_empty() {
        return String::new();
    }

    let without_comments = COMMENT.replace_all(xml, |caps: &Captures<'_>| {
        let comment = caps.get(0).map_or("", |m| m.as_str());
        if comment.to_ascii_lowercase().contains(MARKER) {
            String::new()
        } else {
            comment.to_string()
        }
    });
    let stripped = ELEMENT.replace_all(&without_comments, "").into_owned();

    if stripped.len() != xml.len() {
        debug!(removed = xml.len() - stripped.len(), "stripped causality data");
    }
    stripped
}
