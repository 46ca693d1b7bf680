//! Attribute re-parsing and tag rendering

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::unwrap_used)]
static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([a-zA-Z0-9_:-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Quote style an attribute value was written with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
}

/// `key="value"` pair parsed from a raw attribute tail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub quote: Quote,
}

impl Attribute<'_> {
    /// Quote used on output: double, unless the value came single-quoted and
    /// contains a double quote
    pub fn output_quote(&self) -> Quote {
        match self.quote {
            Quote::Single if self.value.contains('"') => Quote::Single,
            _ => Quote::Double,
        }
    }
}

impl fmt::Display for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.output_quote() {
            Quote::Double => write!(f, "{}=\"{}\"", self.key, self.value),
            Quote::Single => write!(f, "{}='{}'", self.key, self.value),
        }
    }
}

/// Parse every `key = "value"` / `key = 'value'` pair in `raw`
pub fn parse_attributes(raw: &str) -> Vec<Attribute<'_>> {
    ATTRIBUTE
        .captures_iter(raw)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str();
            let (value, quote) = match (caps.get(2), caps.get(3)) {
                (Some(v), _) => (v.as_str(), Quote::Double),
                (None, Some(v)) => (v.as_str(), Quote::Single),
                (None, None) => return None,
            };
            Some(Attribute { key, value, quote })
        })
        .collect()
}

/// Render an opening or self-closing tag.
///
/// `column` is the absolute column the tag starts at; aligned attributes are
/// indented to sit under the first attribute. Falls back to `raw` when the
/// tag has no attributes or none can be parsed from its tail.
pub fn render_tag(
    raw: &str,
    name: &str,
    attributes: &str,
    closing: &str,
    column: usize,
    align: bool,
) -> String {
    if attributes.trim().is_empty() {
        return raw.to_string();
    }

    let attrs = parse_attributes(attributes);
    let Some((first, rest)) = attrs.split_first() else {
        return raw.to_string();
    };

    let mut line = format!("<{name} {first}");
    if align && !rest.is_empty() {
        let pad = " ".repeat(column + 1 + name.chars().count() + 1);
        for attr in rest {
            line.push('\n');
            line.push_str(&pad);
            line.push_str(&attr.to_string());
        }
    } else {
        for attr in rest {
            line.push(' ');
            line.push_str(&attr.to_string());
        }
    }
    line.push_str(closing);
    line
}
