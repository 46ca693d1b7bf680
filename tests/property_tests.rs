#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use soapfmt::formatter::parse_attributes;
use soapfmt::{format_xml, get_path, strip_causality_data, tokenize, FormatConfig, TokenKind};

#[derive(Debug, Clone)]
enum Node {
    Element {
        name: String,
        attrs: Vec<(String, String, bool)>,
        children: Vec<Node>,
    },
    Empty {
        name: String,
        attrs: Vec<(String, String, bool)>,
    },
    Text(String),
}

impl Node {
    fn render(&self, out: &mut String) {
        match self {
            Self::Element {
                name,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(name);
                render_attrs(attrs, out);
                out.push('>');
                for child in children {
                    child.render(out);
                }
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            Self::Empty { name, attrs } => {
                out.push('<');
                out.push_str(name);
                render_attrs(attrs, out);
                out.push_str("/>");
            }
            Self::Text(text) => out.push_str(text),
        }
    }
}

fn render_attrs(attrs: &[(String, String, bool)], out: &mut String) {
    for (key, value, single) in attrs {
        let quote = if *single { '\'' } else { '"' };
        out.push_str(&format!(" {key}={quote}{value}{quote}"));
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    "(ns:)?[a-c]"
}

fn attrs_strategy() -> impl Strategy<Value = Vec<(String, String, bool)>> {
    vec(("[a-z]{1,4}", "[a-z0-9 ]{0,8}", any::<bool>()), 0..3)
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 .,]{0,12}"
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        text_strategy().prop_map(Node::Text),
        (name_strategy(), attrs_strategy()).prop_map(|(name, attrs)| Node::Empty { name, attrs }),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (name_strategy(), attrs_strategy(), vec(inner, 0..4)).prop_map(|(name, attrs, children)| {
            Node::Element {
                name,
                attrs,
                children,
            }
        })
    })
}

fn document_strategy() -> impl Strategy<Value = String> {
    (attrs_strategy(), vec(node_strategy(), 0..5)).prop_map(|(attrs, children)| {
        let mut out = String::new();
        Node::Element {
            name: "root".to_string(),
            attrs,
            children,
        }
        .render(&mut out);
        out
    })
}

fn config_strategy() -> impl Strategy<Value = FormatConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(align, inline)| {
        FormatConfig::default()
            .with_align_attributes(align)
            .with_inline_element_values(inline)
    })
}

/// Tag names, parsed attributes and trimmed text, in document order
fn signature(xml: &str) -> Vec<String> {
    tokenize(xml)
        .significant()
        .map(|token| match token.kind {
            TokenKind::OpenTag { name, attributes } | TokenKind::SelfClosingTag { name, attributes } => {
                let attrs: Vec<_> = parse_attributes(attributes)
                    .iter()
                    .map(|a| format!("{}={}", a.key, a.value))
                    .collect();
                format!("{}<{name} {}>", token.kind.name(), attrs.join(" "))
            }
            TokenKind::CloseTag { name } => format!("</{name}>"),
            TokenKind::Text => token.raw.trim().to_string(),
            _ => token.raw.to_string(),
        })
        .collect()
}

proptest! {
    #[test]
    fn test_format_is_idempotent(xml in document_strategy(), config in config_strategy()) {
        let once = format_xml(&xml, &config);
        let twice = format_xml(&once, &config);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_format_preserves_structure(xml in document_strategy(), config in config_strategy()) {
        let formatted = format_xml(&xml, &config);
        prop_assert_eq!(signature(&xml), signature(&formatted));
    }

    #[test]
    fn test_format_lines_end_with_newline(xml in document_strategy(), config in config_strategy()) {
        let formatted = format_xml(&xml, &config);
        prop_assert!(formatted.ends_with('\n'));
        prop_assert!(!formatted.contains("\n\n"));
    }

    #[test]
    fn test_sibling_indexing_law(
        others in vec(any::<bool>(), 1..8),
        wrap in any::<bool>(),
    ) {
        let mut xml = String::from("<root>");
        if wrap {
            xml.push_str("<item>outer</item><group>");
        }
        for (i, other) in others.iter().enumerate() {
            if *other {
                xml.push_str("<other/><item x='1'/>");
            }
            xml.push_str(&format!("<item>mark{i}z</item>"));
        }
        if wrap {
            xml.push_str("</group>");
        }
        xml.push_str("</root>");

        let parent = if wrap { "/root[1]/group[1]" } else { "/root[1]" };
        let mut count = 0;
        for (i, other) in others.iter().enumerate() {
            count += if *other { 2 } else { 1 };
            let offset = xml.find(&format!("mark{i}z")).unwrap();
            prop_assert_eq!(get_path(&xml, offset), Some(format!("{parent}/item[{count}]")));
        }
    }

    #[test]
    fn test_causality_stripping_preserves_siblings(
        before in vec(node_strategy(), 0..3),
        after in vec(node_strategy(), 0..3),
        payload in text_strategy(),
        as_comment in any::<bool>(),
    ) {
        let render = |nodes: &[Node]| {
            let mut out = String::new();
            for node in nodes {
                node.render(&mut out);
            }
            out
        };
        let (before, after) = (render(before.as_slice()), render(after.as_slice()));
        let marker = if as_comment {
            format!("<!--VsDebuggerCausalityData {payload}-->")
        } else {
            format!("<s:VsDebuggerCausalityData xmlns:s=\"urn:x\">{payload}</s:VsDebuggerCausalityData>")
        };

        let xml = format!("<env>{before}{marker}{after}</env>");
        prop_assert_eq!(strip_causality_data(&xml), format!("<env>{before}{after}</env>"));
    }

    #[test]
    fn test_never_panics_on_arbitrary_text(input in "\\PC{0,64}", offset in 0usize..80) {
        let config = FormatConfig::default()
            .with_align_attributes(true)
            .with_inline_element_values(true)
            .with_hide_causality_data(true);
        let _ = format_xml(&input, &config);
        let _ = get_path(&input, offset);
    }
}
