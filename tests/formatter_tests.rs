#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use std::fs;
use std::time::{Duration, Instant};

use soapfmt::{format_xml, strip_causality_data, FormatConfig, XmlFormatter};

fn read_test_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read file: {}", path))
}

fn lines(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[test]
fn test_simple_indentation() {
    let result = format_xml("<root><child>value</child></root>", &FormatConfig::default());
    assert_eq!(
        result,
        lines(&["<root>", "  <child>", "    value", "  </child>", "</root>"])
    );
}

#[test]
fn test_nesting_depth_multiplies_indent() {
    let result = format_xml("<a><b><c>text</c></b></a>", &FormatConfig::default());
    assert!(result.contains("\n    <c>\n"));
    assert!(result.contains("\n      text\n"));

    let result = format_xml("<a><b><c><d><e>deep</e></d></c></b></a>", &FormatConfig::default());
    assert!(result.contains("\n        <e>\n"));
    assert!(result.trim().lines().count() > 5);
}

#[test]
fn test_custom_indent_width() {
    let config = FormatConfig::default().with_indent_spaces(4);
    assert_eq!(
        format_xml("<a><b/></a>", &config),
        lines(&["<a>", "    <b/>", "</a>"])
    );
}

#[test]
fn test_reformats_existing_whitespace() {
    let messy = "\n\n   <root>\n\t\t<child>\n value \n</child>   </root>  \n";
    assert_eq!(
        format_xml(messy, &FormatConfig::default()),
        format_xml("<root><child>value</child></root>", &FormatConfig::default())
    );
}

#[test]
fn test_attributes_on_one_line() {
    let result = format_xml(
        "<root id=\"1\"\n      name='test'><child/></root>",
        &FormatConfig::default(),
    );
    assert_eq!(
        result,
        lines(&["<root id=\"1\" name=\"test\">", "  <child/>", "</root>"])
    );
}

#[test]
fn test_hide_causality_data() {
    let xml = "<root><!--VsDebuggerCausalityData data--><data>value</data></root>";
    let config = FormatConfig::default().with_hide_causality_data(true);
    let result = format_xml(xml, &config);
    assert!(!result.contains("VsDebuggerCausalityData"));
    assert!(result.contains("<data>"));

    let kept = format_xml(xml, &FormatConfig::default());
    assert!(kept.contains("<!--VsDebuggerCausalityData data-->"));
}

#[test]
fn test_malformed_input_passes_through() {
    let result = format_xml("<a><b>1 < 2</a><c attr=", &FormatConfig::default());
    assert_eq!(
        result,
        lines(&["<a>", "  <b>", "    1 < 2", "  </a>", "  <c attr="])
    );
}

#[test]
fn test_non_xml_text() {
    assert_eq!(
        format_xml("  just some text  ", &FormatConfig::default()),
        "just some text\n"
    );
}

#[test]
fn test_soap_response_fixture() {
    let input = read_test_file("tests/input/soap_response.xml");
    let config = FormatConfig::default()
        .with_align_attributes(true)
        .with_inline_element_values(true)
        .with_hide_causality_data(true);
    let result = XmlFormatter::new(config).format(&input);

    let expected = lines(&[
        r#"<?xml version="1.0" encoding="utf-8"?>"#,
        r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/""#,
        r#"               xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#,
        r#"               xmlns:xsd="http://www.w3.org/2001/XMLSchema">"#,
        r#"  <soap:Header></soap:Header>"#,
        r#"  <soap:Body>"#,
        r#"    <GetCustomersResponse xmlns="http://example.com/customers">"#,
        r#"      <!-- page 1 of 1 -->"#,
        r#"      <Customer id="1""#,
        r#"                status="active">"#,
        r#"        <Name>Ada Lovelace</Name>"#,
        r#"        <Email>ada@example.com</Email>"#,
        r#"        <Phone/>"#,
        r#"      </Customer>"#,
        r#"      <Customer id="2""#,
        r#"                status="inactive">"#,
        r#"        <Name>Charles Babbage</Name>"#,
        r#"        <Email>charles@example.com</Email>"#,
        r#"        <Phone type="mobile""#,
        r#"               primary="true"/>"#,
        r#"      </Customer>"#,
        r#"      <Total>2</Total>"#,
        r#"    </GetCustomersResponse>"#,
        r#"  </soap:Body>"#,
        r#"</soap:Envelope>"#,
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_fixture_format_is_fixpoint() {
    let input = read_test_file("tests/input/soap_response.xml");
    for align in [false, true] {
        for inline in [false, true] {
            let config = FormatConfig::default()
                .with_align_attributes(align)
                .with_inline_element_values(inline);
            let once = format_xml(&input, &config);
            assert_eq!(format_xml(&once, &config), once);
        }
    }
}

#[test]
fn test_strip_preserves_siblings() {
    let xml = "<h><a>1</a>\n<x:VsDebuggerCausalityData>\nabc\n</x:VsDebuggerCausalityData><b>2</b></h>";
    assert_eq!(strip_causality_data(xml), "<h><a>1</a><b>2</b></h>");
}

#[test]
fn test_unterminated_markup_stays_linear() {
    for unit in ["<a", "<!--"] {
        let input = unit.repeat(1_000_000 / unit.len());
        let start = Instant::now();
        let result = format_xml(&input, &FormatConfig::default());
        assert_eq!(result.trim_end(), input);
        assert!(
            start.elapsed() < Duration::from_secs(10),
            "formatting {unit} took {:?}",
            start.elapsed()
        );
    }
}
