#![no_main]
use libfuzzer_sys::fuzz_target;
use soapfmt::{format_xml, FormatConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let config = FormatConfig::default()
            .with_align_attributes(true)
            .with_inline_element_values(true)
            .with_hide_causality_data(true);
        let once = format_xml(s, &config);
        let _ = format_xml(&once, &config);
    }
});
