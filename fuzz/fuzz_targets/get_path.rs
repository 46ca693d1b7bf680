#![no_main]
use libfuzzer_sys::fuzz_target;
use soapfmt::{get_path, get_path_at_char};

fuzz_target!(|input: (usize, &str)| {
    let (offset, xml) = input;
    let offset = offset % (xml.len() + 2);
    let _ = get_path(xml, offset);
    let _ = get_path_at_char(xml, offset);
});
