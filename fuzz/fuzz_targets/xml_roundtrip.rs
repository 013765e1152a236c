#![no_main]
use libfuzzer_sys::fuzz_target;
use loosexml::{from_str, to_string_with_config, FormatConfig};

// print, parse, print must be stable
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(doc) = from_str(s) else {
        return;
    };
    let config = FormatConfig::with_indent("  ");
    let once = to_string_with_config(&doc, &config);
    if let Ok(again) = from_str(&once) {
        assert_eq!(once, to_string_with_config(&again, &config));
    }
});
