#![no_main]
use libfuzzer_sys::fuzz_target;
use loosexml::{from_reader, from_str};

fuzz_target!(|data: &[u8]| {
    let _ = from_reader(data);
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = from_str(s);
    }
});
