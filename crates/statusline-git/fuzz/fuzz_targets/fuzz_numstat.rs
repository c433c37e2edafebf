#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = statusline_git::stats::parse_numstat(text);
        let _ = statusline_git::stats::parse_wc_total(text, 1);
        let _ = statusline_git::stats::parse_wc_total(text, 3);
    }
});
