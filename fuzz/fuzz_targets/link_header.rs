#![no_main]
use action_tools_core::github::pagination::{next_link, next_page};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(header) = std::str::from_utf8(data) {
        if let Some(url) = next_link(header) {
            assert!(!url.contains('>'));
        }
        // Malformed links are errors, never panics
        let _ = next_page(Some(header), "/api/v3");
    }
});
