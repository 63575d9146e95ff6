#![no_main]
use action_tools_core::{classify, strip_ref};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(target) = std::str::from_utf8(data) {
        if let Ok(resource) = classify(target) {
            assert!(!resource.org().is_empty());
            assert!(!resource.repo().is_empty());
            assert!(resource.subpath().is_empty() || resource.subpath().starts_with('/'));
            // The ref never survives classification
            assert_eq!(resource.to_string(), strip_ref(target));
        }
    }
});
