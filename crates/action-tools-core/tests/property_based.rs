//! Property-based tests using proptest

use action_tools_core::github::pagination::next_link;
use action_tools_core::{classify, strip_ref, Error, ResourceKind};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_][A-Za-z0-9_.-]{0,20}").expect("valid regex")
}

fn arb_ref() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z0-9.]{1,12}".prop_map(|r| format!("@v{r}")),
        "[0-9a-f]{40}".prop_map(|sha| format!("@{sha}")),
    ]
}

proptest! {
    #[test]
    fn test_workflow_targets_classify_as_workflow(
        org in arb_name(),
        repo in arb_name(),
        file in arb_name(),
        ext in prop_oneof![Just("yml"), Just("yaml")],
        version in arb_ref(),
    ) {
        let subpath = format!("/.github/workflows/{file}.{ext}");
        let target = format!("{org}/{repo}{subpath}{version}");
        let r = classify(&target).unwrap();
        prop_assert_eq!(r.kind(), ResourceKind::Workflow);
        prop_assert_eq!(r.org(), org.as_str());
        prop_assert_eq!(r.repo(), repo.as_str());
        prop_assert_eq!(r.subpath(), subpath.as_str());
    }

    #[test]
    fn test_action_targets_classify_as_action(
        org in arb_name(),
        repo in arb_name(),
        segments in prop::collection::vec("[a-z0-9_-]{1,10}", 0..4),
        version in arb_ref(),
    ) {
        let subpath: String = segments.iter().map(|s| format!("/{s}")).collect();
        let target = format!("{org}/{repo}{subpath}{version}");
        let r = classify(&target).unwrap();
        prop_assert_eq!(r.kind(), ResourceKind::Action);
        prop_assert_eq!(r.subpath(), subpath.as_str());
        prop_assert_eq!(r.to_string(), strip_ref(&target));
    }

    #[test]
    fn test_classify_never_panics(s in "\\PC{0,64}") {
        match classify(&s) {
            Ok(r) => {
                prop_assert!(!r.org().is_empty());
                prop_assert!(!r.repo().is_empty());
                prop_assert!(r.subpath().is_empty() || r.subpath().starts_with('/'));
            }
            Err(Error::InvalidTarget(t)) => prop_assert_eq!(t, s),
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_targets_without_slash_are_invalid(s in "[A-Za-z0-9_.-]{1,30}") {
        prop_assert!(classify(&s).is_err());
    }

    #[test]
    fn test_next_link_found_regardless_of_position(
        page in 2u32..1000,
        before in prop::bool::ANY,
    ) {
        let next = format!(r#"<https://api.github.com/search/code?page={page}>; rel="next""#);
        let last = r#"<https://api.github.com/search/code?page=1000>; rel="last""#;
        let header = if before { format!("{next}, {last}") } else { format!("{last}, {next}") };
        let expected = format!("https://api.github.com/search/code?page={page}");
        prop_assert_eq!(next_link(&header), Some(expected.as_str()));
    }
}
