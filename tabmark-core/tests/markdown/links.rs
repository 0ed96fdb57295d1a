//! Link formatting tests
//!
//! These cover the escaping contract against titles as they actually occur
//! in the wild: ticket prefixes, emphasis triggers, truncated brackets,
//! non-BMP characters.

use proptest::prelude::*;
use tabmark_core::markdown::{brackets_are_balanced, escape_link_text};
use tabmark_core::Markdown;

#[test]
fn test_spec_bracket_cases() {
    assert!(brackets_are_balanced("[]"));
    assert!(brackets_are_balanced("[[]]"));
    assert!(!brackets_are_balanced("]["));
    assert!(!brackets_are_balanced("["));
}

#[test]
fn test_ticket_prefix_title() {
    let markdown = Markdown::default();
    assert_eq!(
        markdown.link_to("[APOLLO-13] Build a Rocket Engine", "https://example.com"),
        "[[APOLLO-13] Build a Rocket Engine](https://example.com)"
    );

    let strict = Markdown {
        always_escape_link_bracket: true,
        ..Markdown::default()
    };
    assert_eq!(
        strict.link_to("[APOLLO-13] Build a Rocket Engine", "https://example.com"),
        "[\\[APOLLO-13\\] Build a Rocket Engine](https://example.com)"
    );
}

#[test]
fn test_default_title() {
    let markdown = Markdown::default();
    assert_eq!(
        markdown.link_to("", "http://example.com"),
        "[(No Title)](http://example.com)"
    );
}

#[test]
fn test_truncated_title_gets_escaped() {
    // Browsers truncate long titles; a cut-off "[WIP" must not break the
    // enclosing link syntax.
    let markdown = Markdown::default();
    assert_eq!(
        markdown.link_to("[WIP Someth…", "https://example.com"),
        "[\\[WIP Someth…](https://example.com)"
    );
}

#[test]
fn test_url_decode_mode() {
    let markdown = Markdown {
        decode_urls: true,
        ..Markdown::default()
    };

    assert_eq!(
        markdown.link_to("hello", "https://example.com/hello%20world"),
        "[hello](https://example.com/hello%20world)"
    );
    assert_eq!(
        markdown.link_to("中文", "https://example.com/%E4%B8%AD%E6%96%87"),
        "[中文](https://example.com/中文)"
    );
    // malformed escapes fall back unchanged
    assert_eq!(
        markdown.link_to("x", "https://example.com/%ZZ"),
        "[x](https://example.com/%ZZ)"
    );
}

#[test]
fn test_linked_image_shape() {
    let markdown = Markdown::default();
    assert_eq!(
        markdown.linked_image("shot", "https://x/s.png", "https://x/page"),
        "[![shot](https://x/s.png)](https://x/page)"
    );
}

/// Reference bracket scan using an explicit stack, as the engine is
/// specified: push on `[`, pop on `]`, underflow or leftovers mean
/// unbalanced.
fn stack_scan_balanced(text: &str) -> bool {
    let mut stack = Vec::new();
    for ch in text.chars() {
        match ch {
            '[' => stack.push(ch),
            ']' => {
                if stack.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

proptest! {
    #[test]
    fn prop_balance_matches_stack_scan(text in "[\\[\\]ab]{0,48}") {
        prop_assert_eq!(brackets_are_balanced(&text), stack_scan_balanced(&text));
    }

    #[test]
    fn prop_escaping_is_reversible(text in "[\\[\\]a-z *_`~中🦀]{0,32}") {
        // Escaping only inserts backslashes; stripping them recovers the
        // original title (inputs here contain no backslash themselves).
        let escaped = escape_link_text(&text, true);
        prop_assert_eq!(escaped.replace('\\', ""), text);
    }

    #[test]
    fn prop_forced_escape_leaves_no_bare_specials(text in "[\\[\\]a-z*_`~]{0,32}") {
        let escaped = escape_link_text(&text, true);
        let chars: Vec<char> = escaped.chars().collect();
        for (idx, ch) in chars.iter().enumerate() {
            if matches!(ch, '[' | ']' | '*' | '_' | '`' | '~') {
                prop_assert!(idx > 0 && chars[idx - 1] == '\\');
            }
        }
    }
}
