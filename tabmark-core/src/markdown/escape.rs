//! Link text escaping
//!
//! Page titles are untrusted input as far as Markdown syntax is concerned:
//! `*`, `_`, `` ` `` and `~` trigger inline formats, and an unbalanced `]`
//! terminates the enclosing link. Balanced bracket pairs (e.g. a `[JIRA-123]`
//! ticket prefix) are tolerated by CommonMark link text and stay untouched
//! unless the caller forces bracket escaping.
//!
//! Both scans iterate by Unicode scalar value so that characters outside the
//! BMP are never split.

/// Check whether `[` / `]` nest and close correctly in `text`.
///
/// A counting scan: push on `[`, pop on `]`. Underflow or a nonzero final
/// depth means unbalanced.
pub fn brackets_are_balanced(text: &str) -> bool {
    let mut depth: usize = 0;

    for ch in text.chars() {
        match ch {
            '[' => depth += 1,
            ']' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    depth == 0
}

/// Escape `text` so it is safe as Markdown link text.
///
/// The inline-format triggers `*`, `_`, `` ` `` and `~` are always escaped.
/// Brackets are escaped when `always_escape_brackets` is set or when the
/// text's brackets are unbalanced.
pub fn escape_link_text(text: &str, always_escape_brackets: bool) -> String {
    let should_escape_brackets = always_escape_brackets || !brackets_are_balanced(text);

    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '[' | ']' if should_escape_brackets => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '*' | '_' | '`' | '~' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }

    escaped
}
