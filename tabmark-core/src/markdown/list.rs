//! Nested list rendering
//!
//! A generic renderer for unordered Markdown lists. Items are a tree of
//! [`ListNode`]s; string leaves become list items, sublists indent one level
//! deeper right after their preceding sibling. No escaping happens here:
//! callers pre-escape leaf content (see [`super::escape`]).

/// One node of a nested list.
///
/// Modeled as a tagged variant rather than runtime type checks so recursion
/// is exhaustively matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListNode {
    Leaf(String),
    Sublist(Vec<ListNode>),
}

impl From<&str> for ListNode {
    fn from(text: &str) -> Self {
        ListNode::Leaf(text.to_string())
    }
}

impl From<String> for ListNode {
    fn from(text: String) -> Self {
        ListNode::Leaf(text)
    }
}

impl From<Vec<ListNode>> for ListNode {
    fn from(children: Vec<ListNode>) -> Self {
        ListNode::Sublist(children)
    }
}

/// Render `items` as an unordered list.
///
/// Every line, including the last, ends with `\n`. A leaf at depth `d`
/// renders as `{indent_unit × d}{marker} {text}`.
pub fn render_nested_list(items: &[ListNode], marker: &str, indent_unit: &str) -> String {
    let mut rendered = String::new();
    render_level(&mut rendered, items, marker, indent_unit, 0);
    rendered
}

fn render_level(
    rendered: &mut String,
    items: &[ListNode],
    marker: &str,
    indent_unit: &str,
    level: usize,
) {
    for item in items {
        match item {
            ListNode::Leaf(text) => {
                for _ in 0..level {
                    rendered.push_str(indent_unit);
                }
                rendered.push_str(marker);
                rendered.push(' ');
                rendered.push_str(text);
                rendered.push('\n');
            }
            ListNode::Sublist(children) => {
                render_level(rendered, children, marker, indent_unit, level + 1);
            }
        }
    }
}
