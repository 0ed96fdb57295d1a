//! Markdown formatter
//!
//! [`Markdown`] bundles the four recognized style options and exposes the
//! two leaf components of the engine: inline link/image formatting and
//! nested list rendering. It is a pure value; construct one per export from
//! whatever configuration source the host uses.

pub mod escape;
pub mod list;
pub mod url;

pub use escape::{brackets_are_balanced, escape_link_text};
pub use list::ListNode;
pub use url::selectively_decode_url;

use std::borrow::Cow;

/// Bullet used for unordered list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnorderedListMarker {
    #[default]
    Dash,
    Asterisk,
    Plus,
}

impl UnorderedListMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            UnorderedListMarker::Dash => "-",
            UnorderedListMarker::Asterisk => "*",
            UnorderedListMarker::Plus => "+",
        }
    }
}

/// Indentation unit for nested list levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentationStyle {
    /// Two literal spaces per level, the minimum CommonMark needs for
    /// correct unordered-list nesting.
    #[default]
    Spaces,
    /// One tab per level.
    Tab,
}

impl IndentationStyle {
    pub fn unit(self) -> &'static str {
        match self {
            IndentationStyle::Spaces => "  ",
            IndentationStyle::Tab => "\t",
        }
    }
}

/// Markdown formatter with explicit style options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markdown {
    /// Escape `[` / `]` in link text even when balanced.
    pub always_escape_link_bracket: bool,
    pub unordered_list_marker: UnorderedListMarker,
    pub indentation: IndentationStyle,
    /// Percent-decode URLs for readability (space and parentheses stay
    /// encoded; see [`selectively_decode_url`]).
    pub decode_urls: bool,
}

impl Markdown {
    /// Placeholder for tabs without a title (e.g. about:blank).
    pub const DEFAULT_TITLE: &'static str = "(No Title)";

    pub fn new(
        always_escape_link_bracket: bool,
        unordered_list_marker: UnorderedListMarker,
        indentation: IndentationStyle,
        decode_urls: bool,
    ) -> Self {
        Markdown {
            always_escape_link_bracket,
            unordered_list_marker,
            indentation,
            decode_urls,
        }
    }

    /// Escape `text` for use as Markdown link text, honoring the bracket
    /// option. See [`escape::escape_link_text`].
    pub fn escape_link_text(&self, text: &str) -> String {
        escape_link_text(text, self.always_escape_link_bracket)
    }

    /// Format an inline link: `[title](url)`.
    ///
    /// The title is escaped here; blank titles become
    /// [`Markdown::DEFAULT_TITLE`].
    pub fn link_to(&self, title: &str, url: &str) -> String {
        self.wrap_link(&self.escape_link_text(title), url)
    }

    /// Format an inline image: `![title](url)`.
    ///
    /// Alt text is emitted as-is; an empty alt is valid and common for
    /// auto-discovered images.
    pub fn image_for(&self, title: &str, url: &str) -> String {
        format!("![{title}]({})", self.render_url(url))
    }

    /// Format an image wrapped in a link: `[![alt](image_url)](link_url)`.
    pub fn linked_image(&self, alt: &str, image_url: &str, link_url: &str) -> String {
        format!(
            "[![{alt}]({})]({})",
            self.render_url(image_url),
            self.render_url(link_url)
        )
    }

    /// Render items as an unordered list with the configured marker.
    pub fn list(&self, items: &[ListNode]) -> String {
        list::render_nested_list(items, self.unordered_list_marker.as_str(), self.indent_unit())
    }

    /// Render items as a GFM task list (unchecked).
    pub fn task_list(&self, items: &[ListNode]) -> String {
        list::render_nested_list(items, "- [ ]", self.indent_unit())
    }

    pub fn indent_unit(&self) -> &'static str {
        self.indentation.unit()
    }

    /// Wrap an already-escaped title into `[title](url)`.
    ///
    /// Tab titles are escaped once, at `Tab` construction; formatting them
    /// through [`Markdown::link_to`] again would double-escape. This is the
    /// shared tail of both paths: blank-title fallback plus URL treatment.
    pub(crate) fn wrap_link(&self, escaped_title: &str, url: &str) -> String {
        let title = if escaped_title.trim().is_empty() {
            Self::DEFAULT_TITLE
        } else {
            escaped_title
        };
        format!("[{title}]({})", self.render_url(url))
    }

    fn render_url<'a>(&self, url: &'a str) -> Cow<'a, str> {
        if self.decode_urls {
            Cow::Owned(selectively_decode_url(url))
        } else {
            Cow::Borrowed(url)
        }
    }
}
