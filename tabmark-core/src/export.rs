//! Built-in export formats
//!
//! The built-in path of the engine: grouped tab lists are flattened into
//! [`ListNode`]s (group name, then an indented sublist of members) and
//! rendered through the list renderer. Formats and list types are closed
//! enums matched exhaustively; string names exist only at the host boundary
//! via `FromStr`.

use crate::error::ExportError;
use crate::markdown::{ListNode, Markdown};
use crate::tabs::{Tab, TabList};
use std::str::FromStr;

/// What each tab contributes to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabExportFormat {
    /// `[title](url)`
    Link,
    /// Title only
    Title,
    /// URL only
    Url,
}

impl TabExportFormat {
    pub fn name(self) -> &'static str {
        match self {
            TabExportFormat::Link => "link",
            TabExportFormat::Title => "title",
            TabExportFormat::Url => "url",
        }
    }
}

impl FromStr for TabExportFormat {
    type Err = ExportError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "link" => Ok(TabExportFormat::Link),
            "title" => Ok(TabExportFormat::Title),
            "url" => Ok(TabExportFormat::Url),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Bullet list or task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    List,
    TaskList,
}

impl FromStr for ListType {
    type Err = ExportError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "list" => Ok(ListType::List),
            "task-list" => Ok(ListType::TaskList),
            other => Err(ExportError::UnknownListType(other.to_string())),
        }
    }
}

/// Format one tab for the given export format.
///
/// Titles are pre-escaped at [`Tab`] construction, so the link variant wraps
/// without escaping again.
pub fn format_tab(tab: &Tab, format: TabExportFormat, markdown: &Markdown) -> String {
    match format {
        TabExportFormat::Link => markdown.wrap_link(&tab.title, &tab.url),
        TabExportFormat::Title => tab.title.clone(),
        TabExportFormat::Url => tab.url.clone(),
    }
}

/// Flatten grouped tab lists into list nodes.
///
/// Ungrouped tabs become top-level leaves. A grouped list contributes its
/// name as a leaf followed by a sublist of its member tabs.
pub fn tab_lists_to_list_nodes(
    tab_lists: &[TabList],
    format: TabExportFormat,
    markdown: &Markdown,
) -> Vec<ListNode> {
    let mut items = Vec::new();

    for tab_list in tab_lists {
        if tab_list.is_non_group() {
            for tab in &tab_list.tabs {
                items.push(ListNode::Leaf(format_tab(tab, format, markdown)));
            }
        } else {
            items.push(ListNode::Leaf(tab_list.name.clone()));
            items.push(ListNode::Sublist(
                tab_list
                    .tabs
                    .iter()
                    .map(|tab| ListNode::Leaf(format_tab(tab, format, markdown)))
                    .collect(),
            ));
        }
    }

    items
}

/// Render grouped tab lists with a built-in format, end to end.
pub fn render_built_in(
    tab_lists: &[TabList],
    format: TabExportFormat,
    list_type: ListType,
    markdown: &Markdown,
) -> String {
    let items = tab_lists_to_list_nodes(tab_lists, format, markdown);
    match list_type {
        ListType::List => markdown.list(&items),
        ListType::TaskList => markdown.task_list(&items),
    }
}

/// Format a single tab as a link, for the current-tab action.
pub fn current_tab_link(tab: &Tab, markdown: &Markdown) -> String {
    markdown.wrap_link(&tab.title, &tab.url)
}

/// Format a right-clicked link or selection as a Markdown link. Unlike tab
/// titles, the text arrives raw and is escaped here.
pub fn link_for_selection(text: &str, url: &str, markdown: &Markdown) -> String {
    markdown.link_to(text, url)
}
