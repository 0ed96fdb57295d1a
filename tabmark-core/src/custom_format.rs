//! Custom formats: render input and template rendering
//!
//! Custom formats let users author their own output templates. The engine's
//! job is building [`RenderInput`], a numbering-annotated structure the
//! template iterates over. Two views of the same tab lists:
//!
//! - `links`: every tab flattened in order, numbered 1..N ignoring grouping.
//! - `grouped`: one entry per "slot" (a lone page is a slot, an entire
//!   group is a slot), so top-level numbering advances by exactly one per
//!   entry regardless of group size, and numbering inside a group restarts
//!   at 1. A template enumerating slots stays stable when a group grows.
//!
//! Rendering uses minijinja with HTML auto-escaping disabled, since the
//! output is Markdown, not HTML.

use crate::error::ExportError;
use crate::tabs::TabList;
use minijinja::{AutoEscape, Environment};
use serde::Serialize;

/// Where a custom format applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// A single link (current tab, right-clicked link).
    SingleLink,
    /// A set of tabs (all tabs, highlighted tabs).
    MultipleLinks,
}

/// One tab in the flat `links` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInputLink {
    pub title: String,
    pub url: String,
    /// 1-based, strictly increasing across the whole flattened sequence.
    pub number: usize,
}

/// One entry in the `grouped` sequence: either a lone tab or a whole group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInputEntry {
    /// Tab title, or group display name for group entries.
    pub title: String,
    /// Tab URL; `None` for group entries, which have no URL of their own.
    pub url: Option<String>,
    pub is_group: bool,
    /// Top-level: advances by exactly 1 per entry. Inside a group: restarts
    /// at 1.
    pub number: usize,
    /// Member tabs for group entries; empty for leaves.
    pub links: Vec<RenderInputEntry>,
}

/// The structure handed to a custom-format template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInput {
    pub links: Vec<RenderInputLink>,
    pub grouped: Vec<RenderInputEntry>,
}

/// Build numbering-consistent render input from grouped tab lists.
pub fn make_render_input(tab_lists: &[TabList]) -> RenderInput {
    let links = tab_lists
        .iter()
        .flat_map(|tab_list| tab_list.tabs.iter())
        .enumerate()
        .map(|(idx, tab)| RenderInputLink {
            title: tab.title.clone(),
            url: tab.url.clone(),
            number: idx + 1,
        })
        .collect();

    let mut grouped = Vec::new();
    let mut number = 1;

    for tab_list in tab_lists {
        if tab_list.is_non_group() {
            for tab in &tab_list.tabs {
                grouped.push(RenderInputEntry {
                    title: tab.title.clone(),
                    url: Some(tab.url.clone()),
                    is_group: false,
                    number,
                    links: Vec::new(),
                });
                number += 1;
            }
        } else {
            let members = tab_list
                .tabs
                .iter()
                .enumerate()
                .map(|(idx, tab)| RenderInputEntry {
                    title: tab.title.clone(),
                    url: Some(tab.url.clone()),
                    is_group: false,
                    number: idx + 1,
                    links: Vec::new(),
                })
                .collect();

            grouped.push(RenderInputEntry {
                title: tab_list.name.clone(),
                url: None,
                is_group: true,
                number,
                links: members,
            });
            number += 1;
        }
    }

    RenderInput { links, grouped }
}

/// A user-authored output format bound to a storage slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFormat {
    pub context: Context,
    pub slot: String,
    pub name: String,
    pub template: String,
    pub show_in_menus: bool,
}

impl CustomFormat {
    /// Name for menus and option pages, with a per-slot fallback for
    /// unnamed formats.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Custom Format {}", self.slot)
        } else {
            self.name.clone()
        }
    }

    /// Render the template against multi-tab input.
    pub fn render(&self, input: &RenderInput) -> Result<String, ExportError> {
        render_template(&self.template, input)
    }

    /// Render the template against a single link.
    pub fn render_link(&self, link: &RenderInputLink) -> Result<String, ExportError> {
        render_template(&self.template, link)
    }
}

fn render_template<S: Serialize>(template: &str, input: &S) -> Result<String, ExportError> {
    let mut env = Environment::new();
    // Output is Markdown; substituted values must never be HTML-escaped.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.render_str(template, input)
        .map_err(|err| ExportError::Template(err.to_string()))
}
