//! Tab snapshot deserialization
//!
//! The CLI stands in for the browser host: instead of querying tabs, it
//! reads a point-in-time snapshot as JSON. Field names are camelCase to
//! match what a host-side exporter dumps from the tabs API. Tabs on
//! restricted pages may arrive without title or URL; those default to empty
//! strings, and a missing `groupId` means not grouped.

use serde::Deserialize;
use tabmark_core::{Markdown, Tab, TabGroup};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSnapshot {
    #[serde(default)]
    pub tabs: Vec<SnapshotTab>,
    #[serde(default)]
    pub groups: Vec<SnapshotGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotTab {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "non_group_id")]
    pub group_id: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotGroup {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub color: String,
}

fn non_group_id() -> i32 {
    TabGroup::NON_GROUP_ID
}

impl TabSnapshot {
    /// Convert into domain values. Titles are escaped here, once; the
    /// engine interpolates them as-is afterwards.
    pub fn into_domain(self, markdown: &Markdown) -> (Vec<Tab>, Vec<TabGroup>) {
        let tabs = self
            .tabs
            .into_iter()
            .map(|tab| Tab::new(markdown.escape_link_text(&tab.title), tab.url, tab.group_id))
            .collect();
        let groups = self
            .groups
            .into_iter()
            .map(|group| TabGroup::new(group.title, group.id, group.color))
            .collect();
        (tabs, groups)
    }
}
