//! Tab domain model and contiguous-run grouping
//!
//! A snapshot of browser tabs arrives as an ordered sequence plus group
//! metadata. [`TabListGrouper`] partitions that sequence into [`TabList`]s:
//! maximal runs of adjacent tabs sharing one group membership (or none).
//! Only contiguity merges tabs; a group whose tabs are interleaved with
//! foreign tabs produces several lists with the same group id, mirroring
//! physical tab order.

use std::collections::HashMap;

/// One browser tab, snapshot at export time.
///
/// The title is stored pre-escaped: callers run it through
/// [`Markdown::escape_link_text`](crate::Markdown::escape_link_text) once at
/// construction, and formatters interpolate it as-is afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub title: String,
    pub url: String,
    pub group_id: i32,
}

impl Tab {
    pub fn new(title: String, url: String, group_id: i32) -> Self {
        Tab {
            title,
            url,
            group_id,
        }
    }
}

/// Tab group metadata, snapshot at export time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub title: String,
    pub id: i32,
    pub color: String,
}

impl TabGroup {
    /// Sentinel group id for tabs not in any group, matching the host API's
    /// TAB_GROUP_ID_NONE.
    pub const NON_GROUP_ID: i32 = -1;

    pub fn new(title: String, id: i32, color: String) -> Self {
        TabGroup { title, id, color }
    }

    /// The group's name for display, falling back to the color-based
    /// placeholder the browser UI shows for unnamed groups.
    pub fn display_title(&self) -> String {
        if self.title.is_empty() {
            format!("Untitled {} group", self.color)
        } else {
            self.title.clone()
        }
    }
}

/// A contiguous run of tabs sharing one group membership (or none).
///
/// Constructed per export and discarded after rendering. Invariant: all
/// member tabs share `group_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabList {
    pub name: String,
    pub group_id: i32,
    pub tabs: Vec<Tab>,
}

impl TabList {
    /// A run of tabs that are not in any group.
    pub fn non_group(tabs: Vec<Tab>) -> Self {
        TabList {
            name: String::new(),
            group_id: TabGroup::NON_GROUP_ID,
            tabs,
        }
    }

    pub fn is_non_group(&self) -> bool {
        self.group_id == TabGroup::NON_GROUP_ID
    }
}

/// Partitions an ordered tab sequence into contiguous same-group runs.
pub struct TabListGrouper {
    group_index: HashMap<i32, TabGroup>,
}

impl TabListGrouper {
    pub fn new(groups: Vec<TabGroup>) -> Self {
        let group_index = groups.into_iter().map(|group| (group.id, group)).collect();
        TabListGrouper { group_index }
    }

    /// Collect `tabs` into ordered [`TabList`]s.
    ///
    /// Scans left to right: a tab joins the current list while its group id
    /// matches, otherwise the current list is closed and a new one is seeded
    /// from the tab. Empty input yields an empty Vec.
    pub fn collect_tabs_by_group(&self, tabs: Vec<Tab>) -> Vec<TabList> {
        let mut iter = tabs.into_iter();
        let Some(first) = iter.next() else {
            return Vec::new();
        };

        let mut collection = Vec::new();
        let mut current = self.seed_tab_list(first);

        for tab in iter {
            if tab.group_id == current.group_id {
                current.tabs.push(tab);
            } else {
                collection.push(current);
                current = self.seed_tab_list(tab);
            }
        }

        collection.push(current);
        collection
    }

    /// Start a new list from one tab. A tab whose group id is the sentinel
    /// or misses the index degrades to an ungrouped list rather than
    /// failing; snapshots can race group removal.
    fn seed_tab_list(&self, tab: Tab) -> TabList {
        if tab.group_id == TabGroup::NON_GROUP_ID {
            return TabList::non_group(vec![tab]);
        }

        match self.group_index.get(&tab.group_id) {
            Some(group) => TabList {
                name: group.display_title(),
                group_id: group.id,
                tabs: vec![tab],
            },
            None => TabList::non_group(vec![tab]),
        }
    }
}
