//! Grouping pipeline tests
//!
//! Full pipeline runs: raw tabs through the grouper into rendered Markdown,
//! plus order/partition invariants checked with proptest.

use proptest::prelude::*;
use tabmark_core::export::{render_built_in, ListType, TabExportFormat};
use tabmark_core::{make_render_input, Markdown, Tab, TabGroup, TabListGrouper};

fn tab(markdown: &Markdown, title: &str, url: &str, group_id: i32) -> Tab {
    Tab::new(markdown.escape_link_text(title), url.to_string(), group_id)
}

#[test]
fn test_window_snapshot_renders_grouped_list() {
    let markdown = Markdown::default();
    let grouper = TabListGrouper::new(vec![
        TabGroup::new("Research".to_string(), 3, "blue".to_string()),
        TabGroup::new(String::new(), 9, "orange".to_string()),
    ]);

    let tab_lists = grouper.collect_tabs_by_group(vec![
        tab(&markdown, "Inbox", "https://mail.example.com/", TabGroup::NON_GROUP_ID),
        tab(&markdown, "Paper A", "https://arxiv.example.com/a", 3),
        tab(&markdown, "Paper B", "https://arxiv.example.com/b", 3),
        tab(&markdown, "Standup notes", "https://docs.example.com/1", 9),
        tab(&markdown, "Dashboard", "https://grafana.example.com/", TabGroup::NON_GROUP_ID),
    ]);

    let rendered = render_built_in(&tab_lists, TabExportFormat::Link, ListType::List, &markdown);
    assert_eq!(
        rendered,
        "- [Inbox](https://mail.example.com/)\n\
         - Research\n\
         \x20 - [Paper A](https://arxiv.example.com/a)\n\
         \x20 - [Paper B](https://arxiv.example.com/b)\n\
         - Untitled orange group\n\
         \x20 - [Standup notes](https://docs.example.com/1)\n\
         - [Dashboard](https://grafana.example.com/)\n"
    );
}

#[test]
fn test_interleaved_group_renders_twice() {
    // A group split by a foreign tab shows up as two separate sublists in
    // physical order, never merged.
    let markdown = Markdown::default();
    let grouper =
        TabListGrouper::new(vec![TabGroup::new("G".to_string(), 1, "red".to_string())]);

    let tab_lists = grouper.collect_tabs_by_group(vec![
        tab(&markdown, "a", "https://x/a", 1),
        tab(&markdown, "b", "https://x/b", TabGroup::NON_GROUP_ID),
        tab(&markdown, "c", "https://x/c", 1),
    ]);

    let rendered = render_built_in(&tab_lists, TabExportFormat::Link, ListType::List, &markdown);
    assert_eq!(
        rendered,
        "- G\n  - [a](https://x/a)\n- [b](https://x/b)\n- G\n  - [c](https://x/c)\n"
    );
}

#[test]
fn test_stale_group_id_renders_ungrouped() {
    // Group metadata can lag behind the tab strip; tabs pointing at a
    // removed group render at top level.
    let markdown = Markdown::default();
    let grouper = TabListGrouper::new(vec![]);

    let tab_lists =
        grouper.collect_tabs_by_group(vec![tab(&markdown, "orphan", "https://x/o", 42)]);

    let rendered = render_built_in(&tab_lists, TabExportFormat::Link, ListType::List, &markdown);
    assert_eq!(rendered, "- [orphan](https://x/o)\n");
}

#[test]
fn test_title_and_url_formats_through_pipeline() {
    let markdown = Markdown::default();
    let grouper =
        TabListGrouper::new(vec![TabGroup::new("G".to_string(), 1, "grey".to_string())]);
    let tabs = vec![
        tab(&markdown, "a", "https://x/a", 1),
        tab(&markdown, "b", "https://x/b", TabGroup::NON_GROUP_ID),
    ];

    let tab_lists = grouper.collect_tabs_by_group(tabs.clone());
    assert_eq!(
        render_built_in(&tab_lists, TabExportFormat::Title, ListType::List, &markdown),
        "- G\n  - a\n- b\n"
    );

    let tab_lists = grouper.collect_tabs_by_group(tabs);
    assert_eq!(
        render_built_in(&tab_lists, TabExportFormat::Url, ListType::List, &markdown),
        "- G\n  - https://x/a\n- https://x/b\n"
    );
}

fn arbitrary_tabs() -> impl Strategy<Value = Vec<Tab>> {
    // group ids limited to a small pool so runs actually form
    proptest::collection::vec((0usize..6, prop_oneof![Just(-1i32), 1..4i32]), 0..24).prop_map(
        |pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(idx, (title_idx, group_id))| {
                    Tab::new(
                        format!("t{title_idx}"),
                        format!("https://x/{idx}"),
                        group_id,
                    )
                })
                .collect()
        },
    )
}

fn known_groups() -> Vec<TabGroup> {
    (1..4)
        .map(|id| TabGroup::new(format!("G{id}"), id, "blue".to_string()))
        .collect()
}

proptest! {
    #[test]
    fn prop_partition_preserves_tab_order(tabs in arbitrary_tabs()) {
        let grouper = TabListGrouper::new(known_groups());
        let lists = grouper.collect_tabs_by_group(tabs.clone());

        let flattened: Vec<Tab> = lists
            .into_iter()
            .flat_map(|list| list.tabs)
            .collect();
        prop_assert_eq!(flattened, tabs);
    }

    #[test]
    fn prop_lists_are_homogeneous_and_maximal(tabs in arbitrary_tabs()) {
        let grouper = TabListGrouper::new(known_groups());
        let lists = grouper.collect_tabs_by_group(tabs);

        for list in &lists {
            prop_assert!(!list.tabs.is_empty());
            for tab in &list.tabs {
                prop_assert_eq!(tab.group_id, list.group_id);
            }
        }
        // maximal runs: adjacent lists never share a group id
        for pair in lists.windows(2) {
            prop_assert_ne!(pair[0].group_id, pair[1].group_id);
        }
    }

    #[test]
    fn prop_render_input_numbering(tabs in arbitrary_tabs()) {
        let grouper = TabListGrouper::new(known_groups());
        let input = make_render_input(&grouper.collect_tabs_by_group(tabs));

        // flat numbering is 1..N regardless of grouping
        for (idx, link) in input.links.iter().enumerate() {
            prop_assert_eq!(link.number, idx + 1);
        }
        // top-level numbering advances by exactly 1 per slot, group or not,
        // and member numbering restarts at 1 inside each group
        for (idx, entry) in input.grouped.iter().enumerate() {
            prop_assert_eq!(entry.number, idx + 1);
            for (member_idx, member) in entry.links.iter().enumerate() {
                prop_assert_eq!(member.number, member_idx + 1);
            }
        }
    }
}
