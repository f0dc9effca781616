use crate::parsing::{
    blocks::{Block, ListMode, ListNode},
    directives::ChartPayload,
};

/// Validates compiler output invariants.
///
/// Asserts that:
/// - Callouts and lists are never empty
/// - Flow-text list items are flat, top-level leaves
/// - Every list child sits deeper than its parent
/// - Tables carry a header or at least one row
/// - Charts carry an accent and gauge percentages stay within 0-100
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[Block]) {
    for (i, b) in blocks.iter().enumerate() {
        match b {
            Block::Callout(c) => {
                assert!(!c.children.is_empty(), "empty callout at block {i}");
            }
            Block::List(list) => {
                assert!(!list.items.is_empty(), "empty list at block {i}");
                if list.mode == ListMode::FlowText {
                    assert!(
                        list.items
                            .iter()
                            .all(|n| n.level == 0 && n.children.is_empty()),
                        "flow-text list at block {i} has nested items"
                    );
                }
                if list.mode == ListMode::Grid {
                    assert!(
                        list.items.iter().all(|n| n.children.is_empty()),
                        "grid list at block {i} has nested items"
                    );
                }
                for node in &list.items {
                    check_levels(node, i);
                }
            }
            Block::Table(t) => {
                assert!(
                    t.header.is_some() || !t.rows.is_empty(),
                    "table at block {i} has neither header nor rows"
                );
            }
            Block::Chart(chart) => {
                assert!(!chart.accent.is_empty(), "chart at block {i} has no accent");
                if let ChartPayload::Gauge { percent, .. } = chart.payload {
                    assert!(
                        (0.0..=100.0).contains(&percent),
                        "gauge percent {percent} out of range at block {i}"
                    );
                }
            }
            Block::Heading(_) | Block::Paragraph(_) | Block::Rule | Block::Spacer => {}
        }
    }
}

fn check_levels(node: &ListNode, block: usize) {
    for child in &node.children {
        assert!(
            child.level > node.level,
            "list child level {} not deeper than parent {} at block {block}",
            child.level,
            node.level
        );
        check_levels(child, block);
    }
}
