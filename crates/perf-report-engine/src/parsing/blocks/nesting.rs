use super::types::ListNode;

/// A list item as collected line by line, before nesting is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatItem {
    pub text: String,
    pub level: usize,
}

impl FlatItem {
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Rebuilds the list forest implied by the items' indentation levels.
///
/// Every input item appears exactly once in the output.
pub fn build_tree(items: &[FlatItem]) -> Vec<ListNode> {
    let base = items.iter().map(|i| i.level).min().unwrap_or(0);
    let mut pos = 0;
    build_level(items, &mut pos, base)
}

/// Consumes siblings at `base` depth or deeper, attaching each run of deeper
/// items as children, and stops at the first item shallower than `base`.
fn build_level(items: &[FlatItem], pos: &mut usize, base: usize) -> Vec<ListNode> {
    let mut nodes = vec![];
    while let Some(item) = items.get(*pos) {
        if item.level < base {
            break;
        }
        *pos += 1;

        let mut node = ListNode::leaf(&item.text, item.level);
        if let Some(next) = items.get(*pos)
            && next.level > item.level
        {
            node.children = build_level(items, pos, item.level + 1);
        }
        nodes.push(node);
    }
    nodes
}
