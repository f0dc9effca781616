use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::ListKind;

/// A list line: its kind, nesting level and item text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemSig {
    pub kind: ListKind,
    pub level: usize,
    pub text: String,
}

/// Bullet (`-`, `*`) and ordered (`1.`) list markers.
pub struct ListMarker;

impl ListMarker {
    /// Leading spaces per nesting level. A tab counts as one full level.
    pub const INDENT_WIDTH: usize = 2;

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^([ \t]*)([-*]|\d+\.)\s+(.*)$").expect("Invalid list item regex")
        })
    }

    pub fn sig(line: &str) -> Option<ListItemSig> {
        let caps = Self::regex().captures(line)?;
        let indent: usize = caps[1]
            .chars()
            .map(|c| if c == '\t' { Self::INDENT_WIDTH } else { 1 })
            .sum();
        let kind = if caps[2].ends_with('.') {
            ListKind::Ordered
        } else {
            ListKind::Unordered
        };
        Some(ListItemSig {
            kind,
            level: indent / Self::INDENT_WIDTH,
            text: caps[3].trim_end().to_string(),
        })
    }
}
