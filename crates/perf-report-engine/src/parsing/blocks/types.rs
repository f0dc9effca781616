use serde::Serialize;

use crate::parsing::{
    directives::ChartBlock,
    inline::{InlineSpan, plain_text, render_inline},
};

/// Visual flavor of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    Highlight,
    Risk,
}

/// How a heading should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingStyle {
    Standard,
    /// Band subsection inside an "analysis by band" section; heading only.
    CompactCard,
    /// "30 dias:" step inside an action plan.
    Milestone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub spans: Vec<InlineSpan>,
    pub style: HeadingStyle,
}

impl Heading {
    pub fn new(level: u8, text: &str, style: HeadingStyle) -> Self {
        Self {
            level,
            text: text.to_string(),
            spans: render_inline(text),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub spans: Vec<InlineSpan>,
    /// Semantic topic for paragraphs opened by a bold analytic term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Paragraph {
    pub fn new(text: &str) -> Self {
        Self {
            spans: render_inline(text),
            label: None,
        }
    }

    pub fn labelled(label: impl Into<String>, body: &str) -> Self {
        Self {
            spans: render_inline(body),
            label: Some(label.into()),
        }
    }

    pub fn plain_text(&self) -> String {
        plain_text(&self.spans)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// Render mode chosen for a list, so the presentation layer need not
/// re-derive section policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMode {
    /// Indented bullet tree.
    Nested,
    /// One card per top-level node.
    Grid,
    /// Every item an independent paragraph.
    FlowText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListNode {
    pub spans: Vec<InlineSpan>,
    pub level: usize,
    pub children: Vec<ListNode>,
}

impl ListNode {
    pub fn leaf(text: &str, level: usize) -> Self {
        Self {
            spans: render_inline(text),
            level,
            children: vec![],
        }
    }

    pub fn plain_text(&self) -> String {
        plain_text(&self.spans)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub kind: ListKind,
    pub mode: ListMode,
    pub items: Vec<ListNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    pub spans: Vec<InlineSpan>,
}

impl Cell {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            spans: render_inline(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Vec<Cell>>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    pub kind: CalloutKind,
    pub children: Vec<Paragraph>,
}

/// A finished unit of compiled output, emitted in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    List(List),
    Table(Table),
    Callout(Callout),
    Chart(ChartBlock),
    Rule,
    Spacer,
}
