use std::fmt;

use crate::parsing::{
    CompiledReport,
    blocks::{Block, Cell, ListNode, Paragraph},
    directives::{ChartBlock, ChartPayload},
    inline::InlineSpan,
};

/// Line-oriented dump of a compiled report for testing with `insta`.
///
/// One line per block, with callout paragraphs, list nodes and table rows
/// indented beneath their block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snap {
    pub lines: Vec<String>,
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Converts compiled blocks into a [`Snap`].
pub fn normalize(report: &CompiledReport) -> Snap {
    let mut lines = vec![];
    for block in &report.blocks {
        push_block(&mut lines, block);
    }
    Snap { lines }
}

fn push_block(lines: &mut Vec<String>, block: &Block) {
    match block {
        Block::Heading(h) => lines.push(format!(
            "heading h{} {:?}: {}",
            h.level,
            h.style,
            spans(&h.spans)
        )),
        Block::Paragraph(p) => lines.push(paragraph(p)),
        Block::List(list) => {
            lines.push(format!("list {:?} {:?}", list.kind, list.mode));
            for node in &list.items {
                push_node(lines, node, 1);
            }
        }
        Block::Table(t) => {
            lines.push("table".to_string());
            if let Some(header) = &t.header {
                lines.push(format!("  header {}", row(header)));
            }
            for r in &t.rows {
                lines.push(format!("  row {}", row(r)));
            }
        }
        Block::Callout(c) => {
            lines.push(format!("callout {:?}", c.kind));
            for p in &c.children {
                lines.push(format!("  {}", paragraph(p)));
            }
        }
        Block::Chart(chart) => lines.push(chart_line(chart)),
        Block::Rule => lines.push("rule".to_string()),
        Block::Spacer => lines.push("spacer".to_string()),
    }
}

fn push_node(lines: &mut Vec<String>, node: &ListNode, depth: usize) {
    lines.push(format!("{}- {}", "  ".repeat(depth), spans(&node.spans)));
    for child in &node.children {
        push_node(lines, child, depth + 1);
    }
}

fn paragraph(p: &Paragraph) -> String {
    match &p.label {
        Some(label) => format!("paragraph [{label}]: {}", spans(&p.spans)),
        None => format!("paragraph: {}", spans(&p.spans)),
    }
}

fn row(cells: &[Cell]) -> String {
    let cells: Vec<&str> = cells.iter().map(|c| c.text.as_str()).collect();
    format!("[{}]", cells.join(" | "))
}

fn chart_line(chart: &ChartBlock) -> String {
    let data = match &chart.payload {
        ChartPayload::Series { series } => series
            .iter()
            .map(|p| format!("{}={}", p.name, p.value))
            .collect::<Vec<_>>()
            .join(" "),
        ChartPayload::Hist { bins } => bins
            .iter()
            .map(|b| format!("{}:{}", b.range, b.count))
            .collect::<Vec<_>>()
            .join(" "),
        ChartPayload::Gauge { percent, value, .. } => format!("{percent}% of {value}"),
    };
    format!(
        "chart {} {:?} {}: {}",
        chart.kind.tag(),
        chart.source,
        chart.accent,
        data
    )
}

/// Renders spans with their style made explicit, e.g. `<b>x</b>`.
fn spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|s| match s {
            InlineSpan::Text { text } => text.clone(),
            InlineSpan::Bold { text } => format!("<b>{text}</b>"),
            InlineSpan::Italic { text } => format!("<i>{text}</i>"),
            InlineSpan::Code { text } => format!("<code>{text}</code>"),
            InlineSpan::Link { text, url } => format!("<a {url}>{text}</a>"),
        })
        .collect()
}
