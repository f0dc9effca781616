use crate::parsing::directives::ChartBlock;

use super::kinds::{AtxHeading, HeadingSig, ListItemSig, ListMarker, TableRow, ThematicBreak};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to the section it sits in. Section-dependent readings
/// (callouts, semantic topics, action-plan milestones) are left to the builder.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Line text with trailing whitespace removed.
    pub text: String,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Resolved chart directive occupying this line, if any.
    pub chart: Option<ChartBlock>,
    /// Cells if the line is a table row.
    pub table_row: Option<Vec<String>>,
    /// Marker facts if the line is a list item.
    pub list_item: Option<ListItemSig>,
    /// Level and title if the line is a `#` heading.
    pub heading: Option<HeadingSig>,
    /// Whether the line is a horizontal rule.
    pub is_rule: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct ReportLineClassifier;

impl ReportLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// `chart` is the side-table entry for this line's index; a chart line
    /// carries no other facts.
    pub fn classify(&self, line: &str, chart: Option<ChartBlock>) -> LineClass {
        let text = line.trim_end().to_string();
        let is_blank = text.trim().is_empty();

        if chart.is_some() || is_blank {
            return LineClass {
                text,
                is_blank,
                chart,
                table_row: None,
                list_item: None,
                heading: None,
                is_rule: false,
            };
        }

        LineClass {
            table_row: TableRow::cells(&text),
            list_item: ListMarker::sig(&text),
            heading: AtxHeading::sig(&text),
            is_rule: ThematicBreak::matches(&text),
            text,
            is_blank,
            chart,
        }
    }
}
