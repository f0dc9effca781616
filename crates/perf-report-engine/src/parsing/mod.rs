pub mod blocks;
pub mod directives;
pub mod fold;
pub mod inline;
pub mod sections;
pub mod snapshot;
pub mod vocabulary;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use log::debug;
use serde::Serialize;

use crate::models::ReportDocument;

use blocks::{Block, BlockBuilder, ReportLineClassifier};
use directives::Substitution;
use inline::plain_text;

/// Ordered block output of one compile pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompiledReport {
    pub blocks: Vec<Block>,
}

impl CompiledReport {
    /// `(level, text)` for every heading, in document order.
    pub fn outline(&self) -> Vec<(u8, String)> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading(h) => Some((h.level, plain_text(&h.spans))),
                _ => None,
            })
            .collect()
    }
}

/// Compiles report text into blocks.
///
/// General reports get vocabulary normalization first. Chart directives are
/// then lifted into a side table, and the remaining text is classified and
/// built line by line.
pub fn compile_report(doc: &ReportDocument) -> CompiledReport {
    let text = if doc.is_general_report {
        Cow::Owned(vocabulary::normalize(&doc.text))
    } else {
        Cow::Borrowed(doc.text.as_str())
    };

    let Substitution { text, mut charts } =
        directives::substitute(&text, doc.chart_data.as_ref(), doc.accent());
    debug!(
        "compiling {} bytes (general: {}, charts: {})",
        text.len(),
        doc.is_general_report,
        charts.len()
    );

    let classifier = ReportLineClassifier;
    let mut builder = BlockBuilder::new(doc.is_general_report);
    for (idx, line) in text.lines().enumerate() {
        let lc = classifier.classify(line, charts.remove(&idx));
        builder.push(lc);
    }

    CompiledReport {
        blocks: builder.finish(),
    }
}
