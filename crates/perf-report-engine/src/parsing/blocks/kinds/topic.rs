use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::fold::fold;

/// A paragraph opened by a bold analytic term, e.g. `**Dispersão**: ampla`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicLine {
    pub label: String,
    pub body: String,
}

pub struct SemanticTopic;

impl SemanticTopic {
    /// Folded analytic terms, matched as substrings of the bold phrase.
    pub const VOCABULARY: &'static [&'static str] = &[
        "concentracao",
        "concentration",
        "dispersao",
        "dispersion",
        "assimetria",
        "skew",
        "piso",
        "floor",
        "consistencia",
        "consistency",
        "governanca",
        "governance",
        "risco",
        "risk",
        "comparacao",
        "comparativo",
        "comparison",
        "sintese",
        "synthesis",
        "padrao",
        "padroes",
        "pattern",
        "tendencia",
        "trend",
        "amplitude",
        "media",
        "mean",
        "desvio",
        "deviation",
    ];

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^\s*\*\*([^*]+)\*\*\s*[:.\-–—]?\s*(.*)$").expect("Invalid topic regex")
        })
    }

    pub fn parse(line: &str) -> Option<TopicLine> {
        let caps = Self::regex().captures(line)?;
        let label = caps[1]
            .trim()
            .trim_end_matches([':', '.', '-', '–', '—'])
            .trim_end();
        let folded = fold(label);
        if !Self::VOCABULARY.iter().any(|term| folded.contains(term)) {
            return None;
        }
        Some(TopicLine {
            label: label.to_string(),
            body: caps[2].trim().to_string(),
        })
    }
}
