use serde::{Deserialize, Serialize};

use crate::parsing::fold::fold;

pub const DEFAULT_ACCENT: &str = "#6366f1";

const BUILTIN_ACCENTS: &[(&str, &str)] = &[
    ("excelente", "#16a34a"),
    ("excellent", "#16a34a"),
    ("acima do esperado", "#16a34a"),
    ("insuficiente", "#dc2626"),
    ("abaixo do esperado", "#dc2626"),
    ("critico", "#dc2626"),
    ("poor", "#dc2626"),
    ("regular", "#d97706"),
    ("adequado", "#d97706"),
    ("bom", "#2563eb"),
    ("good", "#2563eb"),
    ("dentro do esperado", "#2563eb"),
];

/// Maps a performance classification to the accent color forwarded with charts.
///
/// Entries are matched in order as substrings of the accent-folded, lowercased
/// classification. The first hit wins; otherwise `default` is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccentPalette {
    entries: Vec<(String, String)>,
    default: String,
}

impl Default for AccentPalette {
    fn default() -> Self {
        Self {
            entries: BUILTIN_ACCENTS
                .iter()
                .map(|(fragment, color)| (fragment.to_string(), color.to_string()))
                .collect(),
            default: DEFAULT_ACCENT.to_string(),
        }
    }
}

impl AccentPalette {
    /// Adds an entry that takes precedence over everything already present.
    #[must_use]
    pub fn with_entry(mut self, fragment: &str, color: impl Into<String>) -> Self {
        self.entries.insert(0, (fold(fragment), color.into()));
        self
    }

    #[must_use]
    pub fn with_default(mut self, color: impl Into<String>) -> Self {
        self.default = color.into();
        self
    }

    pub fn color_for(&self, classification: Option<&str>) -> &str {
        let Some(classification) = classification else {
            return &self.default;
        };
        let folded = fold(classification);
        self.entries
            .iter()
            .find(|(fragment, _)| folded.contains(fragment.as_str()))
            .map(|(_, color)| color.as_str())
            .unwrap_or(&self.default)
    }
}
