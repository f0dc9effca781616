use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{blocks::CalloutKind, fold::fold};

/// A single line that is a callout on its own, such as
/// `**Riscos**: rotatividade alta` or `ATENÇÃO: prazo curto`.
pub struct InlineCallout;

impl InlineCallout {
    pub const LABELS: &'static [&'static str] = &["destaques", "riscos", "top", "bottom"];
    pub const HIGHLIGHT_LABELS: &'static [&'static str] = &["destaques", "top"];

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(
                r"^\s*(?:\*\*([^*]+?)\*\*\s*:|\*\*([^*]+?):\*\*|(\p{Lu}{2,}):)\s*(.*)$",
            )
            .expect("Invalid inline callout regex")
        })
    }

    /// Returns the callout kind and the text after the label.
    ///
    /// Bold labels must be one of [`Self::LABELS`]; any all-caps word
    /// followed by a colon qualifies. Lines without body text are not callouts.
    pub fn parse(line: &str) -> Option<(CalloutKind, String)> {
        let caps = Self::regex().captures(line)?;
        let body = caps[4].trim();
        if body.is_empty() {
            return None;
        }

        let label = match (caps.get(1).or(caps.get(2)), caps.get(3)) {
            (Some(bold), _) => {
                let label = fold(bold.as_str().trim());
                if !Self::LABELS.contains(&label.as_str()) {
                    return None;
                }
                label
            }
            (None, Some(caps_word)) => fold(caps_word.as_str()),
            (None, None) => return None,
        };

        let kind = if Self::HIGHLIGHT_LABELS.contains(&label.as_str()) {
            CalloutKind::Highlight
        } else {
            CalloutKind::Risk
        };
        Some((kind, body.to_string()))
    }
}
