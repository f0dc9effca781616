use serde::Serialize;

/// A styled run of text inside a block.
///
/// Spans carry owned text; the compiler output outlives its input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Plain text outside any styled construct.
    Text { text: String },
    /// `**bold**`; the inner text is not re-scanned.
    Bold { text: String },
    /// `*italic*`.
    Italic { text: String },
    /// `` `code` ``.
    Code { text: String },
    /// `[text](url)`.
    Link { text: String, url: String },
}

impl InlineSpan {
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::Text { text: s.into() }
    }

    pub fn bold(s: impl Into<String>) -> Self {
        InlineSpan::Bold { text: s.into() }
    }

    pub fn italic(s: impl Into<String>) -> Self {
        InlineSpan::Italic { text: s.into() }
    }

    pub fn code(s: impl Into<String>) -> Self {
        InlineSpan::Code { text: s.into() }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        InlineSpan::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// The visible text of the span, without markup.
    pub fn as_str(&self) -> &str {
        match self {
            InlineSpan::Text { text }
            | InlineSpan::Bold { text }
            | InlineSpan::Italic { text }
            | InlineSpan::Code { text }
            | InlineSpan::Link { text, .. } => text,
        }
    }
}

/// Concatenates the visible text of `spans`.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::as_str).collect()
}
