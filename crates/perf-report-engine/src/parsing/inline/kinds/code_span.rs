use std::sync::OnceLock;

use regex::Regex;

/// Backtick-delimited code. The content is taken verbatim.
pub struct CodeSpan;

impl CodeSpan {
    pub const PATTERN: &'static str = r"`([^`]+)`";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid code span regex"))
    }
}
