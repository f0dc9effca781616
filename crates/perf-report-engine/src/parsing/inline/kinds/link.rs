use std::sync::OnceLock;

use regex::Regex;

/// `[text](url)`.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\]]+)\]\(([^)\s]+)\)";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }
}
