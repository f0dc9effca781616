use std::sync::OnceLock;

use regex::Regex;

/// `**strong**` text.
pub struct Bold;

impl Bold {
    pub const PATTERN: &'static str = r"\*\*(.+?)\*\*";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid bold regex"))
    }
}

/// `*emphasis*` text. The inner class excludes `*`, so `**` never opens it.
pub struct Italic;

impl Italic {
    pub const PATTERN: &'static str = r"\*([^*]+)\*";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid italic regex"))
    }
}
