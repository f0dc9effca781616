use std::sync::OnceLock;

use regex::Regex;

/// A time-boxed step of an action plan, e.g. `- **30 dias:** mapear gaps`.
pub struct Milestone;

impl Milestone {
    fn leading_marker() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^\s*(?:[-*]|\d+\.)\s+").expect("Invalid milestone marker regex")
        })
    }

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"(?i)^(\d+(?:\s*(?:-|–|a|to)\s*\d+)?\s*(?:dias?|days?))\s*:\s*(.*)$")
                .expect("Invalid milestone regex")
        })
    }

    /// Returns the heading text when `line` is an "N dias:" step.
    ///
    /// Bullet markers and bold markers are stripped before matching.
    pub fn parse(line: &str) -> Option<String> {
        let unbulleted = Self::leading_marker().replace(line, "");
        let cleaned = unbulleted.replace("**", "");
        let caps = Self::regex().captures(cleaned.trim())?;
        let period = caps[1].trim();
        let rest = caps[2].trim();
        if rest.is_empty() {
            Some(period.to_string())
        } else {
            Some(format!("{period}: {rest}"))
        }
    }
}
