/// A horizontal rule: three or more of `-`, `_` or `*` and nothing else.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_LEN && t.chars().all(|c| matches!(c, '-' | '_' | '*'))
    }
}
