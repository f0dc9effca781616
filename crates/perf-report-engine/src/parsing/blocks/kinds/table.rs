use std::sync::OnceLock;

use regex::Regex;

/// Pipe-separated table rows.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    fn separator_cell() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^[-:]+$").expect("Invalid table separator regex"))
    }

    /// Splits a row into trimmed cells, or `None` if the line is not a row.
    ///
    /// A line is a row when it has a pipe outside parentheses and is not a
    /// heading. One leading and one trailing pipe are dropped before splitting.
    pub fn cells(line: &str) -> Option<Vec<String>> {
        let t = line.trim();
        if t.starts_with('#') || !has_top_level_pipe(t) {
            return None;
        }
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        Some(split_top_level(t))
    }

    /// `| --- | :-: |` style row.
    pub fn is_separator(cells: &[String]) -> bool {
        !cells.is_empty() && cells.iter().all(|c| Self::separator_cell().is_match(c))
    }

    /// Splits buffered rows into an optional header and body rows.
    ///
    /// Row 1 is a header only when row 2 exists and is a separator; the
    /// separator itself is discarded.
    pub fn split_header(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        if rows.len() > 1 && Self::is_separator(&rows[1]) {
            let header = rows.remove(0);
            rows.remove(0);
            (Some(header), rows)
        } else {
            (None, rows)
        }
    }
}

fn has_top_level_pipe(s: &str) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            TableRow::PIPE if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

fn split_top_level(s: &str) -> Vec<String> {
    let mut cells = vec![];
    let mut current = String::new();
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if c == TableRow::PIPE && depth == 0 {
            cells.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    cells.push(current.trim().to_string());
    cells
}
