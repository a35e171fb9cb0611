//! Table micro-grammar: row detection, cell splitting and the parsed payload.

use serde::{Deserialize, Serialize};

/// Parsed table payload attached to a `Table` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// Ordered column labels from the header row.
    pub headers: Vec<String>,
    /// Data rows. A row may carry fewer cells than there are headers;
    /// missing cells render empty.
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Authoritative column count for layout: the header width or the widest
    /// data row, whichever is larger.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .fold(self.headers.len(), usize::max)
    }
}

/// A trimmed, non-empty line that starts with `|` or contains ` | `.
pub fn is_table_row(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty() && (t.starts_with('|') || t.contains(" | "))
}

/// A table row whose every cell consists only of `-`, `:` and spaces.
pub fn is_table_separator(line: &str) -> bool {
    if !is_table_row(line) {
        return false;
    }
    let cells = split_row(line);
    !cells.is_empty()
        && cells
            .iter()
            .all(|c| c.bytes().all(|b| matches!(b, b'-' | b':' | b' ')))
}

/// Splits a table row into trimmed cells.
///
/// A boundary `|` on either end is stripped rather than producing an empty
/// cell. A `|` between toggled backticks is cell content, not a separator.
pub fn split_row(line: &str) -> Vec<String> {
    let mut t = line.trim();
    t = t.strip_prefix('|').unwrap_or(t);
    t = t.strip_suffix('|').unwrap_or(t);

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_code = false;

    for ch in t.chars() {
        match ch {
            '`' => {
                in_code = !in_code;
                current.push(ch);
            }
            '|' if !in_code => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !cells.is_empty() || !current.trim().is_empty() {
        cells.push(current.trim().to_string());
    }

    cells
}
