//! Task-list micro-grammar: `[x] done`, `[ ] open`, `[] open`.

use serde::{Deserialize, Serialize};

/// Parsed checkbox payload attached to a `TaskItem` block.
///
/// The content is kept as plain text and is not run through the inline
/// parser. TODO: confirm with product whether task text should support
/// emphasis like list items do; the asymmetry is inherited, not chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    pub checked: bool,
    pub content: String,
}

/// Parses a task item line.
///
/// Requires at least 4 bytes: `[`, then a state byte (space, `x`, `X`, or a
/// closing `]` for the empty-bracket abbreviation), with the matching `]`
/// immediately followed by a space or end of line. Returns `None` for
/// anything else, leaving the line to a later classification.
pub fn parse_task(line: &str) -> Option<TaskData> {
    let b = line.as_bytes();
    if b.len() < 4 || b[0] != b'[' {
        return None;
    }

    let close = match b[1] {
        b']' => 1,
        b' ' | b'x' | b'X' if b.get(2) == Some(&b']') => 2,
        _ => return None,
    };
    match b.get(close + 1) {
        Some(&b' ') | None => {}
        _ => return None,
    }

    Some(TaskData {
        checked: matches!(b[1], b'x' | b'X'),
        content: line[close + 1..].trim().to_string(),
    })
}
