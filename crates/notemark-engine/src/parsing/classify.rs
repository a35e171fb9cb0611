//! Line classification shared by the block parser and the highlighter.
//!
//! These are pure predicates over a single line. Keeping them in one module
//! means the preview pass and the highlight pass cannot drift apart on what
//! counts as a heading, fence, list item, quote or rule.

/// Signature of a fence delimiter line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenceSig {
    /// Opening fence carrying a language tag (```` ```rust ````).
    Open { lang: String },
    /// Bare fence with no tag. Opens an untagged code block, or closes an
    /// open one.
    Bare,
}

const FENCE_BACKTICKS: &str = "```";
const FENCE_TILDES: &str = "~~~";

/// Classifies a line as a fence delimiter.
///
/// The line is trimmed, then must start with three backticks or tildes. An
/// empty remainder is a bare fence; a remainder of ASCII alphanumerics plus
/// `+`/`#` is an opening fence with that language tag. Any other trailing
/// content disqualifies the line (it stays ordinary text).
pub fn fence_sig(line: &str) -> Option<FenceSig> {
    let trimmed = line.trim();
    if !trimmed.starts_with(FENCE_BACKTICKS) && !trimmed.starts_with(FENCE_TILDES) {
        return None;
    }
    let rest = trimmed[3..].trim();
    if rest.is_empty() {
        return Some(FenceSig::Bare);
    }
    if rest
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'#')
    {
        return Some(FenceSig::Open {
            lang: rest.to_string(),
        });
    }
    None
}

/// Whether a line closes an open fence. Only a bare fence closes; the marker
/// style does not have to match the opener.
pub fn closes_fence(line: &str) -> bool {
    matches!(fence_sig(line), Some(FenceSig::Bare))
}

pub fn is_heading(line: &str) -> bool {
    line.as_bytes().first() == Some(&b'#')
}

/// Splits a heading line into (level, content).
///
/// The level is the count of leading `#` capped at 6; a 7th-plus `#` folds
/// into the content. Exactly one separator space after the marker run is
/// consumed when present.
pub fn parse_heading(line: &str) -> (u8, &str) {
    let bytes = line.as_bytes();
    let mut level = 0;
    while level < 6 && bytes.get(level) == Some(&b'#') {
        level += 1;
    }
    let content = match bytes.get(level) {
        Some(b' ') => &line[level + 1..],
        _ => &line[level..],
    };
    (level as u8, content)
}

/// `- `/`* ` bullets, or a single ASCII digit followed by `. `.
pub fn is_list_item(line: &str) -> bool {
    let b = line.as_bytes();
    let Some(&first) = b.first() else {
        return false;
    };
    if (first == b'-' || first == b'*') && b.get(1) == Some(&b' ') {
        return true;
    }
    first.is_ascii_digit() && b.get(1) == Some(&b'.') && b.get(2) == Some(&b' ')
}

/// Content of a list item line, after the bullet or `N.` marker.
pub fn list_item_text(line: &str) -> &str {
    let b = line.as_bytes();
    match b.first() {
        Some(b'-' | b'*') => &line[2..],
        _ => &line[3..],
    }
}

pub fn is_quote(line: &str) -> bool {
    line.as_bytes().first() == Some(&b'>')
}

/// Content of a quote line: the leading `>` and at most one following space
/// are stripped.
pub fn quote_text(line: &str) -> &str {
    let b = line.as_bytes();
    if b.len() > 1 && b[1] == b' ' {
        &line[2..]
    } else if b.len() > 1 {
        &line[1..]
    } else {
        ""
    }
}

/// At least 3 bytes of one repeated symbol from `-`/`*`/`_`, interspersed
/// only with spaces.
pub fn is_horizontal_rule(line: &str) -> bool {
    let b = line.as_bytes();
    if b.len() < 3 {
        return false;
    }
    let sym = b[0];
    if sym != b'-' && sym != b'*' && sym != b'_' {
        return false;
    }
    b.iter().all(|&c| c == sym || c == b' ')
}
