//! Low-level scan helpers shared by the inline parser and the highlighter.
//!
//! Both passes must agree on where a construct opens and closes; keeping the
//! matching rules here is what stops the preview and the highlight overlay
//! from drifting apart.

/// Position of the next occurrence of `b` at or after `from`.
pub(crate) fn find_byte(s: &str, from: usize, b: u8) -> Option<usize> {
    s.as_bytes()[from.min(s.len())..]
        .iter()
        .position(|&c| c == b)
        .map(|p| from + p)
}

/// Position of the next occurrence of `pat` at or after `from`.
pub(crate) fn find_str(s: &str, from: usize, pat: &str) -> Option<usize> {
    s.get(from..)?.find(pat).map(|p| from + p)
}

pub(crate) fn is_sentence_punctuation(b: u8) -> bool {
    matches!(b, b'.' | b',' | b'!' | b'?' | b':' | b';')
}

/// Moves a single-marker emphasis closer left past trailing sentence
/// punctuation, never past `open + 1`. The excluded bytes are left for the
/// next scan step.
pub(crate) fn back_off_punctuation(s: &str, open: usize, mut close: usize) -> usize {
    let b = s.as_bytes();
    while close > open + 1 && is_sentence_punctuation(b[close - 1]) {
        close -= 1;
    }
    close
}

/// A matched `[text](url)` or `![alt](url)` starting at `start`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct LinkMatch<'a> {
    pub label: &'a str,
    pub url: &'a str,
    pub is_image: bool,
    /// Byte index just past the closing `)`.
    pub end: usize,
}

/// Matches a link or image at `start`.
///
/// The label ends at the first `]` after the opening bracket; the `(` must
/// follow immediately; the closing `)` is found with explicit depth counting
/// so parenthesized URLs resolve correctly. Returns `None` on any miss.
pub(crate) fn match_link(s: &str, start: usize) -> Option<LinkMatch<'_>> {
    let b = s.as_bytes();
    let is_image = b[start] == b'!';

    let label_start = if is_image {
        if b.get(start + 1) != Some(&b'[') {
            return None;
        }
        start + 2
    } else {
        start + 1
    };

    let close_bracket = find_byte(s, label_start, b']')?;
    if b.get(close_bracket + 1) != Some(&b'(') {
        return None;
    }

    let mut depth = 1u32;
    let mut close_paren = None;
    for (i, &c) in b.iter().enumerate().skip(close_bracket + 2) {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    close_paren = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }
    let close_paren = close_paren?;

    Some(LinkMatch {
        label: &s[label_start..close_bracket],
        url: &s[close_bracket + 2..close_paren],
        is_image,
        end: close_paren + 1,
    })
}
