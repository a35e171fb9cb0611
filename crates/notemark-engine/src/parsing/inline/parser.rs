use super::scan;
use super::types::{Inline, InlineKind};

/// Bytes that end a plain text run; each has its own scan branch.
fn is_special(b: u8) -> bool {
    matches!(b, b'*' | b'_' | b'`' | b'~' | b'[' | b'!')
}

/// Parses one block's content into an ordered, non-overlapping sequence of
/// inline spans, with plain-text runs filled in between.
///
/// Total over arbitrary input: a marker with no matching closer is emitted
/// as literal text and the scan advances by the marker's width, so the pass
/// always terminates and never errors.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut pending = String::new();
    let b = text.as_bytes();
    let mut i = 0;

    while i < b.len() {
        match b[i] {
            b'[' | b'!' => match scan::match_link(text, i) {
                Some(link) => {
                    flush_text(&mut out, &mut pending);
                    out.push(Inline::link(link.label, link.url));
                    i = link.end;
                }
                None => {
                    pending.push(b[i] as char);
                    i += 1;
                }
            },
            b'`' => match scan::find_byte(text, i + 1, b'`') {
                Some(close) => {
                    flush_text(&mut out, &mut pending);
                    out.push(Inline::new(InlineKind::Code, &text[i + 1..close]));
                    i = close + 1;
                }
                None => {
                    pending.push('`');
                    i += 1;
                }
            },
            b'~' if b.get(i + 1) == Some(&b'~') => match scan::find_str(text, i + 2, "~~") {
                Some(close) => {
                    flush_text(&mut out, &mut pending);
                    out.push(Inline::new(InlineKind::Strike, &text[i + 2..close]));
                    i = close + 2;
                }
                None => {
                    pending.push_str("~~");
                    i += 2;
                }
            },
            b'~' => {
                pending.push('~');
                i += 1;
            }
            m @ (b'*' | b'_') => {
                if b.get(i + 1) == Some(&m) && b.get(i + 2) == Some(&m) {
                    // Combined strong + emphasis, 3-byte marker
                    let marker = &text[i..i + 3];
                    match scan::find_str(text, i + 3, marker) {
                        Some(close) => {
                            flush_text(&mut out, &mut pending);
                            out.extend(emphasis_group(
                                &text[i + 3..close],
                                InlineKind::BoldItalic,
                            ));
                            i = close + 3;
                        }
                        None => {
                            pending.push_str(marker);
                            i += 3;
                        }
                    }
                } else if b.get(i + 1) == Some(&m) {
                    // Strong, 2-byte marker
                    let marker = &text[i..i + 2];
                    match scan::find_str(text, i + 2, marker) {
                        Some(close) => {
                            flush_text(&mut out, &mut pending);
                            out.extend(emphasis_group(&text[i + 2..close], InlineKind::Bold));
                            i = close + 2;
                        }
                        None => {
                            pending.push_str(marker);
                            i += 2;
                        }
                    }
                } else {
                    // Emphasis, 1-byte marker
                    match scan::find_byte(text, i + 1, m) {
                        Some(close) => {
                            let backed = scan::back_off_punctuation(text, i, close);
                            flush_text(&mut out, &mut pending);
                            out.push(Inline::new(InlineKind::Italic, &text[i + 1..backed]));
                            // Excluded punctuation is rescanned; otherwise the
                            // closer is consumed with the span.
                            i = if backed < close { backed } else { close + 1 };
                        }
                        None => {
                            pending.push(m as char);
                            i += 1;
                        }
                    }
                }
            }
            _ => {
                let start = i;
                while i < b.len() && !is_special(b[i]) {
                    i += 1;
                }
                pending.push_str(&text[start..i]);
            }
        }
    }

    flush_text(&mut out, &mut pending);
    out
}

fn flush_text(out: &mut Vec<Inline>, pending: &mut String) {
    if !pending.is_empty() {
        out.push(Inline::new(InlineKind::Text, std::mem::take(pending)));
    }
}

/// Resolves the interior of a strong or combined span.
///
/// The inner text is inline-parsed recursively and the first resulting
/// element is retagged as the span's kind; an emphasis element first inside
/// a strong span upgrades to the combined kind. This keeps nesting flat
/// rather than building a tree.
fn emphasis_group(inner: &str, kind: InlineKind) -> Vec<Inline> {
    let mut items = parse_inlines(inner);
    if let Some(first) = items.first_mut() {
        first.kind = match (kind, first.kind) {
            (InlineKind::Bold, InlineKind::Italic) => InlineKind::BoldItalic,
            _ => kind,
        };
    }
    items
}
