//! Live-highlight tokenizer.
//!
//! A flat, offset-oriented pass over the whole buffer for the editor's
//! highlight overlay. It reuses the block pass's line classifier and the
//! inline parser's scan helpers, so what highlights as emphasis while typing
//! is what renders as emphasis in preview. The token vocabulary is reduced
//! on purpose: no tables, task lists, strikethrough or combined emphasis.
//!
//! The pass is stateless across lines: fence delimiter lines highlight as
//! code markers, but fence interiors are scanned like any other line.

use serde::{Deserialize, Serialize};

use crate::parsing::classify;
use crate::parsing::inline::scan;

/// Highlight classification of a byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Text,
    Heading,
    Bold,
    Italic,
    CodeInline,
    CodeBlock,
    List,
    Link,
    Quote,
}

/// An offset-tagged token for the highlight overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset into the original buffer, inclusive.
    pub start: usize,
    /// Byte offset into the original buffer, exclusive.
    pub end: usize,
    /// Resolved payload: marker prefixes and delimiters stripped.
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            end,
            text: text.into(),
        }
    }
}

/// Tokenizes the whole buffer for highlighting.
///
/// Tokens carry absolute byte offsets and come back in document order.
pub fn highlight(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    for line in text.split('\n') {
        highlight_line(line, pos, &mut tokens);
        pos += line.len() + 1;
    }

    tokens
}

fn highlight_line(line: &str, base: usize, out: &mut Vec<Token>) {
    if classify::is_heading(line) {
        let content = line.trim_start_matches(['#', ' ']);
        out.push(Token::new(
            TokenKind::Heading,
            base,
            base + line.len(),
            content,
        ));
        return;
    }
    if classify::fence_sig(line).is_some() {
        out.push(Token::new(
            TokenKind::CodeBlock,
            base,
            base + line.len(),
            line,
        ));
        return;
    }
    if classify::is_list_item(line) {
        out.push(Token::new(TokenKind::List, base, base + line.len(), line));
        return;
    }
    if classify::is_quote(line) {
        let content = line.trim_start_matches(['>', ' ']);
        out.push(Token::new(
            TokenKind::Quote,
            base,
            base + line.len(),
            content,
        ));
        return;
    }

    highlight_inline(line, base, out);
}

/// Reduced inline scan: bold, italic, code span and link, with plain text
/// filling the gaps. Matching rules come from the shared scan helpers.
fn highlight_inline(line: &str, base: usize, out: &mut Vec<Token>) {
    let b = line.as_bytes();
    let mut i = 0;
    let mut text_start = 0;

    while i < b.len() {
        match b[i] {
            m @ (b'*' | b'_') if b.get(i + 1) == Some(&m) => {
                let marker = &line[i..i + 2];
                if let Some(close) = scan::find_str(line, i + 2, marker) {
                    flush_gap(line, base, text_start, i, out);
                    out.push(Token::new(
                        TokenKind::Bold,
                        base + i,
                        base + close + 2,
                        &line[i + 2..close],
                    ));
                    i = close + 2;
                    text_start = i;
                } else {
                    i += 2;
                }
            }
            m @ (b'*' | b'_') => {
                if let Some(close) = scan::find_byte(line, i + 1, m) {
                    let backed = scan::back_off_punctuation(line, i, close);
                    flush_gap(line, base, text_start, i, out);
                    out.push(Token::new(
                        TokenKind::Italic,
                        base + i,
                        base + close + 1,
                        &line[i + 1..backed],
                    ));
                    i = close + 1;
                    text_start = i;
                } else {
                    i += 1;
                }
            }
            b'`' => {
                if let Some(close) = scan::find_byte(line, i + 1, b'`') {
                    flush_gap(line, base, text_start, i, out);
                    out.push(Token::new(
                        TokenKind::CodeInline,
                        base + i,
                        base + close + 1,
                        &line[i + 1..close],
                    ));
                    i = close + 1;
                    text_start = i;
                } else {
                    i += 1;
                }
            }
            b'[' => {
                if let Some(link) = scan::match_link(line, i) {
                    flush_gap(line, base, text_start, i, out);
                    out.push(Token::new(
                        TokenKind::Link,
                        base + i,
                        base + link.end,
                        link.label,
                    ));
                    i = link.end;
                    text_start = i;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    flush_gap(line, base, text_start, b.len(), out);
}

fn flush_gap(line: &str, base: usize, start: usize, end: usize, out: &mut Vec<Token>) {
    if end > start {
        out.push(Token::new(
            TokenKind::Text,
            base + start,
            base + end,
            &line[start..end],
        ));
    }
}
