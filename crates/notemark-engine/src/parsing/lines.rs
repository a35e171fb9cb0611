//! Splitting an editor buffer into lines for the block pass.

/// Splits text into lines on `\n`. No trailing newline is retained, and a
/// final trailing `\n` does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            lines.push(&text[start..i]);
            start = i + 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}
