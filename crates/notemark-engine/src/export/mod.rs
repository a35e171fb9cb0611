//! HTML export.
//!
//! Export goes through `pulldown-cmark` rather than the block parser: the
//! editor's parse is deliberately line-oriented and lossy, while export wants
//! faithful CommonMark + GFM output of the raw buffer.

use pulldown_cmark::{Options, Parser, html};

/// Renders the raw note text to an HTML fragment.
///
/// Strikethrough, tables and task lists are enabled to match what the
/// editor's own parser recognizes.
pub fn to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
