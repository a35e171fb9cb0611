//! Inline span resolution for block content.
//!
//! One recursive-descent scan, left to right, precedence per scan position:
//! link/image, code span, strikethrough, `***` combined, `**` strong, `*`
//! emphasis, then a plain text run. Unmatched markers never error; they
//! degrade to literal text.

mod parser;
pub(crate) mod scan;
mod types;

pub use parser::parse_inlines;
pub use types::{Inline, InlineKind};
