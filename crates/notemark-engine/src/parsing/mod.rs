//! Markdown parsing: raw text in, ordered block sequence out.
//!
//! The pass is synchronous and total: every invocation re-parses the whole
//! buffer and returns freshly owned blocks. Malformed markdown never errors,
//! it degrades to a more literal reading (plain text, unterminated-but-emitted
//! blocks).

pub mod blocks;
pub mod classify;
pub mod inline;
pub mod lines;
pub mod table;
pub mod task;

pub use blocks::{Block, BlockKind};
pub use inline::{Inline, InlineKind, parse_inlines};
pub use table::TableData;
pub use task::TaskData;

use blocks::BlockParser;

/// The result of one full parse of an editor buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// Parses a full document into an ordered sequence of blocks.
///
/// Blocks whose kind carries inline formatting (heading, paragraph, quote,
/// list item) come back with their inline spans already attached.
pub fn parse_document(text: &str) -> ParsedDoc {
    let lines = lines::split_lines(text);
    ParsedDoc {
        blocks: BlockParser::new(&lines).run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(parse_document("").blocks.len(), 0);
    }

    #[test]
    fn blank_lines_yield_no_blocks() {
        assert_eq!(parse_document("\n\n\n").blocks.len(), 0);
    }

    #[test]
    fn blocks_preserve_source_order() {
        let doc = parse_document("# title\n\npara\n\n- item\n\n> quote");
        let kinds: Vec<_> = doc.blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::ListItem,
                BlockKind::Quote,
            ]
        );
    }
}
