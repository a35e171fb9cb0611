pub mod export;
pub mod highlight;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use highlight::{Token, TokenKind, highlight};
pub use parsing::{
    Block, BlockKind, Inline, InlineKind, ParsedDoc, TableData, TaskData, parse_document,
};
