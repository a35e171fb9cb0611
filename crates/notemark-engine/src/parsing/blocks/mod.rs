//! Block-level parsing: one greedy, non-backtracking pass over the lines.

mod parser;
mod types;

pub(crate) use parser::BlockParser;
pub use types::{Block, BlockKind};
