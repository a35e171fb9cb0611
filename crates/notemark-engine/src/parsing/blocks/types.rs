use serde::{Deserialize, Serialize};

use crate::parsing::inline::Inline;
use crate::parsing::table::TableData;
use crate::parsing::task::TaskData;

/// The kind of a block-level element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Heading,
    Paragraph,
    CodeFence,
    ListItem,
    TaskItem,
    Quote,
    HorizontalRule,
    Table,
}

/// One unit of document structure.
///
/// Created fresh on every parse and never mutated afterwards. `table` is
/// populated only for `Table` blocks and `task` only for `TaskItem` blocks;
/// `inlines` stays empty for `CodeFence`, `HorizontalRule` and `Table`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Raw text payload; semantics depend on `kind`. A code fence carries
    /// its language tag, a newline, then the verbatim body. A list item
    /// keeps its marker bytes.
    pub content: String,
    /// Heading depth 1-6; zero for every other kind.
    pub level: u8,
    pub inlines: Vec<Inline>,
    pub table: Option<TableData>,
    pub task: Option<TaskData>,
}

impl Block {
    pub(crate) fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            level: 0,
            inlines: Vec::new(),
            table: None,
            task: None,
        }
    }
}
