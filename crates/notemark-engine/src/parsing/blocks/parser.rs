use super::types::{Block, BlockKind};
use crate::parsing::classify::{self, FenceSig};
use crate::parsing::inline::parse_inlines;
use crate::parsing::table::{self, TableData};
use crate::parsing::task;

/// Single forward pass over the line sequence.
///
/// Multi-line constructs (fence, quote, table) own every line they consume
/// until their own terminator or end of input; there is no backtracking and
/// no nesting. Everything else is classified line by line.
pub(crate) struct BlockParser<'a> {
    lines: &'a [&'a str],
    i: usize,
    out: Vec<Block>,
}

impl<'a> BlockParser<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            i: 0,
            out: Vec::new(),
        }
    }

    pub fn run(mut self) -> Vec<Block> {
        while self.i < self.lines.len() {
            let line = self.lines[self.i];

            if let Some(sig) = classify::fence_sig(line) {
                self.consume_fence(sig);
                continue;
            }
            if classify::is_quote(line) {
                self.consume_quote();
                continue;
            }
            if table::is_table_row(line) {
                self.consume_table();
                continue;
            }

            self.push_single(line);
            self.i += 1;
        }
        self.out
    }

    /// Buffers every line verbatim until a bare fence line or end of input.
    /// An unterminated fence still emits a block with whatever was buffered.
    fn consume_fence(&mut self, sig: FenceSig) {
        let lang = match sig {
            FenceSig::Open { lang } => lang,
            FenceSig::Bare => String::new(),
        };
        self.i += 1;

        let mut body: Vec<&str> = Vec::new();
        while self.i < self.lines.len() && !classify::closes_fence(self.lines[self.i]) {
            body.push(self.lines[self.i]);
            self.i += 1;
        }
        if self.i < self.lines.len() {
            self.i += 1; // closing fence
        }

        let content = if body.is_empty() {
            String::new()
        } else if lang.is_empty() {
            body.join("\n")
        } else {
            format!("{lang}\n{}", body.join("\n"))
        };
        self.out.push(Block::new(BlockKind::CodeFence, content));
    }

    /// Consumes consecutive quote lines into one block, markers stripped.
    fn consume_quote(&mut self) {
        let mut stripped: Vec<&str> = Vec::new();
        while self.i < self.lines.len() && classify::is_quote(self.lines[self.i]) {
            stripped.push(classify::quote_text(self.lines[self.i]));
            self.i += 1;
        }

        let content = stripped.join("\n");
        let mut block = Block::new(BlockKind::Quote, content);
        block.inlines = parse_inlines(&block.content);
        self.out.push(block);
    }

    /// Consumes a header row, an optional separator, then the contiguous run
    /// of table rows. Separator-shaped rows inside the run are discarded
    /// rather than ending the table. A table with no headers is dropped.
    fn consume_table(&mut self) {
        let headers = table::split_row(self.lines[self.i]);
        self.i += 1;

        if self.i < self.lines.len() && table::is_table_separator(self.lines[self.i]) {
            self.i += 1;
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        while self.i < self.lines.len() && table::is_table_row(self.lines[self.i]) {
            if !table::is_table_separator(self.lines[self.i]) {
                rows.push(table::split_row(self.lines[self.i]));
            }
            self.i += 1;
        }

        if headers.is_empty() {
            return;
        }
        let mut block = Block::new(BlockKind::Table, "");
        block.table = Some(TableData { headers, rows });
        self.out.push(block);
    }

    /// Classifies a single line in priority order; empty lines produce no
    /// block.
    fn push_single(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        if classify::is_heading(line) {
            let (level, content) = classify::parse_heading(line);
            let mut block = Block::new(BlockKind::Heading, content);
            block.level = level;
            block.inlines = parse_inlines(content);
            self.out.push(block);
            return;
        }

        // Unreachable from run(), which owns fences; kept so single-line
        // classification stays total.
        if classify::fence_sig(line).is_some() {
            self.out.push(Block::new(BlockKind::CodeFence, line));
            return;
        }

        if classify::is_list_item(line) {
            let mut block = Block::new(BlockKind::ListItem, line);
            block.inlines = parse_inlines(classify::list_item_text(line));
            self.out.push(block);
            return;
        }

        if let Some(task) = task::parse_task(line) {
            let mut block = Block::new(BlockKind::TaskItem, "");
            block.task = Some(task);
            self.out.push(block);
            return;
        }

        if classify::is_horizontal_rule(line) {
            self.out.push(Block::new(BlockKind::HorizontalRule, ""));
            return;
        }

        let mut block = Block::new(BlockKind::Paragraph, line);
        block.inlines = parse_inlines(line);
        self.out.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn blocks(text: &str) -> Vec<Block> {
        parse_document(text).blocks
    }

    #[test]
    fn fence_round_trip() {
        let parsed = blocks("```go\nfoo\nbar\n```");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].kind, BlockKind::CodeFence);
        assert_eq!(parsed[0].content, "go\nfoo\nbar");
        assert!(parsed[0].inlines.is_empty());
    }

    #[test]
    fn untagged_fence_has_no_lang_prefix() {
        let parsed = blocks("```\nfoo\n```");
        assert_eq!(parsed[0].content, "foo");
    }

    #[test]
    fn unterminated_fence_still_emits() {
        let parsed = blocks("```\nfoo");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].kind, BlockKind::CodeFence);
        assert_eq!(parsed[0].content, "foo");
    }

    #[test]
    fn empty_fence_has_empty_content() {
        let parsed = blocks("```rust\n```");
        assert_eq!(parsed[0].content, "");
    }

    #[test]
    fn tilde_fence_closes_backtick_fence() {
        let parsed = blocks("```\ncode\n~~~\nafter");
        assert_eq!(parsed[0].kind, BlockKind::CodeFence);
        assert_eq!(parsed[0].content, "code");
        assert_eq!(parsed[1].kind, BlockKind::Paragraph);
    }

    #[test]
    fn fence_owns_lines_that_look_like_headings() {
        let parsed = blocks("```\n# not a heading\n- not a list\n```");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].content, "# not a heading\n- not a list");
    }

    #[test]
    fn quote_run_joins_stripped_lines() {
        let parsed = blocks("> one\n> two\n>three");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].kind, BlockKind::Quote);
        assert_eq!(parsed[0].content, "one\ntwo\nthree");
    }

    #[test]
    fn quote_content_is_inline_parsed() {
        let parsed = blocks("> has **bold** inside");
        assert_eq!(parsed[0].inlines.len(), 3);
    }

    #[test]
    fn table_with_separator_and_rows() {
        let parsed = blocks("| a | b |\n|---|---|\n| 1 | 2 |");
        assert_eq!(parsed.len(), 1);
        let table = parsed[0].table.as_ref().unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
        assert!(parsed[0].inlines.is_empty());
    }

    #[test]
    fn table_without_separator_keeps_all_rows() {
        let parsed = blocks("| a | b |\n| 1 | 2 |\n| 3 | 4 |");
        let table = parsed[0].table.as_ref().unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn headerless_table_is_discarded() {
        let parsed = blocks("|\nafter");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].kind, BlockKind::Paragraph);
        assert_eq!(parsed[0].content, "after");
    }

    #[test]
    fn ragged_rows_are_kept_short() {
        let parsed = blocks("| a | b | c |\n|---|---|---|\n| 1 |");
        let table = parsed[0].table.as_ref().unwrap();
        assert_eq!(table.rows, vec![vec!["1"]]);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn heading_block_has_level_and_inlines() {
        let parsed = blocks("## with *em*");
        assert_eq!(parsed[0].kind, BlockKind::Heading);
        assert_eq!(parsed[0].level, 2);
        assert_eq!(parsed[0].content, "with *em*");
        assert_eq!(parsed[0].inlines.len(), 2);
    }

    #[test]
    fn heading_level_caps_at_six() {
        let parsed = blocks("####### a");
        assert_eq!(parsed[0].level, 6);
        assert_eq!(parsed[0].content, "# a");
    }

    #[test]
    fn list_item_keeps_marker_in_content() {
        let parsed = blocks("- item with **bold**");
        assert_eq!(parsed[0].kind, BlockKind::ListItem);
        assert_eq!(parsed[0].content, "- item with **bold**");
        // Inlines are parsed on the text after the marker
        assert_eq!(parsed[0].inlines[0].text, "item with ");
    }

    #[test]
    fn task_item_carries_task_payload() {
        let parsed = blocks("[x] done\n[] todo");
        assert_eq!(parsed[0].kind, BlockKind::TaskItem);
        let done = parsed[0].task.as_ref().unwrap();
        assert!(done.checked);
        assert_eq!(done.content, "done");
        let todo = parsed[1].task.as_ref().unwrap();
        assert!(!todo.checked);
        assert_eq!(todo.content, "todo");
    }

    #[test]
    fn task_content_is_not_inline_parsed() {
        let parsed = blocks("[x] **still plain**");
        assert!(parsed[0].inlines.is_empty());
        assert_eq!(parsed[0].task.as_ref().unwrap().content, "**still plain**");
    }

    #[test]
    fn horizontal_rule_is_bare() {
        let parsed = blocks("---");
        assert_eq!(parsed[0].kind, BlockKind::HorizontalRule);
        assert_eq!(parsed[0].content, "");
        assert!(parsed[0].inlines.is_empty());
    }

    #[test]
    fn dashed_rule_with_spaces_is_a_list_item_first() {
        // "- - -" matches the list grammar before the rule grammar
        let parsed = blocks("- - -");
        assert_eq!(parsed[0].kind, BlockKind::ListItem);
    }

    #[test]
    fn whitespace_only_line_is_a_paragraph() {
        let parsed = blocks("  ");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].kind, BlockKind::Paragraph);
    }
}
