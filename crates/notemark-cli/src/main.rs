use anyhow::{Context, Result, bail};
use notemark_engine::{Block, BlockKind, export, highlight, io, parse_document};
use std::env;
use std::path::Path;
use std::process;

enum Mode {
    Blocks,
    Tokens,
    Html,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (mode, path) = match args.as_slice() {
        [path] => (Mode::Blocks, path),
        [flag, path] => match flag.as_str() {
            "--tokens" => (Mode::Tokens, path),
            "--html" => (Mode::Html, path),
            other => bail!("unknown flag: {other}"),
        },
        _ => {
            eprintln!("usage: notemark-cli [--tokens | --html] <note.md>");
            process::exit(2);
        }
    };

    let content = io::read_file(Path::new(path)).with_context(|| format!("reading {path}"))?;

    match mode {
        Mode::Blocks => print_blocks(&content),
        Mode::Tokens => print_tokens(&content),
        Mode::Html => print!("{}", export::to_html(&content)),
    }

    Ok(())
}

fn print_blocks(content: &str) {
    for block in parse_document(content).blocks {
        print_block(&block);
    }
}

fn print_block(block: &Block) {
    match block.kind {
        BlockKind::Heading => println!("heading({}): {}", block.level, block.content),
        BlockKind::CodeFence => {
            let lines = block.content.lines().count();
            println!("code fence: {lines} line(s)");
        }
        BlockKind::Table => {
            if let Some(table) = &block.table {
                println!(
                    "table: {} column(s), {} row(s)",
                    table.column_count(),
                    table.rows.len()
                );
            }
        }
        BlockKind::TaskItem => {
            if let Some(task) = &block.task {
                let mark = if task.checked { 'x' } else { ' ' };
                println!("task [{mark}]: {}", task.content);
            }
        }
        BlockKind::HorizontalRule => println!("rule"),
        BlockKind::Quote => println!("quote: {}", block.content.replace('\n', " / ")),
        BlockKind::ListItem => println!("list item: {}", block.content),
        BlockKind::Paragraph => println!("paragraph: {}", block.content),
    }
}

fn print_tokens(content: &str) {
    for token in highlight(content) {
        println!(
            "{:>5}..{:<5} {:?} {:?}",
            token.start, token.end, token.kind, token.text
        );
    }
}
