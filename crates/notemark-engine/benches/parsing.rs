use criterion::{Criterion, criterion_group, criterion_main};
use pulldown_cmark::Parser;

fn generate_note_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet with [a link](http://example.com/page)\n- Another item\n\n[x] reviewed\n[ ] pending\n\n| col a | col b |\n|-------|-------|\n| 1     | 2     |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n> A quoted line with ~~struck~~ text.\n\n---\n\n";
    base.repeat(size)
}

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_note_content(100);
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = notemark_engine::parse_document(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_note_content(100);
    group.bench_function("highlight", |b| {
        b.iter(|| {
            let tokens = notemark_engine::highlight(std::hint::black_box(&content));
            std::hint::black_box(tokens);
        });
    });

    group.finish();
}

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_note_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_document,
    bench_highlight,
    bench_pulldown_cmark_baseline
);
criterion_main!(benches);
