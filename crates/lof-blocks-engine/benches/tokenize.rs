use criterion::{Criterion, criterion_group, criterion_main};
use lof_blocks_engine::{
    BlockRenderer, EscapedNotation, LOF_KEYWORD, ParameterSet, block_to_html, locate_blocks,
    tokenize,
};

fn generate_lof_document(blocks: usize) -> String {
    let block = "```lof font-size: 1.2em; color: #333; separator: ||;\n\
                 ((a)b) || = || (a)(b)\n\
                 (()) || law of calling || ()\n\
                 \n\
                 ((((a)))) || = || a\n\
                 ```\n\n";
    block.repeat(blocks)
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let line = "((a)b)::=::(a)(b)::=::(((a)(b)))".repeat(20);
    group.bench_function("long_line", |b| {
        b.iter(|| {
            let segments = tokenize(std::hint::black_box(&line), "::");
            std::hint::black_box(segments);
        });
    });

    group.finish();
}

fn bench_render_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let document = generate_lof_document(100);
    let renderer = BlockRenderer::new(EscapedNotation);
    let defaults = ParameterSet::default();
    group.bench_function("document_to_html", |b| {
        b.iter(|| {
            let html: Vec<String> = locate_blocks(std::hint::black_box(&document), LOF_KEYWORD)
                .iter()
                .map(|block| {
                    block_to_html(&renderer.render(&block.body, Some(block.section()), &defaults))
                })
                .collect();
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_render_document);
criterion_main!(benches);
