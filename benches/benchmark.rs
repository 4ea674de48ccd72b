//! Benchmarks for wordgraph

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordgraph::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
To explore strange new worlds, to seek out new life and new civilizations,
to boldly go where no one has gone before. Space is the final frontier and
these are the voyages of a starship whose continuing mission is to explore
strange new worlds and to seek out new life wherever it may be found.
"#;

fn benchmark_tokenization(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_TEXT)))
    });

    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 10, 100].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let words = Tokenizer::new().tokenize(&SAMPLE_TEXT.repeat(50));

    c.bench_function("graph_build", |b| {
        b.iter(|| GraphBuilder::from_words(black_box(&words)).finish())
    });
}

fn benchmark_queries(c: &mut Criterion) {
    let graph = GraphBuilder::from_words(&Tokenizer::new().tokenize(SAMPLE_TEXT)).finish();

    c.bench_function("pagerank_100", |b| {
        let pr = StandardPageRank::new();
        b.iter(|| pr.run(black_box(&graph)))
    });

    c.bench_function("shortest_path", |b| {
        b.iter(|| shortest_path(black_box(&graph), "to", "found"))
    });

    c.bench_function("shortest_paths_from", |b| {
        b.iter(|| shortest_paths_from(black_box(&graph), "to"))
    });

    c.bench_function("bridge_words", |b| {
        b.iter(|| find_bridge_words(black_box(&graph), "explore", "new"))
    });

    c.bench_function("random_walk", |b| {
        let walker = RandomWalker::new();
        let mut rng = seeded_rng(Some(7));
        b.iter(|| walker.walk(black_box(&graph), &mut rng))
    });
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_graph_building,
    benchmark_queries
);
criterion_main!(benches);
