//! Benchmarks for text chunking strategies.

use chunkdeck::{chunk_text, compute_stats, Strategy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn sample_text(size: usize) -> String {
    // Realistic text with sentence and paragraph structure
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump! ",
        "The five boxing wizards jump quickly. ",
        "Sphinx of black quartz, judge my vow?\n\n",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_strategies(c: &mut Criterion) {
    for strategy in Strategy::ALL {
        let mut group = c.benchmark_group(format!("{strategy}_chunker"));

        for size in [1_000, 10_000, 100_000] {
            let text = sample_text(size);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new("no_overlap", size), &text, |b, text| {
                b.iter(|| chunk_text(black_box(text), strategy, 500, 0));
            });
            group.bench_with_input(BenchmarkId::new("overlap_20", size), &text, |b, text| {
                b.iter(|| chunk_text(black_box(text), strategy, 500, 20));
            });
        }

        group.finish();
    }
}

fn bench_stats(c: &mut Criterion) {
    let fragments = chunk_text(&sample_text(100_000), Strategy::Sentence, 500, 10);

    c.bench_function("compute_stats", |b| {
        b.iter(|| compute_stats(black_box(&fragments), 10));
    });
}

criterion_group!(benches, bench_strategies, bench_stats);
criterion_main!(benches);
