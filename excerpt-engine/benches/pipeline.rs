//! Performance benchmarks for the summarization pipeline
//!
//! Run with: cargo bench --bench pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use excerpt_engine::{EngineConfig, Pipeline, ScoringMode};
use std::hint::black_box;

/// Generate prose of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let base = "The committee reviewed the \"final. draft!\" report on regional water use. \
        Farmers asked for clearer rules on irrigation quotas. ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let pipeline = Pipeline::new(EngineConfig::default()).unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("summarize", size), &text, |b, text| {
            b.iter(|| pipeline.summarize(black_box(text), 5, ScoringMode::Basic));
        });
    }

    group.finish();
}

/// Benchmark the scoring modes on the same document
fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    let pipeline = Pipeline::new(EngineConfig::default()).unwrap();
    let text = generate_text(10_240);

    for mode in [ScoringMode::Basic, ScoringMode::Compound] {
        group.bench_with_input(BenchmarkId::new("summarize", mode), &text, |b, text| {
            b.iter(|| pipeline.summarize(black_box(text), 5, mode));
        });
    }

    group.finish();
}

/// Benchmark batch summarization
fn bench_batch(c: &mut Criterion) {
    let pipeline = Pipeline::new(EngineConfig::default()).unwrap();
    let docs: Vec<String> = (0..32).map(|_| generate_text(4096)).collect();
    let refs: Vec<&str> = docs.iter().map(String::as_str).collect();

    c.bench_function("batch_32x4k", |b| {
        b.iter(|| pipeline.summarize_batch(black_box(&refs), 5, ScoringMode::Basic));
    });
}

criterion_group!(benches, bench_text_sizes, bench_modes, bench_batch);
criterion_main!(benches);
