//! Criterion benchmarks for retok pipelines.
//!
//! - Per-language pipelines over mixed-script sentences
//! - Space-joined retokenization
//! - Parallel batch tokenization

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use retok::analysis::analyzer::language::Language;
use retok::config::RetokConfig;
use retok::retokenizer::Retokenizer;

/// Generate mixed-script sentences for benchmarking.
fn generate_test_sentences(count: usize) -> Vec<String> {
    let fragments = [
        "第3章",
        "ｅｖｉｃの８０ｈｚ",
        "2010-2012年",
        "alpha-receptor",
        "A和B或",
        "０．５ ｍｍ",
        "研究者は",
        "テスト。",
        "U.S.A.",
        "5kg",
        "（注）",
        "x-ray",
    ];

    (0..count)
        .map(|i| {
            let len = 10 + (i % 20);
            (0..len)
                .map(|j| fragments[(i * 7 + j * 13) % fragments.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Benchmark each language pipeline.
fn bench_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipelines");
    let config = RetokConfig::default();
    let sentences = generate_test_sentences(100);

    for language in [Language::Chinese, Language::Japanese, Language::Other] {
        let mut pipeline = language.analyzer(&config, None).unwrap().build().unwrap();

        group.throughput(Throughput::Elements(sentences.len() as u64));
        group.bench_function(format!("tokenize_{language}"), |b| {
            b.iter(|| {
                for sentence in &sentences {
                    let tokens = pipeline.tokenize(black_box(sentence)).unwrap();
                    black_box(tokens);
                }
            })
        });
    }

    group.finish();
}

/// Benchmark space-joined output.
fn bench_retokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("retokenizer");
    let sentences = generate_test_sentences(100);
    let mut retokenizer = Retokenizer::new("ja", RetokConfig::default(), None).unwrap();

    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.bench_function("tokenize_with_spaces", |b| {
        b.iter(|| {
            for sentence in &sentences {
                let line = retokenizer
                    .tokenize_with_spaces(black_box(sentence), false)
                    .unwrap();
                black_box(line);
            }
        })
    });

    group.finish();
}

/// Benchmark parallel batch tokenization.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);
    let sentences = generate_test_sentences(2000);
    let retokenizer = Retokenizer::new("zh", RetokConfig::default(), None).unwrap();

    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.bench_function("tokenize_batch", |b| {
        b.iter(|| black_box(retokenizer.tokenize_batch(black_box(&sentences), false).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_pipelines, bench_retokenizer, bench_batch);

criterion_main!(benches);
