//! Performance benchmarks for the word-frequency MapReduce pipeline
//! Measures chunk mapping, reduction, and the parallel executor end to end

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tokio::runtime::Runtime;
use wordreduce::mapreduce::demo::sample_documents;
use wordreduce::mapreduce::{
    aggregate_results, map_chunks, split_documents, ExecutorConfig, MapReduceExecutor,
};

/// Build a corpus by repeating the sample documents with a numbered suffix
fn create_corpus(count: usize) -> Vec<String> {
    let samples = sample_documents();
    (0..count)
        .map(|i| format!("{} item_{}", samples[i % samples.len()], i % 97))
        .collect()
}

fn bench_map_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_phase");

    for size in [12, 120, 1200] {
        let chunks = split_documents(&create_corpus(size), 4);
        group.bench_with_input(BenchmarkId::new("sequential", size), &chunks, |b, chunks| {
            b.iter(|| black_box(map_chunks(chunks)));
        });
    }

    group.finish();
}

fn bench_reduce_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_phase");

    for chunk_count in [4, 16, 64] {
        let stats = map_chunks(&split_documents(&create_corpus(1200), chunk_count));
        group.bench_with_input(
            BenchmarkId::new("aggregate", chunk_count),
            &stats,
            |b, stats| {
                b.iter(|| black_box(aggregate_results(stats.clone())));
            },
        );
    }

    group.finish();
}

fn bench_executor(c: &mut Criterion) {
    let mut group = c.benchmark_group("executor");
    let rt = Runtime::new().unwrap();
    let corpus = create_corpus(2400);

    for max_parallel in [1, 2, 4, 8] {
        let executor = MapReduceExecutor::new(ExecutorConfig {
            chunk_count: 8,
            top_n: 10,
            max_parallel,
        });
        group.bench_with_input(
            BenchmarkId::new("max_parallel", max_parallel),
            &corpus,
            |b, corpus| {
                b.to_async(&rt)
                    .iter(|| async { black_box(executor.run(corpus.clone()).await.unwrap()) });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_map_phase, bench_reduce_phase, bench_executor);

criterion_main!(benches);
