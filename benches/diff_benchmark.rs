//! Performance benchmarks for the positional diff engines.
//!
//! Run with: cargo bench --bench diff_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use docdiff::adapters::FileKind;
use docdiff::diff::{diff_lines, diff_words};
use docdiff::model::LineSequence;

/// Generate a sequence of synthetic lines.
fn generate_lines(prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{prefix} line {i} with some words to compare"))
        .collect()
}

/// Generate two related sequences with roughly `change_percent` of lines
/// modified in place.
fn generate_pair(size: usize, change_percent: usize) -> (LineSequence, LineSequence) {
    let left_lines = generate_lines("left", size);
    let right_lines: Vec<String> = left_lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if change_percent > 0 && i % (100 / change_percent.max(1)) == 0 {
                format!("{line} changed")
            } else {
                line.clone()
            }
        })
        .collect();

    (
        LineSequence::new("left.txt", FileKind::Text, left_lines),
        LineSequence::new("right.txt", FileKind::Text, right_lines),
    )
}

fn bench_diff_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_lines");
    for size in [100, 1_000, 10_000] {
        let (left, right) = generate_pair(size, 10);
        group.bench_with_input(BenchmarkId::new("10pct_changed", size), &size, |b, _| {
            b.iter(|| diff_lines(black_box(&left), black_box(&right)));
        });

        let identical = left.clone();
        group.bench_with_input(BenchmarkId::new("identical", size), &size, |b, _| {
            b.iter(|| diff_lines(black_box(&left), black_box(&identical)));
        });
    }
    group.finish();
}

fn bench_diff_words(c: &mut Criterion) {
    let left = "The quick brown fox jumps over the lazy dog near the river bank";
    let right = "The quick red fox leaps over the lazy dog near the river bend";

    c.bench_function("diff_words/sentence", |b| {
        b.iter(|| diff_words(black_box(left), black_box(right)));
    });

    let long_left: String = std::iter::repeat("token ").take(500).collect();
    let long_right: String = std::iter::repeat("other ").take(500).collect();
    c.bench_function("diff_words/500_tokens", |b| {
        b.iter(|| diff_words(black_box(&long_left), black_box(&long_right)));
    });
}

criterion_group!(benches, bench_diff_lines, bench_diff_words);
criterion_main!(benches);
