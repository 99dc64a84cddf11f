use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sequtils::{longest_unique_substring, merge_sort, rle_decode, rle_encode};

/// Generate repetitive text data
fn generate_repetitive_text(size: usize) -> String {
    let pattern = "the quick brown fox jumps over the lazy dog ";
    pattern.repeat(size / pattern.len())
}

/// Generate long runs of identical characters
fn generate_runs(size: usize) -> String {
    let mut result = String::with_capacity(size);
    let mut i = 0usize;
    while result.len() < size {
        let ch = (b'a' + (i % 26) as u8) as char;
        for _ in 0..(i % 17 + 1) {
            result.push(ch);
        }
        i += 1;
    }
    result.truncate(size);
    result
}

/// Generate pseudo-random integers
fn generate_numbers(size: usize) -> Vec<u64> {
    let mut seed = 12345u64;
    (0..size)
        .map(|_| {
            // Simple LCG random
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            seed % 100_000
        })
        .collect()
}

fn bench_merge_sort(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("merge_sort");

    for size in sizes.iter() {
        let data = generate_numbers(*size);

        group.bench_with_input(BenchmarkId::new("merge_sort", size), &data, |b, data| {
            b.iter(|| black_box(merge_sort(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("std_stable_sort", size), &data, |b, data| {
            b.iter(|| {
                let mut copy = black_box(data).clone();
                copy.sort();
                black_box(copy)
            });
        });
    }

    group.finish();
}

fn bench_unique_window(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("unique_window");

    for size in sizes.iter() {
        let data = generate_repetitive_text(*size);

        group.bench_with_input(BenchmarkId::new("substring", size), &data, |b, data| {
            b.iter(|| black_box(longest_unique_substring(black_box(data))));
        });
    }

    group.finish();
}

fn bench_rle(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("rle");

    for size in sizes.iter() {
        let data = generate_runs(*size);
        let encoded = rle_encode(&data).expect("non-empty input");

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| black_box(rle_encode(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| black_box(rle_decode(black_box(encoded))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge_sort, bench_unique_window, bench_rle);
criterion_main!(benches);
