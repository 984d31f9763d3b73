use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use line_breaking::{break_lines, samples, Algorithm};
use std::time::Duration;

const MEASUREMENT_SECS: u64 = 10;
const WARMUP_SECS: u64 = 2;
const SAMPLE_SIZE: usize = 20;

/// The quadratic slack matrix makes the plain DP solver memory-bound well
/// before it is time-bound; skip it past this many words.
const DP_WORD_CAP: usize = 2_000;

/// Deterministic prose-shaped filler: word lengths cycle through a fixed
/// pattern so runs are reproducible without seeding.
fn synthetic_paragraph(words: usize) -> String {
    const LENGTHS: [usize; 11] = [3, 7, 2, 9, 4, 1, 6, 11, 5, 2, 8];
    let mut text = String::with_capacity(words * 7);
    for k in 0..words {
        if k > 0 {
            text.push(' ');
        }
        let letter = (b'a' + (k % 26) as u8) as char;
        for _ in 0..LENGTHS[k % LENGTHS.len()] {
            text.push(letter);
        }
    }
    text
}

fn bench_sample_texts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_texts");
    group.measurement_time(Duration::from_secs(MEASUREMENT_SECS));
    group.warm_up_time(Duration::from_secs(WARMUP_SECS));
    group.sample_size(SAMPLE_SIZE);

    let cases = [
        ("alpha", samples::ALPHA, 9),
        ("gilbert_short", samples::GILBERT_SHORT, 16),
        ("gilbert_full", samples::GILBERT_FULL, 30),
        ("preamble", samples::PREAMBLE, 40),
        ("bleak_house", samples::BLEAK_HOUSE, 60),
    ];

    for (name, text, max_width) in cases {
        let word_count = text.split_whitespace().count();
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::BruteForce && word_count > 32 {
                continue;
            }
            group.throughput(Throughput::Elements(word_count as u64));
            group.bench_with_input(BenchmarkId::new(algorithm.name(), name), &max_width, |b, &w| {
                b.iter(|| break_lines(text, w, algorithm).expect("sample should break"));
            });
        }
    }
    group.finish();
}

fn bench_synthetic_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthetic_paragraph");
    group.measurement_time(Duration::from_secs(MEASUREMENT_SECS));
    group.warm_up_time(Duration::from_secs(WARMUP_SECS));
    group.sample_size(SAMPLE_SIZE);

    for size in [500usize, 2_000, 10_000, 50_000] {
        let text = synthetic_paragraph(size);
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::BruteForce {
                continue;
            }
            if algorithm == Algorithm::DynamicProgramming && size > DP_WORD_CAP {
                continue;
            }
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &text, |b, text| {
                b.iter(|| break_lines(text, 72, algorithm).expect("paragraph should break"));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sample_texts, bench_synthetic_growth);
criterion_main!(benches);
