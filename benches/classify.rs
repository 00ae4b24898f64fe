//! Classification and formatting benchmarks
//!
//! Run with: cargo bench --bench classify

use breakfast_ratios::{format_amount, Catalog, Ratios, RatioMatcher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Slider-style inputs covering every region of the ratio triangle
fn sample_ratios() -> Vec<Ratios> {
    let mut samples = Vec::new();
    for flour in (0..=100).step_by(10) {
        for liquid in (0..=(100 - flour)).step_by(10) {
            let eggs = 100 - flour - liquid;
            samples.push(Ratios::new(flour as f64, liquid as f64, eggs as f64));
        }
    }
    samples
}

fn bench_matcher(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let matcher = RatioMatcher::new(&catalog);
    let samples = sample_ratios();

    c.bench_function("find_closest/slider_grid", |b| {
        b.iter(|| {
            for ratios in &samples {
                black_box(matcher.find_closest(black_box(*ratios)));
            }
        })
    });

    c.bench_function("rank_all/slider_grid", |b| {
        b.iter(|| {
            for ratios in &samples {
                black_box(matcher.rank_all(black_box(*ratios)));
            }
        })
    });
}

fn bench_format_amount(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_amount");
    for amount in [2.0, 0.5, 1.333, 2.95] {
        group.bench_with_input(BenchmarkId::from_parameter(amount), &amount, |b, &amount| {
            b.iter(|| format_amount(black_box(amount)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matcher, bench_format_amount);
criterion_main!(benches);
