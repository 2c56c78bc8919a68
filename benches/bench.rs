use best_fit_packing::offline::{BestFitDecreasing, NextFitDecreasing, Strategy as _};
use best_fit_packing::online::{BestFit, BestFitHeap, BestFitLookup, NextFit, Strategy as _};
use best_fit_packing::Instance;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, PlotConfiguration};
use rand::{rngs::StdRng, Rng, SeedableRng};

const CAPACITY: usize = 100;

/// Generates `size` random items that fit into a bin.
fn random_items(size: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    (0..size).map(|_| rng.gen_range(1..=CAPACITY)).collect()
}

pub fn compare_best_fit_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_fit_comparison");
    group
        .plot_config(PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic));

    for size in [10, 100, 1_000, 5_000, 10_000].iter() {
        let items = random_items(*size);
        let instance = Instance::for_items(CAPACITY, &items);
        group.bench_with_input(BenchmarkId::new("BF", size), &items, |b, items| {
            b.iter(|| BestFit.pack(&instance, items))
        });
        group.bench_with_input(BenchmarkId::new("BF-heap", size), &items, |b, items| {
            b.iter(|| BestFitHeap.pack(&instance, items))
        });
        group.bench_with_input(BenchmarkId::new("BF-lookup", size), &items, |b, items| {
            b.iter(|| BestFitLookup.pack(&instance, items))
        });
        group.bench_with_input(BenchmarkId::new("NF", size), &items, |b, items| {
            b.iter(|| NextFit.pack(&instance, items))
        });
    }

    group.finish();
}

pub fn compare_decreasing_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("decreasing_comparison");

    for size in [100, 1_000, 10_000].iter() {
        let items = random_items(*size);
        let instance = Instance::new(CAPACITY);
        group.bench_with_input(BenchmarkId::new("NFD", size), &items, |b, items| {
            b.iter(|| NextFitDecreasing::default().pack_all(&instance, &mut items.clone()))
        });
        group.bench_with_input(BenchmarkId::new("BFD", size), &items, |b, items| {
            b.iter(|| BestFitDecreasing::default().pack_all(&instance, &mut items.clone()))
        });
    }

    group.finish();
}

criterion_group!(online, compare_best_fit_variants);
criterion_group!(offline, compare_decreasing_strategies);
criterion_main!(online, offline);
