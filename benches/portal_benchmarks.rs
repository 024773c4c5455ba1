use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use procwatch::intel::{GeneratorConfig, IntelStore};
use procwatch::procurement::{FeedConfig, ProcurementSimulator};

fn scaled(people: usize) -> GeneratorConfig {
    GeneratorConfig {
        people,
        companies: people * 3 / 5,
        contracts: people * 2,
        legal_events: people / 2,
        seed: Some(42),
        ..GeneratorConfig::default()
    }
}

/// Benchmark full dataset generation and wiring
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for size in [50, 500, 5_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let store = IntelStore::generate(scaled(size)).unwrap();
                criterion::black_box(store.company_count());
            });
        });
    }
    group.finish();
}

/// Benchmark shared-person network lookups
fn bench_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_connections");

    for size in [50, 500, 5_000].iter() {
        let store = IntelStore::generate(scaled(*size)).unwrap();
        let org_nrs = store.org_nrs();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                for org_nr in org_nrs.iter().take(20) {
                    criterion::black_box(store.network_connections(org_nr).len());
                }
            });
        });
    }
    group.finish();
}

/// Benchmark competitor-bidding analysis for one municipality
fn bench_competitor_bidding(c: &mut Criterion) {
    let mut group = c.benchmark_group("competitor_bidding");

    for size in [50, 500].iter() {
        let store = IntelStore::generate(scaled(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                criterion::black_box(store.competitor_bidding("Stockholm").len());
            });
        });
    }
    group.finish();
}

/// Benchmark a feed refresh including anomaly detection
fn bench_feed_update(c: &mut Criterion) {
    let mut sim = ProcurementSimulator::new(FeedConfig {
        seed: Some(42),
        ..FeedConfig::default()
    });
    c.bench_function("feed_update", |b| {
        b.iter(|| {
            sim.update_data();
            criterion::black_box(sim.anomalies(30).len());
        });
    });
}

criterion_group!(
    benches,
    bench_generation,
    bench_network,
    bench_competitor_bidding,
    bench_feed_update,
);
criterion_main!(benches);
