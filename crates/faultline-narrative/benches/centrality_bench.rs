use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use faultline_core::config::{CentralityConfig, ClusteringConfig};
use faultline_core::signal::{RuleIndicators, Signal, SignalType};
use faultline_narrative::{cluster_signals, CentralityEngine};

/// `n` signals cycling through every type, spaced 90 minutes apart so the
/// temporal window alone never links neighbours.
fn build_signals(n: usize) -> Vec<Signal> {
    let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            Signal::new(
                format!("s{i}"),
                SignalType::ALL[i % SignalType::ALL.len()],
                (i * 37 % 100) as f64,
                (i * 13 % 100) as f64 / 100.0,
                50.0,
                "bench",
                RuleIndicators::Custom {
                    values: Default::default(),
                },
                t0 + Duration::minutes(90 * i as i64),
            )
        })
        .collect()
}

fn bench_centrality_100(c: &mut Criterion) {
    let mut signals = build_signals(100);
    cluster_signals(&mut signals, &ClusteringConfig::default());
    let engine = CentralityEngine::new(CentralityConfig::default());

    c.bench_function("centrality_100_signals_5_rounds", |b| {
        b.iter(|| black_box(engine.compute(black_box(&signals))));
    });
}

fn bench_centrality_500(c: &mut Criterion) {
    let mut signals = build_signals(500);
    cluster_signals(&mut signals, &ClusteringConfig::default());
    let engine = CentralityEngine::new(CentralityConfig::default());

    c.bench_function("centrality_500_signals_5_rounds", |b| {
        b.iter(|| black_box(engine.compute(black_box(&signals))));
    });
}

fn bench_clustering_500(c: &mut Criterion) {
    let signals = build_signals(500);
    let config = ClusteringConfig::default();

    c.bench_function("greedy_clustering_500_signals", |b| {
        b.iter(|| {
            let mut batch = signals.clone();
            black_box(cluster_signals(&mut batch, &config));
        });
    });
}

criterion_group!(
    benches,
    bench_centrality_100,
    bench_centrality_500,
    bench_clustering_500
);
criterion_main!(benches);
