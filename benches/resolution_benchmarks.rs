//! Performance benchmarks for the Rate Resolution Engine.
//!
//! Resolution is a linear scan over the current snapshot, so the suite
//! tracks how cost grows with the rule-set size, plus the fixed costs of
//! timestamp normalization and the full HTTP round trip.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rate_engine::api::{AppState, create_router};
use rate_engine::models::{Rate, RateSubmission};
use rate_engine::resolution::{normalize_timestamp, resolve_price};
use rate_engine::store::RateStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const DAY_TOKENS: [&str; 7] = ["mon", "tues", "wed", "thurs", "fri", "sat", "sun"];

/// Builds a rate set of the given size with varied days and windows.
fn build_submissions(count: usize) -> Vec<RateSubmission> {
    (0..count)
        .map(|i| {
            let start = 100 * (i % 12) as u16;
            RateSubmission {
                days: Some(DAY_TOKENS[i % DAY_TOKENS.len()].to_string()),
                times: Some(format!("{:04}-{:04}", start, start + 159)),
                tz: Some("America/Chicago".to_string()),
                price: Some(1000 + i as u32),
            }
        })
        .collect()
}

fn build_rates(count: usize) -> Vec<Rate> {
    build_submissions(count)
        .iter()
        .map(|submission| Rate::from_submission(submission).expect("valid submission"))
        .collect()
}

fn bench_normalize_timestamp(c: &mut Criterion) {
    c.bench_function("normalize_timestamp", |b| {
        b.iter(|| normalize_timestamp(black_box("2021-11-22T10:30:00-05:00")))
    });
}

fn bench_resolve_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_price");

    for size in [2usize, 16, 128] {
        let rates = build_rates(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rates, |b, rates| {
            b.iter(|| {
                resolve_price(
                    black_box(rates),
                    black_box("2021-11-22T10:00:00-05:00"),
                    black_box("2021-11-22T11:00:00-05:00"),
                )
            })
        });
    }

    group.finish();
}

fn bench_price_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let store = RateStore::new();
    store
        .replace_all(&build_submissions(16))
        .expect("valid seed batch");
    let router = create_router(AppState::new(store));

    c.bench_function("price_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .uri("/price?start=2021-11-22T10:00:00-05:00&end=2021-11-22T11:00:00-05:00")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_normalize_timestamp,
    bench_resolve_price,
    bench_price_endpoint
);
criterion_main!(benches);
