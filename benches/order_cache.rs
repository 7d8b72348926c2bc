//! Benchmarks for order cache operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use order_cache::{CacheConfig, Order, OrderCache, Side};

/// Build a cache with `size` orders spread over 10 securities, 20 users and 5 companies
fn populated(size: usize) -> OrderCache {
    let mut cache = OrderCache::with_config(CacheConfig::new().with_initial_capacity(size));
    for i in 0..size {
        cache.add_order(Order::new(
            format!("OrdId{i}"),
            format!("SecId{}", i % 10),
            if i % 2 == 0 { Side::Buy } else { Side::Sell },
            (i % 1000) as u32 + 1,
            format!("User{}", i % 20),
            format!("Company{}", i % 5),
        ));
    }
    cache
}

fn bench_add_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_order");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut cache = populated(size);
            let order = Order::new("OrdIdNew", "SecId1", Side::Buy, 100, "User1", "Company1");

            b.iter(|| {
                cache.add_order(black_box(order.clone()));
            });
        });
    }

    group.finish();
}

fn bench_cancel_for_user(c: &mut Criterion) {
    let mut group = c.benchmark_group("cancel_orders_for_user");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let cache = populated(size);

            b.iter_batched(
                || cache.clone(),
                |mut cache| cache.cancel_orders_for_user(black_box("User7")),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_matching_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching_size");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let cache = populated(size);

            b.iter(|| {
                black_box(cache.get_matching_size_for_security(black_box("SecId3")));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_order,
    bench_cancel_for_user,
    bench_matching_size
);
criterion_main!(benches);
