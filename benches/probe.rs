use criterion::{criterion_group, criterion_main, Criterion};
use ssb_engine::probe::scan_and_aggregate;

fn bench_scan_and_aggregate(c: &mut Criterion) {
    let n = 1_000_000;
    let values: Vec<i64> = (0..n as i64).collect();

    c.bench_function("scan_and_aggregate/1e6 rows, 256 groups", |b| {
        b.iter(|| {
            scan_and_aggregate(n, 256, |i, acc| {
                if values[i] % 3 == 0 {
                    acc.update(i % 256, values[i]);
                }
            })
        });
    });
}

criterion_group!(benches, bench_scan_and_aggregate);
criterion_main!(benches);
