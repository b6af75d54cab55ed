use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, NaiveDate};
use siteledger_inventory::{forecast, InventoryRow};

fn history(days: usize) -> Vec<InventoryRow> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..days)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            let used = 20 + (i % 7) * 3;
            let stock = 100_000 - i * 10;
            InventoryRow::new(&date.to_string(), &used.to_string(), &stock.to_string())
        })
        .collect()
}

fn bench_forecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast");

    for days in [30, 365, 5_000].iter() {
        let rows = history(*days);
        group.throughput(Throughput::Elements(*days as u64));
        group.bench_with_input(BenchmarkId::new("rows", days), &rows, |b, rows| {
            b.iter(|| forecast(black_box(rows)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_forecast);
criterion_main!(benches);
