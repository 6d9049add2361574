// benches/histogram.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use parts_tracker::stats::{bin_prices, brand_stats};

// Deterministic pseudo-prices; enough spread to hit every bin.
fn synth_prices(n: usize) -> Vec<f64> {
    let mut x: u64 = 0x9E37_79B9;
    (0..n)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            50.0 + (x >> 33) as f64 % 5000.0
        })
        .collect()
}

fn synth_rows(n: usize) -> Vec<Vec<String>> {
    let brands = ["Toyota", "Ford", "BMW", "Mazda"];
    synth_prices(n)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                format!("Part {}", i),
                brands[i % brands.len()].to_string(),
                "oil filter".to_string(),
                "Online Car Parts".to_string(),
                format!("{:.2}", p),
                "2026-08-06".to_string(),
                String::new(),
            ]
        })
        .collect()
}

fn bench_binning(c: &mut Criterion) {
    for n in [100usize, 10_000] {
        let prices = synth_prices(n);
        c.bench_function(&format!("bin_prices_{n}"), |b| {
            b.iter(|| {
                let bins = bin_prices(black_box(&prices));
                black_box(bins.len())
            })
        });
    }
}

fn bench_brand_stats(c: &mut Criterion) {
    let rows = synth_rows(10_000);
    c.bench_function("brand_stats_10k", |b| {
        b.iter(|| {
            let s = brand_stats(black_box(&rows));
            black_box(s.len())
        })
    });
}

criterion_group!(benches, bench_binning, bench_brand_stats);
criterion_main!(benches);
