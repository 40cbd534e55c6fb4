use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use dashcalc_rs::core::{Color, Period, RingSlice, layout_ring_segments, resolve_period};
use std::hint::black_box;

fn bench_period_resolution_full_cycle(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2025, 8, 6).expect("valid reference");
    let periods = [
        Period::Today,
        Period::Yesterday,
        Period::ThisWeek,
        Period::LastWeek,
        Period::ThisMonth,
        Period::LastMonth,
        Period::ThisQuarter,
        Period::LastQuarter,
        Period::ThisYear,
        Period::LastYear,
    ];

    c.bench_function("period_resolution_full_cycle", |b| {
        b.iter(|| {
            for period in periods {
                let _ = resolve_period(black_box(period), black_box(reference))
                    .expect("resolution should succeed");
            }
        })
    });
}

fn bench_ring_layout_64_slices(c: &mut Criterion) {
    let slices: Vec<RingSlice> = (0..64)
        .map(|i| {
            RingSlice::new(
                format!("category-{i}"),
                (i % 7) as f64 * 12.5 + 1.0,
                Color::rgb(0.3, 0.5, 0.7),
            )
        })
        .collect();

    c.bench_function("ring_layout_64_slices", |b| {
        b.iter(|| {
            let _ = layout_ring_segments(black_box(&slices), black_box(120.0), black_box(2.0))
                .expect("layout should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_period_resolution_full_cycle,
    bench_ring_layout_64_slices
);
criterion_main!(benches);
