use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sunrise_equation::coordinates::{format_coordinates, parse_coordinates};
use sunrise_equation::{calc, calc_with_parameters, solar_parameters, sunrise_sunset};

/// 2023-06-21T00:00:00Z
const TIMESTAMP: f64 = 1_687_305_600.0;

fn benchmark_single_calculation(c: &mut Criterion) {
    c.bench_function("calc_single", |b| {
        b.iter(|| {
            calc(
                black_box(TIMESTAMP),
                black_box(37.7749),
                black_box(-122.4194),
                black_box(0.0),
            )
            .unwrap()
        })
    });

    let datetime = Utc.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
    c.bench_function("sunrise_sunset_chrono_single", |b| {
        b.iter(|| {
            sunrise_sunset(
                black_box(datetime),
                black_box(37.7749),
                black_box(-122.4194),
                black_box(0.0),
            )
            .unwrap()
        })
    });
}

fn benchmark_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");

    for days in [30u64, 365] {
        group.throughput(Throughput::Elements(days));
        group.bench_with_input(BenchmarkId::new("calc", days), &days, |b, &days| {
            b.iter(|| {
                for day in 0..days {
                    let timestamp = TIMESTAMP + day as f64 * 86_400.0;
                    black_box(calc(timestamp, 37.7749, -122.4194, 0.0).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn benchmark_latitude_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("latitude_sweep_fixed_meridian");
    let latitudes: Vec<f64> = (-60..=60).map(f64::from).collect();
    group.throughput(Throughput::Elements(latitudes.len() as u64));

    group.bench_function("calc", |b| {
        b.iter(|| {
            for &latitude in &latitudes {
                black_box(calc(TIMESTAMP, latitude, 13.4, 0.0).unwrap());
            }
        })
    });

    group.bench_function("calc_with_parameters", |b| {
        b.iter(|| {
            let parameters = solar_parameters(TIMESTAMP, 13.4);
            for &latitude in &latitudes {
                black_box(calc_with_parameters(&parameters, latitude, 0.0).unwrap());
            }
        })
    });

    group.finish();
}

fn benchmark_coordinates(c: &mut Criterion) {
    c.bench_function("format_coordinates", |b| {
        b.iter(|| format_coordinates(black_box(-33.8688), black_box(151.2093)).to_string())
    });

    c.bench_function("parse_coordinates", |b| {
        b.iter(|| parse_coordinates(black_box("33°52′7″S 151°12′33″E")).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series,
    benchmark_latitude_sweep,
    benchmark_coordinates
);
criterion_main!(benches);
