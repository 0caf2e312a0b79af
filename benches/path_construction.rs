//! Benchmarks for timeline path construction and trip assembly
//!
//! Tracks the cost of the per-day pipeline for the expected data scale
//! (a two-week trip, a handful of intervals per day) and for a much larger
//! synthetic trip, to confirm stateless recomputation stays cheap.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use dutygrid::test_utils::{standard_day, synthetic_context, synthetic_trip};
use dutygrid::{
    DutyInterval, EngineOptions, GapPolicy, ValidationMode, assemble, build_path, order_intervals,
};
use std::hint::black_box;

fn resolved_day() -> Vec<DutyInterval> {
    standard_day(1)
        .intervals
        .iter()
        .map(|raw| raw.resolve().expect("fixture intervals are well-formed"))
        .collect()
}

fn bench_path_building(c: &mut Criterion) {
    let day = resolved_day();
    let ordered = order_intervals(&day, ValidationMode::Permissive).expect("fixture day orders");

    let mut group = c.benchmark_group("path_building");
    group.throughput(Throughput::Elements(ordered.len() as u64));

    group.bench_function("single_day", |b| {
        b.iter(|| black_box(build_path(black_box(&ordered), GapPolicy::Omit)))
    });

    group.bench_function("single_day_gap_filled", |b| {
        b.iter(|| black_box(build_path(black_box(&ordered), GapPolicy::FillOff)))
    });

    group.finish();
}

fn bench_trip_assembly(c: &mut Criterion) {
    let two_weeks = synthetic_trip(14);
    let season = synthetic_trip(365);
    let ctx = synthetic_context();
    let options = EngineOptions::permissive();

    let mut group = c.benchmark_group("trip_assembly");

    group.throughput(Throughput::Elements(two_weeks.days.len() as u64));
    group.bench_function("two_week_trip", |b| {
        b.iter(|| black_box(assemble(black_box(&two_weeks.days), &ctx, &options)))
    });

    group.throughput(Throughput::Elements(season.days.len() as u64));
    group.bench_function("year_of_days", |b| {
        b.iter(|| black_box(assemble(black_box(&season.days), &ctx, &options)))
    });

    group.finish();
}

criterion_group!(benches, bench_path_building, bench_trip_assembly);
criterion_main!(benches);
