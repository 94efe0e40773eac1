use crate::common::{configure_criterion, rich_failure};
use criterion::{criterion_group, Criterion};
use outcome_rail::{FailureFormatConfig, Failure, Failures};
use std::hint::black_box;

pub fn bench_failure_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/display");
    let plain = Failure::fatal();
    let rich = rich_failure();

    group.bench_function("empty_metadata", |b| b.iter(|| black_box(plain.to_string())));
    group.bench_function("four_entries", |b| b.iter(|| black_box(rich.to_string())));

    group.finish();
}

pub fn bench_format_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/config");
    let rich = rich_failure();
    let failures = Failures::new(rich_failure(), (0..4).map(|i| Failure::validation().with_metadata("index", i)));

    for (name, config) in [
        ("default", FailureFormatConfig::default()),
        ("compact", FailureFormatConfig::compact()),
        ("multiline", FailureFormatConfig::multiline()),
    ] {
        group.bench_function(name, |b| b.iter(|| black_box(rich.format_with(&config))));
        group.bench_function(format!("{name}_aggregate"), |b| {
            b.iter(|| black_box(failures.format_with(&config)))
        });
    }

    group.finish();
}

pub fn bench_failure_equality(c: &mut Criterion) {
    let a = rich_failure();
    let b_reordered = Failure::custom("Conflict", "User.Duplicate", "email already registered")
        .with_metadata("retryable", false)
        .with_metadata("attempt", 3)
        .with_metadata("tenant", "acme")
        .with_metadata("email", "user1@company.com");

    c.bench_function("formatting/equality_reordered_metadata", |b| {
        b.iter(|| black_box(black_box(&a) == black_box(&b_reordered)))
    });
}

criterion_group! {
    name = formatting_benches;
    config = configure_criterion();
    targets =
        bench_failure_display,
        bench_format_config,
        bench_failure_equality,
}
