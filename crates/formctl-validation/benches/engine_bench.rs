//! Benchmarks for per-keystroke validation.
//!
//! Run with: cargo bench -p formctl-validation --bench engine_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use formctl_core::InputMode;
use formctl_validation::{
    Bound, FieldValidationRules, ValidationEngine, email, is_email_address_valid,
};
use std::hint::black_box;

const INPUTS: &[(&str, &str)] = &[
    ("short", "ab"),
    ("email", "first.last+tag@example.com"),
    ("long", "the quick brown fox jumps over the lazy dog, twice over"),
];

fn bench_text_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/text_length");
    for &(name, raw) in INPUTS {
        let rules = FieldValidationRules::<String>::new()
            .required(true)
            .min_length(Bound::new(3.0).message("short"))
            .max_length(Bound::new(40.0).message("long"));
        let mut engine = ValidationEngine::new(Some(rules));
        let value = raw.to_string();
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| black_box(engine.evaluate_text(Some(value), Some(value.as_str()), None)));
        });
    }
    group.finish();
}

fn bench_numeric(c: &mut Criterion) {
    let rules = FieldValidationRules::<String>::new().min(18).max(120);
    let mut engine = ValidationEngine::new(Some(rules)).with_input_mode(InputMode::Numeric);
    let value = "42".to_string();
    c.bench_function("engine/numeric", |b| {
        b.iter(|| black_box(engine.evaluate_text(Some(&value), Some(value.as_str()), None)));
    });
}

fn bench_email(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/email");
    for &(name, raw) in INPUTS {
        group.bench_with_input(BenchmarkId::new("predicate", name), raw, |b, raw| {
            b.iter(|| black_box(is_email_address_valid(raw)));
        });
    }
    let rules = FieldValidationRules::<String>::new()
        .required(true)
        .custom_shared(email("Invalid Email Address."));
    let mut engine = ValidationEngine::new(Some(rules));
    let value = "first.last+tag@example.com".to_string();
    group.bench_function("custom_rule", |b| {
        b.iter(|| black_box(engine.evaluate_text(Some(&value), Some(value.as_str()), None)));
    });
    group.finish();
}

fn bench_checkbox(c: &mut Criterion) {
    let rules = FieldValidationRules::<Vec<String>>::new().required(true).min(1).max(3);
    let mut engine = ValidationEngine::new(Some(rules));
    let picks: Vec<String> = vec!["a".into(), "b".into()];
    c.bench_function("engine/checkbox_group", |b| {
        b.iter(|| black_box(engine.evaluate_checkbox_group(Some(&picks), Some(picks.as_slice()))));
    });
}

criterion_group!(
    benches,
    bench_text_length,
    bench_numeric,
    bench_email,
    bench_checkbox
);
criterion_main!(benches);
