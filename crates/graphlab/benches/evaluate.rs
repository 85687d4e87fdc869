//! Benchmarks for family evaluation and preset generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graphlab::{Domain, families::ids, registry};

/// One representative family per kind: (label, id).
fn bench_families() -> Vec<(&'static str, u32)> {
    vec![
        ("sine", ids::SINE),
        ("tangent", ids::TANGENT),
        ("hypotrochoid", ids::HYPOTROCHOID),
        ("superellipse", ids::SUPERELLIPSE),
        ("butterfly", ids::BUTTERFLY),
        ("hexagram", ids::HEXAGRAM),
    ]
}

/// Evaluate each family over its default domain with default parameters.
fn bench_defaults(c: &mut Criterion) {
    let mut group = c.benchmark_group("defaults");
    let reg = registry();

    for (name, id) in bench_families() {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| reg.evaluate(black_box(id), None, None))
        });
    }

    group.finish();
}

/// How evaluation time grows with the sample count.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let reg = registry();

    for (name, id) in bench_families() {
        let fam = reg.lookup(id).expect("built-in family");
        let params = fam.default_params();
        for samples in [500, 5_000, 50_000] {
            let domain = Domain {
                samples,
                ..fam.default_domain
            };
            group.bench_function(BenchmarkId::new(name, samples), |b| {
                b.iter(|| fam.evaluate(black_box(&domain), &params))
            });
        }
    }

    group.finish();
}

/// Generate a full batch of presets for every family.
fn bench_templates(c: &mut Criterion) {
    let reg = registry();
    c.bench_function("templates/all-x10", |b| {
        b.iter(|| {
            for fam in reg.list_all() {
                black_box(fam.templates(10));
            }
        })
    });
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_defaults, bench_scaling, bench_templates);
}

pub use bench_defs::benches;
criterion_main!(benches);
