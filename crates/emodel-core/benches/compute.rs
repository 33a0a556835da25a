use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emodel_core::{compute, compute_breakdown, InputParameters};

fn bench_compute(c: &mut Criterion) {
    let reference = InputParameters::g107_defaults();
    let lossy = InputParameters {
        t: 150.0,
        ta: 250.0,
        ie: 11.0,
        bpl: 19.0,
        ppl: 2.0,
        ..reference
    };

    c.bench_function("compute_reference", |b| b.iter(|| compute(black_box(&reference))));
    c.bench_function("compute_lossy", |b| b.iter(|| compute(black_box(&lossy))));
    c.bench_function("compute_breakdown", |b| b.iter(|| compute_breakdown(black_box(&lossy))));
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
