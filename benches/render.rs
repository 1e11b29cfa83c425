//! Performance measurement for full-pattern rendering at varying knot sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use knotweave::KnotSession;
use std::hint::black_box;

/// Measures rendering cost as the knot grows from 4x4 to 64x64 cells
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in &[4_usize, 12, 32, 64] {
        let mut session = KnotSession::new();
        if session.set_grid_size(*size, *size).is_err() {
            group.finish();
            return;
        }
        session.randomize_pattern(12345);

        group.bench_with_input(BenchmarkId::from_parameter(size), &session, |b, session| {
            b.iter(|| black_box(session.render()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
