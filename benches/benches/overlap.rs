// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the overlap geometry, one per branch of the area
//! computation plus the full metrics snapshot.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ecotone_overlap::{Metrics, overlap_area};
use kurbo::Circle;

fn overlap(c: &mut Criterion) {
    let disjoint = (
        Circle::new((0.0, 0.0), 10.0),
        Circle::new((100.0, 0.0), 10.0),
    );
    let contained = (Circle::new((0.0, 0.0), 10.0), Circle::new((2.0, 1.0), 3.0));
    let lens = (Circle::new((0.0, 0.0), 10.0), Circle::new((15.0, 0.0), 10.0));

    let mut group = c.benchmark_group("overlap_area");
    group.bench_function("disjoint", |b| {
        b.iter(|| overlap_area(black_box(disjoint.0), black_box(disjoint.1)));
    });
    group.bench_function("contained", |b| {
        b.iter(|| overlap_area(black_box(contained.0), black_box(contained.1)));
    });
    group.bench_function("lens", |b| {
        b.iter(|| overlap_area(black_box(lens.0), black_box(lens.1)));
    });
    group.finish();

    c.bench_function("metrics_measure", |b| {
        b.iter(|| Metrics::measure(black_box(Some(lens.0)), black_box(Some(lens.1))));
    });
}

criterion_group!(benches, overlap);
criterion_main!(benches);
