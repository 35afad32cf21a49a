// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmark for a full pointer session: draw both circles, drag one
//! across the other, measure after every event, undo everything. This is
//! the per-event cost an embedder pays inside its input handler.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ecotone_input::{Controller, PointerEvent, Tool};
use ecotone_overlap::Metrics;
use ecotone_scene::{Scene, Slot};
use kurbo::Point;

fn measure(scene: &Scene) -> Metrics {
    Metrics::measure(
        scene.circle(Slot::SelfCircle),
        scene.circle(Slot::NatureCircle),
    )
}

fn run_session() -> f64 {
    let mut scene = Scene::new();
    let mut controller = Controller::new();
    // Folding every snapshot into a checksum keeps the per-event measure
    // from being optimized away.
    let mut checksum = 0.0;

    controller.set_tool(Some(Tool::DrawSelf));
    controller.handle(&mut scene, PointerEvent::Down(Point::new(100.0, 100.0)));
    for step in 1..=20 {
        let x = 100.0 + 2.0 * f64::from(step);
        controller.handle(&mut scene, PointerEvent::Move(Point::new(x, 100.0)));
        checksum += measure(&scene).self_area;
    }
    controller.handle(&mut scene, PointerEvent::Up);

    controller.set_tool(Some(Tool::DrawNature));
    controller.handle(&mut scene, PointerEvent::Down(Point::new(180.0, 100.0)));
    for step in 1..=20 {
        let y = 100.0 + 2.0 * f64::from(step);
        controller.handle(&mut scene, PointerEvent::Move(Point::new(180.0, y)));
        checksum += measure(&scene).nature_area;
    }
    controller.handle(&mut scene, PointerEvent::Up);

    controller.set_tool(Some(Tool::AdjustDistance));
    controller.handle(&mut scene, PointerEvent::Down(Point::new(180.0, 100.0)));
    for step in 1..=20 {
        let x = 180.0 - 4.0 * f64::from(step);
        controller.handle(&mut scene, PointerEvent::Move(Point::new(x, 100.0)));
        checksum += measure(&scene).overlap_area;
    }
    controller.handle(&mut scene, PointerEvent::Up);

    controller.undo(&mut scene);
    controller.undo(&mut scene);
    checksum
}

fn session(c: &mut Criterion) {
    c.bench_function("pointer_session", |b| {
        b.iter(|| black_box(run_session()));
    });
}

criterion_group!(benches, session);
criterion_main!(benches);
