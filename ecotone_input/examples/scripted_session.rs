// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a short scripted pointer session and prints the metrics panel
//! after each step, standing in for the interactive canvas page: draw the
//! self circle, draw the nature circle, drag them together, undo.
//!
//! Run with: `cargo run -p ecotone_input --example scripted_session`

use ecotone_input::{Controller, PointerEvent, Tool};
use ecotone_overlap::Metrics;
use ecotone_scene::{Scene, Slot};
use kurbo::Point;

struct Step {
    caption: &'static str,
    tool: Option<Tool>,
    events: &'static [PointerEvent],
    undo: bool,
}

const DRAW_SELF_EVENTS: &[PointerEvent] = &[
    PointerEvent::Down(Point::new(100.0, 100.0)),
    PointerEvent::Move(Point::new(140.0, 100.0)),
    PointerEvent::Up,
];

const DRAW_NATURE_EVENTS: &[PointerEvent] = &[
    PointerEvent::Down(Point::new(160.0, 100.0)),
    PointerEvent::Move(Point::new(160.0, 140.0)),
    PointerEvent::Up,
];

const DRAG_EVENTS: &[PointerEvent] = &[
    PointerEvent::Down(Point::new(150.0, 100.0)),
    PointerEvent::Move(Point::new(100.0, 100.0)),
    PointerEvent::Up,
];

fn main() {
    let script = [
        Step {
            caption: "draw the self circle (center 100,100, radius 40)",
            tool: Some(Tool::DrawSelf),
            events: DRAW_SELF_EVENTS,
            undo: false,
        },
        Step {
            caption: "draw the nature circle (center 160,100, radius 40)",
            tool: Some(Tool::DrawNature),
            events: DRAW_NATURE_EVENTS,
            undo: false,
        },
        Step {
            caption: "drag the nature circle onto the self circle",
            tool: Some(Tool::AdjustDistance),
            events: DRAG_EVENTS,
            undo: false,
        },
        Step {
            caption: "undo (removes the nature circle)",
            tool: None,
            events: &[],
            undo: true,
        },
    ];

    let mut scene = Scene::new();
    let mut controller = Controller::new();

    for step in script {
        controller.set_tool(step.tool);
        for &event in step.events {
            controller.handle(&mut scene, event);
        }
        if step.undo {
            controller.undo(&mut scene);
        }

        println!("== {}", step.caption);
        for (slot, circle) in scene.circles() {
            println!(
                "   {:<6} center ({:.0}, {:.0})  radius {:.0}",
                slot.label(),
                circle.circle.center.x,
                circle.circle.center.y,
                circle.circle.radius,
            );
        }
        print_metrics(&scene);
        println!();
    }
}

fn print_metrics(scene: &Scene) {
    let m = Metrics::measure(
        scene.circle(Slot::SelfCircle),
        scene.circle(Slot::NatureCircle),
    )
    .rounded(3);
    println!(
        "   self area {:.3}  nature area {:.3}  area ratio {:.3}",
        m.self_area, m.nature_area, m.area_ratio
    );
    println!(
        "   distance {:.3}  overlap area {:.3}  overlap ratio {:.3}",
        m.distance, m.overlap_area, m.overlap_ratio
    );
}
