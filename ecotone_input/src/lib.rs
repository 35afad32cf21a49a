// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecotone_input --heading-base-level=0

//! Ecotone Input: the pointer-input controller.
//!
//! This crate turns normalized pointer events plus a selected tool into
//! mutations of an [`ecotone_scene::Scene`]. It is the stateful middle of
//! an Ecotone application: UI chrome (buttons, keyboard shortcuts) selects
//! a [`Tool`] and triggers undo; an event-adaptation layer converts mouse
//! or touch input into canvas-local [`PointerEvent`]s; and the controller
//! applies the resulting edits to the scene.
//!
//! The controller never renders and never computes metrics. After each
//! dispatched event, embedders consult the scene (its `revision` is a
//! cheap redraw signal) and re-measure with `ecotone_overlap` as needed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use ecotone_scene::{Scene, Slot};
//! use ecotone_input::{Controller, PointerEvent, Response, Tool};
//!
//! let mut scene = Scene::new();
//! let mut controller = Controller::new();
//!
//! // The user picks the "draw self" tool and drags on the canvas.
//! controller.set_tool(Some(Tool::DrawSelf));
//! let response = controller.handle(&mut scene, PointerEvent::Down(Point::new(40.0, 40.0)));
//! assert_eq!(response, Response::CircleCreated(Slot::SelfCircle));
//!
//! // Dragging grows the radius: distance from the fixed center.
//! controller.handle(&mut scene, PointerEvent::Move(Point::new(70.0, 40.0)));
//! assert_eq!(scene.circle(Slot::SelfCircle).unwrap().radius, 30.0);
//!
//! // Release ends the gesture.
//! controller.handle(&mut scene, PointerEvent::Up);
//! assert!(!controller.is_dragging());
//! ```
//!
//! ## Event model
//!
//! Handlers run synchronously and to completion; the controller holds
//! `&mut Scene` only for the duration of one event. There is no queueing,
//! no cancellation beyond pointer-up, and no threading concern — the
//! borrow checker enforces the single-writer discipline the event model
//! assumes.
//!
//! Every dispatched event yields a [`Response`] describing what it did.
//! Invalid gestures (drawing into an occupied slot, moving with nothing
//! grabbed, undo on an empty scene) are not errors; they report
//! [`Response::Ignored`] and leave the scene untouched.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod drag;
mod events;

pub use controller::{Controller, Response};
pub use drag::DragState;
pub use events::{PointerEvent, Tool};
