// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecotone_scene --heading-base-level=0

//! Ecotone Scene: the two-slot circle store.
//!
//! An Ecotone scene holds at most two circles in named slots: the **self**
//! circle and the **nature** circle. The scene is the single piece of
//! shared state in an Ecotone application: the input controller mutates
//! it, and renderers and metrics read it.
//!
//! The two slots are a type-level fact, not an array convention: [`Slot`]
//! is a two-variant enum, and [`Scene`] stores two named optional fields.
//! Slot order (self first, nature second) governs hit testing and the
//! single-level undo.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use ecotone_scene::{Scene, Slot};
//!
//! let mut scene = Scene::new();
//!
//! // A draw gesture starts a zero-radius circle at the pointer.
//! assert!(scene.create_circle(Slot::SelfCircle, Point::new(40.0, 40.0)));
//! scene.set_radius(Slot::SelfCircle, 25.0);
//!
//! // Drawing into an occupied slot is a no-op.
//! assert!(!scene.create_circle(Slot::SelfCircle, Point::new(0.0, 0.0)));
//!
//! // Hit testing is strict: interior only.
//! assert_eq!(
//!     scene.find_circle_containing(Point::new(50.0, 40.0)),
//!     Some(Slot::SelfCircle)
//! );
//! assert_eq!(scene.find_circle_containing(Point::new(65.0, 40.0)), None);
//!
//! // Undo pops the highest occupied slot.
//! assert_eq!(scene.remove_last(), Some(Slot::SelfCircle));
//! assert!(scene.is_empty());
//! ```
//!
//! ## Change detection
//!
//! [`Scene::revision`] is a monotonically increasing counter that bumps
//! only when a mutation actually changes the scene. Embedders can poll it
//! after dispatching input to decide whether to redraw and re-measure,
//! without diffing the contents.
//!
//! This crate is `no_std`.

#![no_std]

mod scene;
mod types;

pub use scene::Scene;
pub use types::{SceneCircle, Slot};
