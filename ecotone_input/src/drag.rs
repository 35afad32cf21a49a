// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: track the origin of the gesture in flight.
//!
//! Both Ecotone gestures are anchored to where the pointer went down: a
//! draw gesture measures the radius from there, and the origin doubles as
//! the "a gesture is in flight" flag for move filtering. Nothing needs
//! incremental deltas, so only the origin is stored.

use kurbo::Point;

/// Tracks the active drag gesture, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Position where the active drag started, `None` when idle.
    pub origin: Option<Point>,
}

impl DragState {
    /// Start tracking a drag anchored at `pos`.
    ///
    /// Starting while a drag is already active re-anchors it; gestures
    /// that lose their pointer-up (for example when the pointer leaves
    /// the window) recover on the next press.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
    }

    /// Returns `true` while a drag is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// End the active drag, if any.
    pub fn end(&mut self) {
        self.origin = None;
    }
}
