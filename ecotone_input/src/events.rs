// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized input vocabulary: pointer events and tools.

use ecotone_scene::Slot;
use kurbo::Point;

/// A pointer event in canvas-local coordinates.
///
/// This is the single event type the controller understands. Adapting
/// mouse and touch sources into it (extracting the primary touch,
/// subtracting the canvas origin) is the embedding layer's job; by the
/// time an event reaches the controller, mouse and touch are
/// indistinguishable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer was pressed at the given position.
    Down(Point),
    /// The pointer moved to the given position while the gesture was in
    /// flight.
    Move(Point),
    /// The pointer was released. Release positions are irrelevant to
    /// every gesture, so none is carried.
    Up,
}

/// The currently selected interaction tool.
///
/// A tool is selected by external UI controls and persists until changed.
/// The controller stores `Option<Tool>`, with `None` meaning no tool is
/// active and pointer input is inert.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tool {
    /// Draw the self circle: pointer-down fixes the center, dragging
    /// grows the radius.
    DrawSelf,
    /// Draw the nature circle: same gesture, other slot.
    DrawNature,
    /// Grab an existing circle and move it bodily to the pointer.
    ///
    /// The name is historical: the gesture repositions the grabbed
    /// circle's center rather than adjusting only the distance between
    /// the two circles.
    AdjustDistance,
}

impl Tool {
    /// The slot this tool draws into, or `None` for [`Tool::AdjustDistance`].
    #[must_use]
    pub const fn draw_slot(self) -> Option<Slot> {
        match self {
            Self::DrawSelf => Some(Slot::SelfCircle),
            Self::DrawNature => Some(Slot::NatureCircle),
            Self::AdjustDistance => None,
        }
    }
}
