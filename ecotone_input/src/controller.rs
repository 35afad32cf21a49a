// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ecotone_scene::{Scene, Slot};
use kurbo::Point;

use crate::drag::DragState;
use crate::events::{PointerEvent, Tool};

/// What a dispatched event did to the scene and the gesture state.
///
/// Invalid gestures are not errors; they report [`Response::Ignored`] and
/// change nothing. Everything else names the slot it touched so embedders
/// can react per circle (highlighting, announcements) without re-deriving
/// the target.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Response {
    /// The event changed nothing: a move with no grabbed circle, a
    /// release outside any gesture, or an edit of an emptied slot.
    Ignored,
    /// Pointer-down created a zero-radius circle in the slot and began a
    /// draw gesture.
    CircleCreated(Slot),
    /// Pointer-down grabbed the circle in the slot and began a move
    /// gesture.
    CircleGrabbed(Slot),
    /// Pointer-down began a drag that has no circle to act on (no tool,
    /// draw into an occupied slot, or a grab that hit nothing). Moves
    /// will be ignored until release.
    DragStarted,
    /// A move grew or shrank the slot's circle to the current
    /// pointer-to-origin distance.
    Resized(Slot),
    /// A move repositioned the slot's circle to the pointer.
    Moved(Slot),
    /// Pointer-up ended the gesture and released the grabbed circle.
    DragEnded,
}

/// The pointer-input state machine.
///
/// A `Controller` holds the selected tool, the slot grabbed by the
/// gesture in flight, and the drag anchor. It owns no scene; each event
/// borrows the scene it mutates, which keeps the controller reusable
/// across scenes and trivially testable.
///
/// The grabbed slot is a non-owning reference into the scene. It is only
/// ever set while a drag is in flight and is cleared unconditionally on
/// release, and [`Controller::undo`] clears it when it removes the slot
/// it points to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controller {
    tool: Option<Tool>,
    active: Option<Slot>,
    drag: DragState,
}

impl Controller {
    /// Creates a controller with no tool selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tool: None,
            active: None,
            drag: DragState { origin: None },
        }
    }

    /// The currently selected tool, if any.
    #[must_use]
    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    /// Selects a tool, or deselects with `None`.
    ///
    /// The selection persists until changed. A gesture already in flight
    /// is not interrupted; its remaining moves are interpreted under the
    /// new tool.
    pub fn set_tool(&mut self, tool: Option<Tool>) {
        self.tool = tool;
    }

    /// The slot grabbed by the gesture in flight, if any.
    #[must_use]
    pub fn active_slot(&self) -> Option<Slot> {
        self.active
    }

    /// Returns `true` while a pointer gesture is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Dispatches one normalized pointer event against `scene`.
    pub fn handle(&mut self, scene: &mut Scene, event: PointerEvent) -> Response {
        match event {
            PointerEvent::Down(pos) => self.on_down(scene, pos),
            PointerEvent::Move(pos) => self.on_move(scene, pos),
            PointerEvent::Up => self.on_up(),
        }
    }

    /// Pointer pressed at `pos`: begin a gesture under the current tool.
    ///
    /// Draw tools create into their slot when it is empty;
    /// [`Tool::AdjustDistance`] grabs the first circle strictly
    /// containing `pos`. In every other combination the drag still
    /// begins, with nothing grabbed, so that the release is consumed
    /// uneventfully.
    pub fn on_down(&mut self, scene: &mut Scene, pos: Point) -> Response {
        let response = match self.tool {
            Some(tool) => match tool.draw_slot() {
                Some(slot) => {
                    if scene.create_circle(slot, pos) {
                        self.active = Some(slot);
                        Response::CircleCreated(slot)
                    } else {
                        self.active = None;
                        Response::DragStarted
                    }
                }
                None => {
                    self.active = scene.find_circle_containing(pos);
                    match self.active {
                        Some(slot) => Response::CircleGrabbed(slot),
                        None => Response::DragStarted,
                    }
                }
            },
            None => {
                self.active = None;
                Response::DragStarted
            }
        };
        self.drag.start(pos);
        response
    }

    /// Pointer moved to `pos`: apply the gesture to the grabbed circle.
    ///
    /// Draw tools set the radius to the distance between `pos` and the
    /// drag origin (the circle's fixed center). [`Tool::AdjustDistance`]
    /// moves the circle's center to `pos`. Moves outside a gesture, or
    /// with nothing grabbed, are ignored.
    pub fn on_move(&mut self, scene: &mut Scene, pos: Point) -> Response {
        let Some(origin) = self.drag.origin else {
            return Response::Ignored;
        };
        let Some(slot) = self.active else {
            return Response::Ignored;
        };
        match self.tool {
            Some(Tool::DrawSelf | Tool::DrawNature) => {
                let radius = (pos - origin).hypot();
                if scene.set_radius(slot, radius) {
                    Response::Resized(slot)
                } else {
                    Response::Ignored
                }
            }
            Some(Tool::AdjustDistance) => {
                if scene.set_center(slot, pos) {
                    Response::Moved(slot)
                } else {
                    Response::Ignored
                }
            }
            None => Response::Ignored,
        }
    }

    /// Pointer released: end the gesture and drop the grabbed slot.
    pub fn on_up(&mut self) -> Response {
        let had_gesture = self.drag.is_dragging() || self.active.is_some();
        self.drag.end();
        self.active = None;
        if had_gesture {
            Response::DragEnded
        } else {
            Response::Ignored
        }
    }

    /// Removes the most recently occupied slot from `scene`.
    ///
    /// This is the single-level undo signal from external UI controls.
    /// If the removed slot is the one currently grabbed, the grab is
    /// dropped so the rest of the gesture cannot edit a slot that no
    /// longer holds its circle.
    pub fn undo(&mut self, scene: &mut Scene) -> Option<Slot> {
        let removed = scene.remove_last();
        if removed.is_some() && removed == self.active {
            self.active = None;
        }
        removed
    }
}
