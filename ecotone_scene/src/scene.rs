// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Circle, Point};
use peniko::Color;

use crate::types::{SceneCircle, Slot};

/// The two-slot circle store.
///
/// `Scene` owns the self and nature circles as two named optional fields,
/// plus a per-slot fill color applied when a slot's circle is created. All
/// mutations that change the scene bump a revision counter; mutations that
/// turn out to be no-ops (creating into an occupied slot, editing an empty
/// slot) leave it untouched and report failure through their return value.
#[derive(Clone, Debug)]
pub struct Scene {
    self_circle: Option<SceneCircle>,
    nature_circle: Option<SceneCircle>,
    colors: [Color; 2],
    revision: u64,
}

impl Scene {
    /// Default fill for the self circle: half-transparent yellow.
    pub const DEFAULT_SELF_COLOR: Color = Color::from_rgba8(255, 255, 0, 128);
    /// Default fill for the nature circle: half-transparent green.
    pub const DEFAULT_NATURE_COLOR: Color = Color::from_rgba8(0, 255, 0, 128);

    /// Creates an empty scene with the default slot colors.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            self_circle: None,
            nature_circle: None,
            colors: [Self::DEFAULT_SELF_COLOR, Self::DEFAULT_NATURE_COLOR],
            revision: 0,
        }
    }

    /// Returns `true` if neither slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.self_circle.is_none() && self.nature_circle.is_none()
    }

    /// Returns the number of occupied slots (0, 1, or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.self_circle.is_some()) + usize::from(self.nature_circle.is_some())
    }

    /// Returns the current revision counter.
    ///
    /// The revision is local to this `Scene` instance and bumps only when a
    /// mutation changes the contents. Observers can use it as a cheap
    /// "did anything change?" marker for redraw scheduling.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the stored circle in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&SceneCircle> {
        self.field(slot).as_ref()
    }

    /// Returns just the geometry of the circle in `slot`, if any.
    ///
    /// This is the shape metrics and renderers consume most often, so it
    /// gets its own accessor.
    #[must_use]
    pub fn circle(&self, slot: Slot) -> Option<Circle> {
        self.field(slot).as_ref().map(|c| c.circle)
    }

    /// Iterates the present circles in slot order, with their slots.
    ///
    /// This is the render output: each item carries the geometry, the fill
    /// color, and (via [`Slot::label`]) the fixed display label.
    pub fn circles(&self) -> impl Iterator<Item = (Slot, &SceneCircle)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|c| (slot, c)))
    }

    /// Creates a zero-radius circle at `center` in `slot`.
    ///
    /// Returns `false` without touching the scene if the slot is already
    /// occupied. The new circle gets the slot's configured fill color; its
    /// radius grows via [`Scene::set_radius`] as the drag proceeds.
    pub fn create_circle(&mut self, slot: Slot, center: Point) -> bool {
        let color = self.colors[slot.index()];
        let field = self.field_mut(slot);
        if field.is_some() {
            return false;
        }
        *field = Some(SceneCircle {
            circle: Circle::new(center, 0.0),
            color,
        });
        self.bump_revision();
        true
    }

    /// Removes the occupied slot with the highest index.
    ///
    /// The nature circle is removed before the self circle regardless of
    /// which was drawn first. Returns the slot that was emptied, or `None`
    /// if the scene was already empty.
    pub fn remove_last(&mut self) -> Option<Slot> {
        for slot in Slot::ALL.into_iter().rev() {
            let field = self.field_mut(slot);
            if field.is_some() {
                *field = None;
                self.bump_revision();
                return Some(slot);
            }
        }
        None
    }

    /// Removes both circles and resets to an empty scene.
    ///
    /// Configured slot colors are kept.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.self_circle = None;
        self.nature_circle = None;
        self.bump_revision();
    }

    /// Returns the first slot (in slot order) whose circle strictly
    /// contains `point`.
    ///
    /// Containment is strict: a point exactly on the boundary, or any
    /// point against a zero-radius circle, is not a hit.
    #[must_use]
    pub fn find_circle_containing(&self, point: Point) -> Option<Slot> {
        Slot::ALL.into_iter().find(|&slot| {
            self.circle(slot)
                .is_some_and(|c| (point - c.center).hypot() < c.radius)
        })
    }

    /// Sets the radius of the circle in `slot`.
    ///
    /// Radii are distances; negative inputs are clamped to zero. Returns
    /// `false` without touching the scene if the slot is empty.
    pub fn set_radius(&mut self, slot: Slot, radius: f64) -> bool {
        let radius = radius.max(0.0);
        let Some(stored) = self.field_mut(slot).as_mut() else {
            return false;
        };
        if stored.circle.radius != radius {
            stored.circle.radius = radius;
            self.bump_revision();
        }
        true
    }

    /// Moves the circle in `slot` so its center is at `center`.
    ///
    /// Returns `false` without touching the scene if the slot is empty.
    pub fn set_center(&mut self, slot: Slot, center: Point) -> bool {
        let Some(stored) = self.field_mut(slot).as_mut() else {
            return false;
        };
        if stored.circle.center != center {
            stored.circle.center = center;
            self.bump_revision();
        }
        true
    }

    /// Sets the fill color for `slot`.
    ///
    /// The color applies to future creations into the slot and is also
    /// applied to the circle currently stored there, if any.
    pub fn set_color(&mut self, slot: Slot, color: Color) {
        let mut changed = false;
        if self.colors[slot.index()] != color {
            self.colors[slot.index()] = color;
            changed = true;
        }
        if let Some(stored) = self.field_mut(slot).as_mut() {
            if stored.color != color {
                stored.color = color;
                changed = true;
            }
        }
        if changed {
            self.bump_revision();
        }
    }

    fn field(&self, slot: Slot) -> &Option<SceneCircle> {
        match slot {
            Slot::SelfCircle => &self.self_circle,
            Slot::NatureCircle => &self.nature_circle,
        }
    }

    fn field_mut(&mut self, slot: Slot) -> &mut Option<SceneCircle> {
        match slot {
            Slot::SelfCircle => &mut self.self_circle,
            Slot::NatureCircle => &mut self.nature_circle,
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
