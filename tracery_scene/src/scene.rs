// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A compact reference world: slot storage, generational ids, picking.

use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::{EntityId, Geometry, PickList, Selection, World};

/// Default pick radius in drawing units.
pub const DEFAULT_PICK_RADIUS: f64 = 4.0;

/// Storage for one slot: a generation counter plus the entity, if live.
#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    entity: Option<Entity>,
}

#[derive(Clone, Debug)]
struct Entity {
    geometry: Geometry,
    /// Creation order stamp; newer entities win equal-distance picks.
    stamp: u64,
}

/// A flat scene of geometric entities with selection and picking.
///
/// `Scene` is the reference [`World`] implementation: a slot vector with a
/// free list and generational ids (in the manner of a box tree), a
/// [`Selection`] that only ever holds live ids, and distance-based picking
/// with a configurable radius.
///
/// ```
/// use kurbo::Point;
/// use tracery_scene::{Geometry, Scene, World};
///
/// let mut scene = Scene::new();
/// let a = scene.create_entity(Geometry::Point(Point::new(10.0, 10.0)));
///
/// let picks = scene.entities_under_point(Point::new(11.0, 10.0));
/// assert_eq!(picks.first(), Some(&a));
///
/// scene.select(a);
/// scene.translate_selected((5.0, 0.0).into());
/// assert_eq!(scene.geometry(a), Some(Geometry::Point(Point::new(15.0, 10.0))));
/// ```
#[derive(Clone, Debug)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    next_stamp: u64,
    selection: Selection,
    pick_radius: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty scene with [`DEFAULT_PICK_RADIUS`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            next_stamp: 0,
            selection: Selection::new(),
            pick_radius: DEFAULT_PICK_RADIUS,
        }
    }

    /// Creates an empty scene with the given pick radius in drawing units.
    #[must_use]
    pub fn with_pick_radius(pick_radius: f64) -> Self {
        let mut scene = Self::new();
        scene.set_pick_radius(pick_radius);
        scene
    }

    /// Sets the pick radius in drawing units. Negative values clamp to zero.
    ///
    /// Hosts typically derive this from the current zoom so picking feels
    /// constant-sized in screen pixels.
    pub fn set_pick_radius(&mut self, pick_radius: f64) {
        self.pick_radius = pick_radius.max(0.0);
    }

    /// Returns the pick radius in drawing units.
    #[must_use]
    pub fn pick_radius(&self) -> f64 {
        self.pick_radius
    }

    /// Returns `true` when `id` refers to a live entity.
    #[must_use]
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entity(id).is_some()
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Returns `true` when the scene holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all live entities and their geometry, in slot order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, Geometry)> + '_ {
        self.slots.iter().zip(0_u32..).filter_map(|(slot, idx)| {
            let entity = slot.entity.as_ref()?;
            Some((EntityId::new(idx, slot.generation), entity.geometry))
        })
    }

    /// Returns the selection revision counter.
    ///
    /// See [`Selection::revision`]; this bumps whenever the selection
    /// contents change, however that change was caused.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection.revision()
    }

    fn entity(&self, id: EntityId) -> Option<&Entity> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.entity.as_ref()
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.entity.as_mut()
    }
}

impl World for Scene {
    fn entities_under_point(&self, location: Point) -> PickList {
        let mut hits: SmallVec<[(f64, u64, EntityId); 4]> = SmallVec::new();
        for (slot, idx) in self.slots.iter().zip(0_u32..) {
            let Some(entity) = slot.entity.as_ref() else {
                continue;
            };
            let distance = entity.geometry.distance_to(location);
            if distance <= self.pick_radius {
                hits.push((distance, entity.stamp, EntityId::new(idx, slot.generation)));
            }
        }
        // Nearest first; equal distances resolve to the newest entity. The
        // sort is stable and stamps are unique, so the order is deterministic.
        hits.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(core::cmp::Ordering::Equal)
                .then(b.1.cmp(&a.1))
        });
        hits.into_iter().map(|(_, _, id)| id).collect()
    }

    fn create_entity(&mut self, geometry: Geometry) -> EntityId {
        let entity = Entity {
            geometry,
            stamp: self.next_stamp,
        };
        self.next_stamp += 1;

        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.entity = Some(entity);
            EntityId::new(idx, slot.generation)
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "scenes never hold more than u32::MAX slots"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                entity: Some(entity),
            });
            EntityId::new(idx, 1)
        }
    }

    fn delete_entity(&mut self, id: EntityId) -> bool {
        let Some(slot) = self.slots.get_mut(id.idx()) else {
            return false;
        };
        if slot.generation != id.generation() || slot.entity.is_none() {
            return false;
        }
        slot.entity = None;
        self.free.push(id.slot());
        self.selection.remove(id);
        true
    }

    fn geometry(&self, id: EntityId) -> Option<Geometry> {
        self.entity(id).map(|entity| entity.geometry)
    }

    fn set_geometry(&mut self, id: EntityId, geometry: Geometry) -> bool {
        match self.entity_mut(id) {
            Some(entity) => {
                entity.geometry = geometry;
                true
            }
            None => false,
        }
    }

    fn select(&mut self, id: EntityId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.selection.insert(id);
        true
    }

    fn unselect_all(&mut self) {
        self.selection.clear();
    }

    fn selected(&self) -> &[EntityId] {
        self.selection.ids()
    }

    fn translate_selected(&mut self, displacement: Vec2) {
        if displacement == Vec2::ZERO {
            return;
        }
        let ids: PickList = self.selection.ids().iter().copied().collect();
        for id in ids {
            if let Some(entity) = self.entity_mut(id) {
                entity.geometry = entity.geometry.translated(displacement);
            }
        }
    }
}
