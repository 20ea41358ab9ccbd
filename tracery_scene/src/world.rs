// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The world boundary: the capability trait interaction code drives.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::{EntityId, Geometry};

/// Entities picked at a query point, ordered nearest first.
///
/// Backed by a small inline vector: picks near one point are almost always a
/// handful of entities, so the common case allocates nothing.
pub type PickList = SmallVec<[EntityId; 4]>;

/// Capabilities an interaction state may exercise against entity storage.
///
/// This is the entire surface the interaction layer sees of an editor's
/// document. [`crate::Scene`] is the reference implementation; editors with
/// their own storage implement this trait for it and keep everything richer
/// (layers, styles, persistence) on their own side of the boundary.
///
/// The trait is object-safe so contexts can lend `&mut dyn World` without
/// generics, and every method taking an [`EntityId`] absorbs stale ids by
/// reporting `false` or `None` instead of failing: interaction handlers have
/// no error channel.
pub trait World {
    /// Returns the entities within pick range of `location`.
    ///
    /// The list is ordered nearest first; entities at equal distance are
    /// ordered newest first. The ordering is stable, so "take the first hit"
    /// is deterministic for overlapping entities.
    fn entities_under_point(&self, location: Point) -> PickList;

    /// Creates an entity with `geometry` and returns its id.
    fn create_entity(&mut self, geometry: Geometry) -> EntityId;

    /// Deletes an entity, unselecting it first if needed.
    ///
    /// Returns `false` when `id` is stale.
    fn delete_entity(&mut self, id: EntityId) -> bool;

    /// Returns an entity's geometry, or `None` when `id` is stale.
    fn geometry(&self, id: EntityId) -> Option<Geometry>;

    /// Overwrites an entity's geometry. Returns `false` when `id` is stale.
    fn set_geometry(&mut self, id: EntityId, geometry: Geometry) -> bool;

    /// Adds an entity to the selection. Returns `false` when `id` is stale.
    ///
    /// Selecting an already-selected entity is a harmless no-op that still
    /// returns `true`.
    fn select(&mut self, id: EntityId) -> bool;

    /// Empties the selection.
    fn unselect_all(&mut self);

    /// The selected entities, in selection order.
    fn selected(&self) -> &[EntityId];

    /// Returns `true` when `id` is currently selected.
    fn is_selected(&self, id: EntityId) -> bool {
        self.selected().contains(&id)
    }

    /// Moves every selected entity by `displacement`.
    fn translate_selected(&mut self, displacement: Vec2);
}
