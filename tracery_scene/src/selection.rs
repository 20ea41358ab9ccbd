// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection bookkeeping for scene entities.

use alloc::vec::Vec;

use crate::EntityId;

/// The set of selected entities plus a change revision.
///
/// Ids are stored in insertion order in a `Vec` with uniqueness enforced by
/// equality; selections are small, so a linear scan beats hashing here. The
/// revision counter bumps only when the contents actually change, giving
/// observers a cheap "did anything change" marker without comparing sets.
///
/// `Selection` does not know about entity liveness. [`crate::Scene`] keeps
/// the invariant that only live ids are ever inserted and that deleting an
/// entity also removes it from the selection.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    items: Vec<EntityId>,
    revision: u64,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected entities in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[EntityId] {
        &self.items
    }

    /// Returns `true` when `id` is selected.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.items.contains(&id)
    }

    /// Returns the revision counter, bumped on every semantic change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds `id` to the selection.
    ///
    /// Returns `false` (leaving the revision alone) when it was already
    /// selected.
    pub fn insert(&mut self, id: EntityId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(id);
        self.bump_revision();
        true
    }

    /// Removes `id` from the selection, preserving the order of the rest.
    ///
    /// Returns `false` when it was not selected.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let Some(pos) = self.items.iter().position(|&item| item == id) else {
            return false;
        };
        self.items.remove(pos);
        self.bump_revision();
        true
    }

    /// Empties the selection. Returns `false` when it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        self.bump_revision();
        true
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
