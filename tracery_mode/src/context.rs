// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability boundary lent to states, and the host-facing sinks.

use kurbo::Vec2;

use tracery_event::ViewTransform;
use tracery_scene::{EntityId, World};

/// A condition absorbed at the interaction boundary.
///
/// Handlers have no error channel. When a world operation refuses (a stale
/// id, say) the handler falls back to a harmless reaction and describes what
/// happened here instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// An operation targeted an entity that no longer exists.
    StaleEntity(EntityId),
    /// A commit produced degenerate geometry, such as a zero-radius arc.
    DegenerateGeometry(EntityId),
}

/// Receives absorbed conditions; hosts route them to logs or debug UI.
pub trait DiagnosticSink {
    /// Called once per absorbed condition.
    fn note(&mut self, diagnostic: Diagnostic);
}

/// Discards every diagnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IgnoreDiagnostics;

impl DiagnosticSink for IgnoreDiagnostics {
    fn note(&mut self, _diagnostic: Diagnostic) {}
}

/// Commit-point notifications, the hook an undo system records from.
///
/// The interaction layer calls these exactly where a finished edit becomes
/// observable: a placement committing, a drag committing, a deletion. Calls
/// are fire-and-forget; nothing is returned and the interaction layer never
/// varies its behavior on them. All methods default to no-ops, so an
/// implementation overrides only the commits it records.
pub trait ChangeSink {
    /// A new entity was placed and committed.
    fn entity_placed(&mut self, id: EntityId) {
        let _ = id;
    }

    /// A drag of `ids` committed after moving them by `displacement` total.
    fn selection_dragged(&mut self, ids: &[EntityId], displacement: Vec2) {
        let _ = (ids, displacement);
    }

    /// The listed entities were deleted.
    fn entities_deleted(&mut self, ids: &[EntityId]) {
        let _ = ids;
    }
}

/// A [`ChangeSink`] that records nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullChanges;

impl ChangeSink for NullChanges {}

/// Everything a state may touch, borrowed for the duration of one handler
/// call.
///
/// The dispatcher assembles a fresh context per event from its world, view
/// transform, and sinks; states cannot retain any part of it past the call.
/// The redraw hint starts cleared on every context and is sticky once set.
pub struct EditContext<'a> {
    world: &'a mut dyn World,
    view: &'a dyn ViewTransform,
    changes: &'a mut dyn ChangeSink,
    diagnostics: &'a mut dyn DiagnosticSink,
    redraw_suppressed: bool,
}

impl core::fmt::Debug for EditContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EditContext")
            .field("redraw_suppressed", &self.redraw_suppressed)
            .finish_non_exhaustive()
    }
}

impl<'a> EditContext<'a> {
    /// Borrows the dispatcher's collaborators into a per-event context.
    pub fn new(
        world: &'a mut dyn World,
        view: &'a dyn ViewTransform,
        changes: &'a mut dyn ChangeSink,
        diagnostics: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            world,
            view,
            changes,
            diagnostics,
            redraw_suppressed: false,
        }
    }

    /// The document boundary.
    pub fn world(&mut self) -> &mut dyn World {
        &mut *self.world
    }

    /// The screen-to-drawing conversion supplied by the host.
    #[must_use]
    pub fn view(&self) -> &dyn ViewTransform {
        self.view
    }

    /// The commit-point collaborator.
    pub fn changes(&mut self) -> &mut dyn ChangeSink {
        &mut *self.changes
    }

    /// Reports an absorbed condition.
    pub fn note(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.note(diagnostic);
    }

    /// Hints that this event changed nothing worth repainting.
    ///
    /// The dispatcher redraws after every event unless the handling state
    /// sets this; a state change or hover change overrides the hint.
    pub fn suppress_redraw(&mut self) {
        self.redraw_suppressed = true;
    }

    /// Whether the handling state suppressed the redraw for this event.
    #[must_use]
    pub fn redraw_suppressed(&self) -> bool {
        self.redraw_suppressed
    }
}
