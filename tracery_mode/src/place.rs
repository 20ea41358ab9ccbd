// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The add-entity mode: [`PlaceMode`] and its leaves.

use alloc::boxed::Box;

use core::f64::consts::PI;

use kurbo::{Arc, Point};

use tracery_event::{KeyCode, KeyEventArgs, PointerButtons, PointerEventArgs};
use tracery_scene::{EntityId, Geometry};

use crate::{Diagnostic, EditContext, EditState, Idle, StateKind, Transition};

/// Radius at or below which a committed arc is reported as degenerate.
const DEGENERATE_RADIUS: f64 = 1e-9;

/// What a [`PlaceMode`] produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// A bare point that follows the pointer until release.
    Point,
    /// A circular arc: the press anchors the center, the drag sets the
    /// radius, and the arc sweeps a half turn starting from the pointer's
    /// angle.
    Arc,
}

impl EntityKind {
    /// Geometry for a fresh entity pressed at `anchor`.
    #[must_use]
    pub fn initial_geometry(self, anchor: Point) -> Geometry {
        self.dragged_geometry(anchor, anchor)
    }

    /// Geometry for an entity anchored at `anchor` with the pointer at
    /// `cursor`.
    #[must_use]
    pub fn dragged_geometry(self, anchor: Point, cursor: Point) -> Geometry {
        match self {
            Self::Point => Geometry::Point(cursor),
            Self::Arc => {
                let offset = cursor - anchor;
                let radius = offset.hypot();
                let start_angle = if radius > 0.0 { offset.atan2() } else { 0.0 };
                Geometry::Arc(Arc::new(anchor, (radius, radius), start_angle, PI, 0.0))
            }
        }
    }

    /// The mode tag of a [`PlaceMode`] producing this kind.
    #[must_use]
    pub fn mode_kind(self) -> StateKind {
        match self {
            Self::Point => StateKind::AddPoint,
            Self::Arc => StateKind::AddArc,
        }
    }
}

/// The add-entity mode, parameterized by what it places.
///
/// `PlaceMode` owns one nested leaf, [`WaitingToPlace`] or
/// [`PlacingEntity`], and forwards pointer events to it. Its one mode-global
/// shortcut is `Escape`: cancel the nested leaf (which deletes a half-placed
/// entity) and return to [`Idle`].
#[derive(Debug)]
pub struct PlaceMode {
    kind: EntityKind,
    nested: Box<dyn EditState>,
}

impl PlaceMode {
    /// A placement mode for bare points.
    #[must_use]
    pub fn point() -> Self {
        Self::for_kind(EntityKind::Point)
    }

    /// A placement mode for arcs.
    #[must_use]
    pub fn arc() -> Self {
        Self::for_kind(EntityKind::Arc)
    }

    /// A placement mode for the given kind.
    #[must_use]
    pub fn for_kind(kind: EntityKind) -> Self {
        Self {
            kind,
            nested: Box::new(WaitingToPlace::new(kind)),
        }
    }

    /// What this mode places.
    #[must_use]
    pub fn entity_kind(&self) -> EntityKind {
        self.kind
    }
}

impl EditState for PlaceMode {
    fn kind(&self) -> StateKind {
        self.kind.mode_kind()
    }

    fn on_pointer_down(
        &mut self,
        ctx: &mut EditContext<'_>,
        args: &PointerEventArgs,
    ) -> Transition {
        let next = self.nested.on_pointer_down(ctx, args);
        next.apply_to(&mut self.nested);
        Transition::DoNothing
    }

    fn on_pointer_up(&mut self, ctx: &mut EditContext<'_>, args: &PointerEventArgs) -> Transition {
        let next = self.nested.on_pointer_up(ctx, args);
        next.apply_to(&mut self.nested);
        Transition::DoNothing
    }

    fn on_pointer_move(
        &mut self,
        ctx: &mut EditContext<'_>,
        args: &PointerEventArgs,
    ) -> Transition {
        let next = self.nested.on_pointer_move(ctx, args);
        next.apply_to(&mut self.nested);
        Transition::DoNothing
    }

    fn on_key_down(&mut self, ctx: &mut EditContext<'_>, args: &KeyEventArgs) -> Transition {
        if args.key == Some(KeyCode::Escape) {
            self.nested.on_cancelled(ctx);
            return Transition::to(Idle::new());
        }
        let next = self.nested.on_key_down(ctx, args);
        next.apply_to(&mut self.nested);
        Transition::DoNothing
    }

    fn on_cancelled(&mut self, ctx: &mut EditContext<'_>) {
        self.nested.on_cancelled(ctx);
    }

    fn nested(&self) -> Option<&dyn EditState> {
        Some(self.nested.as_ref())
    }
}

/// The quiescent leaf of [`PlaceMode`]: no placement in flight.
///
/// A left press creates the entity at the press location, makes it the sole
/// selection, and starts reshaping it.
#[derive(Clone, Copy, Debug)]
pub struct WaitingToPlace {
    kind: EntityKind,
}

impl WaitingToPlace {
    /// Creates the leaf for the given kind.
    #[must_use]
    pub const fn new(kind: EntityKind) -> Self {
        Self { kind }
    }
}

impl EditState for WaitingToPlace {
    fn kind(&self) -> StateKind {
        StateKind::WaitingToPlace
    }

    fn on_pointer_down(
        &mut self,
        ctx: &mut EditContext<'_>,
        args: &PointerEventArgs,
    ) -> Transition {
        if !args.buttons.contains(PointerButtons::LEFT) {
            return Transition::DoNothing;
        }
        let anchor = args.drawing_location;
        ctx.world().unselect_all();
        let entity = ctx.world().create_entity(self.kind.initial_geometry(anchor));
        ctx.world().select(entity);
        Transition::to(PlacingEntity::new(self.kind, entity, anchor))
    }

    fn on_pointer_move(
        &mut self,
        ctx: &mut EditContext<'_>,
        _args: &PointerEventArgs,
    ) -> Transition {
        // Nothing tracks the pointer until a press starts a placement.
        ctx.suppress_redraw();
        Transition::DoNothing
    }
}

/// The placement-in-progress leaf of [`PlaceMode`].
///
/// Owns the provisional entity. Release commits it and reports the commit;
/// cancellation deletes it. Either way the reconciliation happens in the
/// protocol, never in a destructor, so the entity cannot be orphaned by the
/// state going away.
#[derive(Clone, Copy, Debug)]
pub struct PlacingEntity {
    kind: EntityKind,
    entity: EntityId,
    anchor: Point,
}

impl PlacingEntity {
    /// Creates the leaf for an entity freshly created at `anchor`.
    #[must_use]
    pub const fn new(kind: EntityKind, entity: EntityId, anchor: Point) -> Self {
        Self {
            kind,
            entity,
            anchor,
        }
    }

    /// The provisional entity's id.
    #[must_use]
    pub const fn entity(&self) -> EntityId {
        self.entity
    }

    fn reshape(&self, ctx: &mut EditContext<'_>, cursor: Point) {
        let geometry = self.kind.dragged_geometry(self.anchor, cursor);
        if !ctx.world().set_geometry(self.entity, geometry) {
            ctx.note(Diagnostic::StaleEntity(self.entity));
        }
    }
}

impl EditState for PlacingEntity {
    fn kind(&self) -> StateKind {
        StateKind::PlacingEntity
    }

    fn on_pointer_move(
        &mut self,
        ctx: &mut EditContext<'_>,
        args: &PointerEventArgs,
    ) -> Transition {
        self.reshape(ctx, args.drawing_location);
        Transition::DoNothing
    }

    fn on_pointer_up(&mut self, ctx: &mut EditContext<'_>, args: &PointerEventArgs) -> Transition {
        if args.buttons.contains(PointerButtons::LEFT) {
            // Some other button went up; the placement goes on.
            return Transition::DoNothing;
        }
        self.reshape(ctx, args.drawing_location);
        if self.kind == EntityKind::Arc {
            let radius = (args.drawing_location - self.anchor).hypot();
            if radius <= DEGENERATE_RADIUS {
                // Commit anyway; the host decides whether to keep it.
                ctx.note(Diagnostic::DegenerateGeometry(self.entity));
            }
        }
        ctx.changes().entity_placed(self.entity);
        Transition::to(WaitingToPlace::new(self.kind))
    }

    fn on_cancelled(&mut self, ctx: &mut EditContext<'_>) {
        // The placement never committed; the provisional entity goes too.
        if !ctx.world().delete_entity(self.entity) {
            ctx.note(Diagnostic::StaleEntity(self.entity));
        }
    }
}
