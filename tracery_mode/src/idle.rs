// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The select-and-drag mode: [`Idle`] and its leaves.

use alloc::boxed::Box;

use kurbo::{Point, Vec2};

use tracery_event::{KeyCode, KeyEventArgs, PointerButtons, PointerEventArgs};
use tracery_scene::PickList;

use crate::{Diagnostic, EditContext, EditState, PlaceMode, StateKind, Transition};

/// Default drag slop, in drawing units.
///
/// A press that travels no farther than this by release time counts as a
/// click, not a drag: the world keeps any sub-slop nudge, but no drag commit
/// is reported. Half a pixel at unit zoom.
pub const DEFAULT_DRAG_SLOP: f64 = 0.5;

/// The select-and-drag mode, the editor's resting state.
///
/// `Idle` owns one nested leaf, [`WaitingToSelect`] or [`DraggingSelection`],
/// and forwards pointer events to it. Its own shortcut handling maps:
///
/// - `p` to point placement and `a` to arc placement (both via
///   [`PlaceMode`]),
/// - `Delete` to deleting the selected entities,
/// - `Escape` to cancelling an in-progress drag.
///
/// Unmapped keys do nothing.
#[derive(Debug)]
pub struct Idle {
    drag_slop: f64,
    nested: Box<dyn EditState>,
}

impl Idle {
    /// Creates the mode with [`DEFAULT_DRAG_SLOP`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_drag_slop(DEFAULT_DRAG_SLOP)
    }

    /// Creates the mode with a custom drag slop in drawing units.
    #[must_use]
    pub fn with_drag_slop(drag_slop: f64) -> Self {
        Self {
            drag_slop,
            nested: Box::new(WaitingToSelect::with_drag_slop(drag_slop)),
        }
    }

    /// Returns `true` while the nested leaf is mid-drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.nested.kind() == StateKind::DraggingSelection
    }
}

impl Default for Idle {
    fn default() -> Self {
        Self::new()
    }
}

impl EditState for Idle {
    fn kind(&self) -> StateKind {
        StateKind::Idle
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
        match args.key {
            Some(KeyCode::Char('p')) if !args.ctrl => {
                // Leaving the mode abandons the nested leaf; an in-flight
                // drag settles first.
                self.nested.on_cancelled(ctx);
                return Transition::to(PlaceMode::point());
            }
            Some(KeyCode::Char('a')) if !args.ctrl => {
                self.nested.on_cancelled(ctx);
                return Transition::to(PlaceMode::arc());
            }
            Some(KeyCode::Delete) => {
                delete_selected(ctx);
                return Transition::DoNothing;
            }
            Some(KeyCode::Escape) => {
                if self.is_dragging() {
                    self.nested.on_cancelled(ctx);
                    self.nested = Box::new(WaitingToSelect::with_drag_slop(self.drag_slop));
                }
                return Transition::DoNothing;
            }
            _ => {}
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

/// Deletes the current selection, notifying the change sink once.
fn delete_selected(ctx: &mut EditContext<'_>) {
    let ids: PickList = ctx.world().selected().iter().copied().collect();
    if ids.is_empty() {
        return;
    }
    for &id in &ids {
        if !ctx.world().delete_entity(id) {
            ctx.note(Diagnostic::StaleEntity(id));
        }
    }
    ctx.changes().entities_deleted(&ids);
}

/// The quiescent leaf of [`Idle`]: no button held.
///
/// A left press resolves what is under the pointer. Hitting an entity
/// selects it (a hit inside the current selection keeps the whole selection,
/// so multi-entity selections drag as one) and starts a drag; hitting empty
/// space clears the selection.
#[derive(Clone, Copy, Debug)]
pub struct WaitingToSelect {
    drag_slop: f64,
}

impl WaitingToSelect {
    /// Creates the leaf with [`DEFAULT_DRAG_SLOP`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_drag_slop(DEFAULT_DRAG_SLOP)
    }

    /// Creates the leaf with a custom drag slop in drawing units.
    #[must_use]
    pub const fn with_drag_slop(drag_slop: f64) -> Self {
        Self { drag_slop }
    }
}

impl Default for WaitingToSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl EditState for WaitingToSelect {
    fn kind(&self) -> StateKind {
        StateKind::WaitingToSelect
    }

    fn on_pointer_down(
        &mut self,
        ctx: &mut EditContext<'_>,
        args: &PointerEventArgs,
    ) -> Transition {
        if !args.buttons.contains(PointerButtons::LEFT) {
            return Transition::DoNothing;
        }
        let picks = ctx.world().entities_under_point(args.drawing_location);
        match picks.first().copied() {
            Some(hit) => {
                if !ctx.world().is_selected(hit) {
                    ctx.world().unselect_all();
                    ctx.world().select(hit);
                }
                Transition::to(DraggingSelection::new(args.drawing_location, self.drag_slop))
            }
            None => {
                ctx.world().unselect_all();
                Transition::DoNothing
            }
        }
    }

    fn on_pointer_move(
        &mut self,
        ctx: &mut EditContext<'_>,
        _args: &PointerEventArgs,
    ) -> Transition {
        // Nothing tracks the pointer while no button is held.
        ctx.suppress_redraw();
        Transition::DoNothing
    }
}

/// The drag-in-progress leaf of [`Idle`].
///
/// Movement is applied per step: every pointer move translates the selection
/// by the displacement since the previous event, so the world is always
/// current and cancelling can revert by translating back. The commit on
/// release reports the accumulated total.
#[derive(Clone, Copy, Debug)]
pub struct DraggingSelection {
    pressed_at: Point,
    previous: Point,
    drag_slop: f64,
}

impl DraggingSelection {
    /// Starts a drag at the press location.
    #[must_use]
    pub const fn new(pressed_at: Point, drag_slop: f64) -> Self {
        Self {
            pressed_at,
            previous: pressed_at,
            drag_slop,
        }
    }

    /// Total displacement applied to the selection so far.
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        self.previous - self.pressed_at
    }
}

impl EditState for DraggingSelection {
    fn kind(&self) -> StateKind {
        StateKind::DraggingSelection
    }

    fn on_pointer_move(
        &mut self,
        ctx: &mut EditContext<'_>,
        args: &PointerEventArgs,
    ) -> Transition {
        let step = args.drawing_location - self.previous;
        if step != Vec2::ZERO {
            ctx.world().translate_selected(step);
        }
        self.previous = args.drawing_location;
        Transition::DoNothing
    }

    fn on_pointer_up(&mut self, ctx: &mut EditContext<'_>, args: &PointerEventArgs) -> Transition {
        if args.buttons.contains(PointerButtons::LEFT) {
            // Some other button went up; the drag goes on.
            return Transition::DoNothing;
        }
        // The release location is authoritative: catch up on displacement
        // that arrived without a move event.
        let step = args.drawing_location - self.previous;
        if step != Vec2::ZERO {
            ctx.world().translate_selected(step);
            self.previous = args.drawing_location;
        }

        let total = self.displacement();
        if total.hypot() > self.drag_slop {
            let ids: PickList = ctx.world().selected().iter().copied().collect();
            if !ids.is_empty() {
                ctx.changes().selection_dragged(&ids, total);
            }
        }
        Transition::to(WaitingToSelect::with_drag_slop(self.drag_slop))
    }

    fn on_cancelled(&mut self, ctx: &mut EditContext<'_>) {
        let undo = self.pressed_at - self.previous;
        if undo != Vec2::ZERO {
            ctx.world().translate_selected(undo);
            self.previous = self.pressed_at;
        }
    }
}
