// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The state protocol: [`EditState`], [`Transition`], and [`StateKind`].

use alloc::boxed::Box;

use tracery_event::{KeyEventArgs, PointerEventArgs};

use crate::EditContext;

/// Identifies one of the built-in interaction states.
///
/// States are driven through `dyn EditState`, but the set of modes an editor
/// ships is closed and known at design time; the tag lets tests and toolbars
/// ask which state is active without downcasting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// The select-and-drag mode, [`crate::Idle`].
    Idle,
    /// Point placement, [`crate::PlaceMode`] over points.
    AddPoint,
    /// Arc placement, [`crate::PlaceMode`] over arcs.
    AddArc,
    /// The quiescent leaf of [`crate::Idle`].
    WaitingToSelect,
    /// The drag-in-progress leaf of [`crate::Idle`].
    DraggingSelection,
    /// The quiescent leaf of [`crate::PlaceMode`].
    WaitingToPlace,
    /// The placement-in-progress leaf of [`crate::PlaceMode`].
    PlacingEntity,
}

/// The outcome of one handler call.
///
/// A handler either keeps its state or hands over to a fully constructed
/// successor. Successors carry whatever they need in their own fields, so a
/// change is a plain value swap with no handshake and no partially
/// initialized states.
#[derive(Debug)]
pub enum Transition {
    /// Keep the current state.
    DoNothing,
    /// Replace the current state with the boxed successor.
    ChangeState(Box<dyn EditState>),
}

impl Transition {
    /// Shorthand for [`Transition::ChangeState`].
    pub fn to<S: EditState + 'static>(state: S) -> Self {
        Self::ChangeState(Box::new(state))
    }

    /// Applies this transition to a state slot.
    ///
    /// Composites use this on their nested slot; dispatchers on the root
    /// slot. [`Transition::DoNothing`] leaves the slot untouched.
    pub fn apply_to(self, slot: &mut Box<dyn EditState>) {
        if let Self::ChangeState(next) = self {
            *slot = next;
        }
    }

    /// Returns `true` for [`Transition::ChangeState`].
    #[must_use]
    pub fn is_change(&self) -> bool {
        matches!(self, Self::ChangeState(_))
    }
}

/// One interaction state: a whole mode, or a leaf inside one.
///
/// Handlers receive the borrowed [`EditContext`] and immutable event
/// arguments and answer with a [`Transition`]. Every handler has a default
/// no-op body, so a state implements only the events it reacts to. There is
/// no error channel: a condition that prevents the normal reaction resolves
/// to [`Transition::DoNothing`], and world-operation failures are absorbed
/// and reported through [`EditContext::note`].
///
/// # Composites
///
/// A state may own exactly one nested state and forward events to it. The
/// discipline is fixed: the composite handles its own mode-global shortcuts
/// first, then delegates, applies the nested transition to its own nested
/// slot, and reports [`Transition::DoNothing`] upward. Only the composite's
/// shortcut handling may itself change state. Composites expose the chain
/// through [`EditState::nested`], so at any instant exactly one leaf is
/// active.
///
/// # Cancellation
///
/// [`EditState::on_cancelled`] is a protocol event, not a destructor. It
/// fires when a state is about to be abandoned from outside (a mode switch,
/// `Escape` at a composite) and is where transient effects are settled, such
/// as deleting a half-placed entity. It does not fire when a state retires
/// itself by returning [`Transition::ChangeState`]; by then its transient
/// effects are already resolved.
pub trait EditState: core::fmt::Debug {
    /// The tag identifying this state.
    fn kind(&self) -> StateKind;

    /// A button was pressed; the snapshot in `args` includes it.
    fn on_pointer_down(
        &mut self,
        ctx: &mut EditContext<'_>,
        args: &PointerEventArgs,
    ) -> Transition {
        let _ = (ctx, args);
        Transition::DoNothing
    }

    /// A button was released; the snapshot in `args` no longer includes it.
    fn on_pointer_up(&mut self, ctx: &mut EditContext<'_>, args: &PointerEventArgs) -> Transition {
        let _ = (ctx, args);
        Transition::DoNothing
    }

    /// The pointer moved.
    fn on_pointer_move(
        &mut self,
        ctx: &mut EditContext<'_>,
        args: &PointerEventArgs,
    ) -> Transition {
        let _ = (ctx, args);
        Transition::DoNothing
    }

    /// A key went down.
    fn on_key_down(&mut self, ctx: &mut EditContext<'_>, args: &KeyEventArgs) -> Transition {
        let _ = (ctx, args);
        Transition::DoNothing
    }

    /// The state is about to be abandoned; settle transient effects now.
    fn on_cancelled(&mut self, ctx: &mut EditContext<'_>) {
        let _ = ctx;
    }

    /// The nested state, if this state is a composite.
    fn nested(&self) -> Option<&dyn EditState> {
        None
    }
}
