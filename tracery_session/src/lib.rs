// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Session: the dispatcher between a host event loop and the
//! interaction states.
//!
//! A [`Session`] owns the document (any [`tracery_scene::World`]), a
//! [`tracery_event::ViewTransform`], the host sinks, and the active
//! [`tracery_mode::EditState`]. The host forwards raw input through the
//! session's entry points; the session maintains the button snapshot,
//! converts screen positions into drawing space, assembles a fresh
//! [`tracery_mode::EditContext`] per event, applies the resulting
//! transition, and tracks which entity is hovered. Every entry point answers
//! with a redraw flag.
//!
//! Everything runs on the caller's thread; one event is fully handled before
//! the next one starts.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use tracery_event::{PointerButtons, ScreenPoint};
//! use tracery_scene::{Geometry, Scene, World};
//! use tracery_session::{PanZoomView, Session};
//!
//! let mut scene = Scene::new();
//! let entity = scene.create_entity(Geometry::Point(Point::new(5.0, 5.0)));
//!
//! // Drawing space is shown at 2x, so the entity sits at screen (10, 10).
//! let view = PanZoomView::new().with_zoom(2.0);
//! let mut session = Session::new(scene, view);
//!
//! // Press on the entity and drag 6 pixels right: 3 drawing units.
//! session.pointer_down(PointerButtons::LEFT, ScreenPoint::new(10.0, 10.0));
//! session.pointer_move(ScreenPoint::new(16.0, 10.0));
//! session.pointer_up(PointerButtons::LEFT, ScreenPoint::new(16.0, 10.0));
//!
//! assert_eq!(
//!     session.world().geometry(entity),
//!     Some(Geometry::Point(Point::new(8.0, 5.0)))
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;

#[cfg(feature = "log")]
use log::debug;

use tracery_event::{
    HoverState, KeyEventArgs, PointerButtons, PointerEventArgs, ScreenPoint, ViewTransform,
};
#[cfg(feature = "log")]
use tracery_mode::Diagnostic;
use tracery_mode::{
    ChangeSink, DiagnosticSink, EditContext, EditState, Idle, IgnoreDiagnostics, NullChanges,
    StateKind, Transition,
};
use tracery_scene::{EntityId, World};

mod view;

pub use view::PanZoomView;

/// Routes absorbed diagnostics to the `log` crate at debug level.
#[cfg(feature = "log")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogDiagnostics;

#[cfg(feature = "log")]
impl DiagnosticSink for LogDiagnostics {
    fn note(&mut self, diagnostic: Diagnostic) {
        debug!("Absorbed interaction diagnostic: {diagnostic:?}");
    }
}

/// Owns one editing surface's interaction state and dispatches its events.
///
/// The sink parameters default to the do-nothing implementations, so a
/// minimal host only supplies a world and a view transform.
///
/// Direct access to the world between events is available through
/// [`Session::world_mut`]; the session re-checks its hover bookkeeping on
/// the next event, so external edits are safe as long as they happen outside
/// the entry points.
pub struct Session<W, V, C = NullChanges, D = IgnoreDiagnostics>
where
    W: World,
    V: ViewTransform,
    C: ChangeSink,
    D: DiagnosticSink,
{
    world: W,
    view: V,
    changes: C,
    diagnostics: D,
    state: Box<dyn EditState>,
    buttons: PointerButtons,
    hover: HoverState<EntityId>,
}

impl<W, V, C, D> core::fmt::Debug for Session<W, V, C, D>
where
    W: World,
    V: ViewTransform,
    C: ChangeSink,
    D: DiagnosticSink,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("buttons", &self.buttons)
            .field("hover", &self.hover)
            .finish_non_exhaustive()
    }
}

impl<W, V> Session<W, V>
where
    W: World,
    V: ViewTransform,
{
    /// Creates a session with the do-nothing sinks, starting in [`Idle`].
    pub fn new(world: W, view: V) -> Self {
        Self::with_sinks(world, view, NullChanges, IgnoreDiagnostics)
    }
}

impl<W, V, C, D> Session<W, V, C, D>
where
    W: World,
    V: ViewTransform,
    C: ChangeSink,
    D: DiagnosticSink,
{
    /// Creates a session with the given sinks, starting in [`Idle`].
    pub fn with_sinks(world: W, view: V, changes: C, diagnostics: D) -> Self {
        Self {
            world,
            view,
            changes,
            diagnostics,
            state: Box::new(Idle::new()),
            buttons: PointerButtons::empty(),
            hover: HoverState::new(),
        }
    }

    /// A button went down at `screen`. Returns whether to repaint.
    ///
    /// The snapshot handed to the state includes the new button.
    pub fn pointer_down(&mut self, button: PointerButtons, screen: ScreenPoint) -> bool {
        self.buttons.insert(button);
        let args = self.pointer_args(screen);
        let redraw = self.dispatch(|state, ctx| state.on_pointer_down(ctx, &args));
        let pruned = self.prune_hover();
        redraw || pruned
    }

    /// A button went up at `screen`. Returns whether to repaint.
    ///
    /// The snapshot handed to the state no longer includes the button, which
    /// is how states observe the falling edge.
    pub fn pointer_up(&mut self, button: PointerButtons, screen: ScreenPoint) -> bool {
        self.buttons.remove(button);
        let args = self.pointer_args(screen);
        let redraw = self.dispatch(|state, ctx| state.on_pointer_up(ctx, &args));
        let pruned = self.prune_hover();
        redraw || pruned
    }

    /// The pointer moved to `screen`. Returns whether to repaint.
    ///
    /// Besides dispatching, this refreshes the hover sample from the world's
    /// pick order; a hover edge forces a repaint even when the state
    /// suppressed one.
    pub fn pointer_move(&mut self, screen: ScreenPoint) -> bool {
        let args = self.pointer_args(screen);
        let redraw = self.dispatch(|state, ctx| state.on_pointer_move(ctx, &args));
        let sample = self
            .world
            .entities_under_point(args.drawing_location)
            .first()
            .copied();
        let edges = !self.hover.update(sample).is_empty();
        redraw || edges
    }

    /// A key went down. Returns whether to repaint.
    pub fn key_down(&mut self, args: KeyEventArgs) -> bool {
        let redraw = self.dispatch(|state, ctx| state.on_key_down(ctx, &args));
        let pruned = self.prune_hover();
        redraw || pruned
    }

    /// Replaces the active mode from outside the event flow, a toolbar
    /// click, say. Always repaints.
    ///
    /// The outgoing state is cancelled first, so in-flight work (a
    /// half-placed entity, a drag) is settled before the replacement takes
    /// over.
    pub fn change_mode(&mut self, next: impl EditState + 'static) -> bool {
        let Self {
            world,
            view,
            changes,
            diagnostics,
            state,
            ..
        } = self;
        let mut ctx = EditContext::new(world, &*view, changes, diagnostics);
        state.on_cancelled(&mut ctx);
        *state = Box::new(next);
        self.prune_hover();
        true
    }

    /// The document.
    #[must_use]
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable document access for edits outside the event flow.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// The view transform.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable view access; the host repaints after changing it.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The commit sink.
    #[must_use]
    pub fn changes(&self) -> &C {
        &self.changes
    }

    /// Mutable access to the commit sink, for hosts that drain it.
    pub fn changes_mut(&mut self) -> &mut C {
        &mut self.changes
    }

    /// The diagnostic sink.
    #[must_use]
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// The currently held buttons.
    #[must_use]
    pub fn buttons(&self) -> PointerButtons {
        self.buttons
    }

    /// The entity under the pointer as of the last move, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<EntityId> {
        self.hover.current()
    }

    /// The active mode's tag.
    #[must_use]
    pub fn state_kind(&self) -> StateKind {
        self.state.kind()
    }

    /// The active leaf's tag, found by walking the nested chain.
    #[must_use]
    pub fn leaf_kind(&self) -> StateKind {
        let mut state: &dyn EditState = self.state.as_ref();
        while let Some(nested) = state.nested() {
            state = nested;
        }
        state.kind()
    }

    fn pointer_args(&self, screen: ScreenPoint) -> PointerEventArgs {
        PointerEventArgs {
            drawing_location: self.view.to_drawing(screen),
            screen_location: screen,
            buttons: self.buttons,
        }
    }

    fn dispatch(
        &mut self,
        f: impl FnOnce(&mut Box<dyn EditState>, &mut EditContext<'_>) -> Transition,
    ) -> bool {
        let Self {
            world,
            view,
            changes,
            diagnostics,
            state,
            ..
        } = self;
        let mut ctx = EditContext::new(world, &*view, changes, diagnostics);
        let next = f(state, &mut ctx);
        let suppressed = ctx.redraw_suppressed();
        let changed = next.is_change();
        next.apply_to(state);
        changed || !suppressed
    }

    /// Drops the hover when the hovered entity no longer exists, so the
    /// session never reports a dead entity as hovered.
    fn prune_hover(&mut self) -> bool {
        match self.hover.current() {
            Some(id) if self.world.geometry(id).is_none() => !self.hover.clear().is_empty(),
            _ => false,
        }
    }
}
