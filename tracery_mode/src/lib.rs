// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Mode: nested interaction states for pointer-and-keyboard editors.
//!
//! This crate is the interaction core of Tracery: a small protocol
//! ([`EditState`], [`Transition`], [`EditContext`]) plus the built-in modes
//! that speak it. The shipped modes cover selecting and dragging entities
//! ([`Idle`]) and placing new ones ([`PlaceMode`]); hosts drive them through
//! `tracery_session` or a dispatcher of their own.
//!
//! ## The protocol
//!
//! A state handles one event at a time. Each handler borrows an
//! [`EditContext`] assembled for that single call (the document behind
//! [`tracery_scene::World`], the [`tracery_event::ViewTransform`], a
//! [`ChangeSink`] for commit points, a [`DiagnosticSink`] for absorbed
//! failures) and answers with a [`Transition`]: keep going, or hand over to
//! a fully constructed successor. Handlers have no error channel; anything
//! that prevents the normal reaction degrades to a no-op, optionally noting
//! a [`Diagnostic`].
//!
//! Modes are composites: they own one nested leaf state, intercept their
//! mode-global shortcuts, and forward everything else downward, absorbing
//! the leaf's transitions into their nested slot. At any instant exactly one
//! leaf is active, and [`EditState::nested`] exposes the chain.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use tracery_event::{IdentityView, PointerButtons, PointerEventArgs, ScreenPoint};
//! use tracery_mode::{EditContext, EditState, Idle, IgnoreDiagnostics, NullChanges};
//! use tracery_scene::{Geometry, Scene, World};
//!
//! let mut scene = Scene::new();
//! let entity = scene.create_entity(Geometry::Point(Point::new(5.0, 5.0)));
//!
//! let view = IdentityView;
//! let mut changes = NullChanges;
//! let mut diagnostics = IgnoreDiagnostics;
//! let mut mode = Idle::new();
//!
//! // Press on the entity: the nested leaf selects it and starts a drag.
//! // Composites absorb their leaf's transitions, so the mode itself
//! // reports no change.
//! let press = PointerEventArgs {
//!     drawing_location: Point::new(5.0, 5.0),
//!     screen_location: ScreenPoint::new(5.0, 5.0),
//!     buttons: PointerButtons::LEFT,
//! };
//! let mut ctx = EditContext::new(&mut scene, &view, &mut changes, &mut diagnostics);
//! assert!(!mode.on_pointer_down(&mut ctx, &press).is_change());
//! assert!(mode.is_dragging());
//! assert_eq!(scene.selected(), &[entity]);
//!
//! // Drag to (9, 5): the entity follows, step by step.
//! let drag = PointerEventArgs {
//!     drawing_location: Point::new(9.0, 5.0),
//!     ..press
//! };
//! let mut ctx = EditContext::new(&mut scene, &view, &mut changes, &mut diagnostics);
//! assert!(!mode.on_pointer_move(&mut ctx, &drag).is_change());
//! assert_eq!(scene.geometry(entity), Some(Geometry::Point(Point::new(9.0, 5.0))));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod context;
mod idle;
mod place;
mod state;

pub use context::{
    ChangeSink, Diagnostic, DiagnosticSink, EditContext, IgnoreDiagnostics, NullChanges,
};
pub use idle::{DEFAULT_DRAG_SLOP, DraggingSelection, Idle, WaitingToSelect};
pub use place::{EntityKind, PlaceMode, PlacingEntity, WaitingToPlace};
pub use state::{EditState, StateKind, Transition};
