// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Scene: the entity storage boundary for interactive editors.
//!
//! Interaction code (see `tracery_mode`) never talks to an editor's document
//! directly. It drives the [`World`] trait: a small, object-safe capability
//! surface for creating, reading, moving, and deleting entities plus
//! selection bookkeeping and distance-based picking. This crate defines that
//! boundary together with its vocabulary ([`EntityId`], [`Geometry`],
//! [`PickList`]) and ships [`Scene`], a compact reference implementation.
//!
//! ## Ids are weak references
//!
//! [`EntityId`] is a generational handle. The world owns entity lifetime;
//! everything else holds ids and must expect them to go stale. All [`World`]
//! operations absorb stale ids by returning `false` or `None`, which is what
//! lets interaction handlers stay free of error channels.
//!
//! ## Pick ordering
//!
//! [`World::entities_under_point`] returns hits ordered nearest first, with
//! equal distances resolved newest first. The ordering is part of the
//! contract: "take the first pick" must be deterministic even for exactly
//! overlapping entities, because selection behavior depends on it.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use tracery_scene::{Geometry, Scene, World};
//!
//! let mut scene = Scene::new();
//! let a = scene.create_entity(Geometry::Point(Point::new(0.0, 0.0)));
//! let b = scene.create_entity(Geometry::Point(Point::new(0.0, 0.0)));
//!
//! // Exactly overlapping entities: the newer one wins the pick.
//! let picks = scene.entities_under_point(Point::new(0.0, 0.0));
//! assert_eq!(picks.as_slice(), &[b, a]);
//!
//! scene.select(b);
//! scene.translate_selected(Vec2::new(4.0, 0.0));
//! assert_eq!(scene.geometry(b), Some(Geometry::Point(Point::new(4.0, 0.0))));
//! // `a` did not move.
//! assert_eq!(scene.geometry(a), Some(Geometry::Point(Point::new(0.0, 0.0))));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scene;
mod selection;
mod types;
mod world;

pub use scene::{DEFAULT_PICK_RADIUS, Scene};
pub use selection::Selection;
pub use types::{EntityId, Geometry};
pub use world::{PickList, World};
