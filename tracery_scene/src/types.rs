// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: entity identifiers and geometry.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Arc, ParamCurveNearest, Point, Shape, Vec2};

/// Flattening tolerance used when measuring distance to an arc.
const ARC_FLATTEN_TOLERANCE: f64 = 0.1;

/// Accuracy passed to the nearest-point solver for curve segments.
const NEAREST_ACCURACY: f64 = 1e-6;

/// Identifier for an entity in a scene.
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the entity is deleted. It consists of a slot index
/// and a generation counter.
///
/// ## Semantics
///
/// - On creation, a fresh slot is allocated with generation `1`.
/// - On deletion, the slot is freed; any existing `EntityId` pointing at that
///   slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `EntityId`.
///
/// Stale ids never alias a different live entity because the generation must
/// match. Interaction code holds `EntityId`s as weak references; the scene is
/// the sole owner of entity lifetime, and every operation taking an id
/// absorbs stale ones by reporting `false` or `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EntityId(pub(crate) u32, pub(crate) u32);

impl EntityId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn slot(self) -> u32 {
        self.0
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Drawable geometry of a scene entity.
///
/// The set is closed and small on purpose: the interaction layer needs to
/// construct, translate, and measure distance to each variant, and editors
/// with richer entity catalogs keep those behind their own [`crate::World`]
/// implementation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// A single point.
    Point(Point),
    /// A circular (or elliptical) arc.
    Arc(Arc),
}

impl Geometry {
    /// Returns this geometry moved by `displacement`.
    #[must_use]
    pub fn translated(self, displacement: Vec2) -> Self {
        match self {
            Self::Point(p) => Self::Point(p + displacement),
            Self::Arc(arc) => Self::Arc(Arc {
                center: arc.center + displacement,
                ..arc
            }),
        }
    }

    /// Distance from `location` to the nearest point of this geometry.
    ///
    /// Arc distance is measured against the flattened curve. Degenerate arcs
    /// (zero radius or zero sweep) fall back to the distance to the center so
    /// the result is always finite.
    #[must_use]
    pub fn distance_to(&self, location: Point) -> f64 {
        match self {
            Self::Point(p) => (location - *p).hypot(),
            Self::Arc(arc) => {
                let mut best_sq = f64::INFINITY;
                for seg in arc.path_segments(ARC_FLATTEN_TOLERANCE) {
                    let nearest = seg.nearest(location, NEAREST_ACCURACY);
                    best_sq = best_sq.min(nearest.distance_sq);
                }
                if best_sq.is_finite() {
                    best_sq.sqrt()
                } else {
                    (location - arc.center).hypot()
                }
            }
        }
    }
}
