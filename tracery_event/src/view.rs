// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The conversion seam between screen space and drawing space.

use kurbo::Point;

use crate::ScreenPoint;

/// Maps between device/screen coordinates and drawing coordinates.
///
/// Hosts own the mapping (typically pan plus uniform zoom, but any invertible
/// transform works) and lend it to the interaction layer, which only ever
/// converts through this trait. Implementations must keep the two directions
/// consistent: `to_screen(to_drawing(p))` returns `p` up to floating point
/// error.
pub trait ViewTransform {
    /// Converts a device-space position into drawing space.
    fn to_drawing(&self, screen: ScreenPoint) -> Point;

    /// Converts a drawing-space position into device space.
    fn to_screen(&self, drawing: Point) -> ScreenPoint;
}

/// The identity mapping: one drawing unit per device pixel, origin shared.
///
/// Useful in tests and in hosts that have not grown a pan/zoom layer yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityView;

impl ViewTransform for IdentityView {
    fn to_drawing(&self, screen: ScreenPoint) -> Point {
        Point::new(screen.x, screen.y)
    }

    fn to_screen(&self, drawing: Point) -> ScreenPoint {
        ScreenPoint::new(drawing.x, drawing.y)
    }
}
