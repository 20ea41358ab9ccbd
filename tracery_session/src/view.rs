// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A pan-plus-uniform-zoom view transform.

use kurbo::{Point, Vec2};

use tracery_event::{ScreenPoint, ViewTransform};

/// Zoom bounds. Outside this range coordinate round trips lose too much
/// precision to be useful.
const MIN_ZOOM: f64 = 1e-3;
const MAX_ZOOM: f64 = 1e3;

/// A [`ViewTransform`] composed of a screen-space pan and a uniform zoom.
///
/// The mapping is `screen = drawing * zoom + pan`, with `zoom` in screen
/// pixels per drawing unit. Zoom is clamped to a range where the two
/// directions stay numerically well behaved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomView {
    pan: Vec2,
    zoom: f64,
}

impl PanZoomView {
    /// The untransformed view: no pan, unit zoom.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Builder-style pan replacement.
    #[must_use]
    pub fn with_pan(mut self, pan: Vec2) -> Self {
        self.set_pan(pan);
        self
    }

    /// Builder-style zoom replacement, clamped to the supported range.
    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.set_zoom(zoom);
        self
    }

    /// The pan, in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Sets the pan, in screen pixels.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// The zoom factor, in screen pixels per drawing unit.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Scales the zoom by `factor` while keeping `fixed` over the same
    /// drawing location, the usual scroll-wheel zoom.
    pub fn zoom_by(&mut self, factor: f64, fixed: ScreenPoint) {
        let anchor = self.to_drawing(fixed);
        self.set_zoom(self.zoom * factor);
        self.pan = Vec2::new(
            fixed.x - anchor.x * self.zoom,
            fixed.y - anchor.y * self.zoom,
        );
    }
}

impl Default for PanZoomView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform for PanZoomView {
    fn to_drawing(&self, screen: ScreenPoint) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    fn to_screen(&self, drawing: Point) -> ScreenPoint {
        ScreenPoint::new(
            drawing.x * self.zoom + self.pan.x,
            drawing.y * self.zoom + self.pan.y,
        )
    }
}
