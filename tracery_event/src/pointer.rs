// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event arguments: button snapshots and the two coordinate spaces.

use kurbo::Point;

bitflags::bitflags! {
    /// Pointer buttons held down at the instant an event was captured.
    ///
    /// Each event carries an immutable snapshot. A press snapshot includes
    /// the button that just went down; a release snapshot no longer contains
    /// the button that just went up, so the falling edge of a button is
    /// observable directly in the snapshot.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// The primary (usually left) button.
        const LEFT   = 0b0000_0001;
        /// The secondary (usually right) button.
        const RIGHT  = 0b0000_0010;
        /// The middle button or wheel press.
        const MIDDLE = 0b0000_0100;
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::empty()
    }
}

/// A position in device/screen coordinates, in physical pixels.
///
/// This is deliberately not a [`kurbo::Point`]. Drawing-space and
/// screen-space positions must never mix, and keeping the device side a
/// distinct type means the only way between the spaces is an explicit
/// [`ViewTransform`](crate::ViewTransform) conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal position in pixels, growing rightward.
    pub x: f64,
    /// Vertical position in pixels, growing downward.
    pub y: f64,
}

impl ScreenPoint {
    /// The screen origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a screen point from pixel coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for ScreenPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Immutable arguments describing one pointer event.
///
/// `screen_location` is the raw device position and `drawing_location` is
/// that same position mapped through the active
/// [`ViewTransform`](crate::ViewTransform); both describe the same physical
/// instant, as does the [`PointerButtons`] snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEventArgs {
    /// Position in drawing (model) coordinates.
    pub drawing_location: Point,
    /// Position in device coordinates.
    pub screen_location: ScreenPoint,
    /// Buttons held at this instant.
    pub buttons: PointerButtons,
}
