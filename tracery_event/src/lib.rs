// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Event: event argument types for interactive editors.
//!
//! This crate defines the immutable value types that describe one input event
//! to the rest of the Tracery stack, plus a small hover tracker. It does not
//! read platform input itself; hosts translate their windowing events into
//! these types and feed them to a dispatcher such as `tracery_session`.
//!
//! ## Two coordinate spaces
//!
//! Every pointer event carries its position twice:
//!
//! - `drawing_location`, a [`kurbo::Point`] in drawing (model) coordinates,
//!   which is what interaction code almost always wants.
//! - `screen_location`, a [`ScreenPoint`] in device coordinates, for the rare
//!   consumer that needs raw pixels (for example pixel-space snap radii).
//!
//! [`ScreenPoint`] is deliberately a distinct type rather than an alias: the
//! two spaces cannot be mixed by accident, and the only way between them is a
//! [`ViewTransform`] supplied by the host. Both fields of one event describe
//! the same physical instant.
//!
//! ## Button snapshots
//!
//! [`PointerButtons`] is a per-event snapshot of the held buttons. A press
//! event's snapshot includes the button that just went down; a release
//! event's snapshot no longer contains the button that went up. A handler
//! that wants "the primary button was just released" therefore checks that
//! the up event's snapshot does not contain [`PointerButtons::LEFT`]: the
//! falling edge of the button is visible in the snapshot itself.
//!
//! ## Hover edges
//!
//! [`HoverState`] turns a stream of "topmost thing under the pointer" samples
//! into enter/leave transitions:
//!
//! ```rust
//! use tracery_event::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//!
//! // Pointer moves over item 7.
//! let events = hover.update(Some(7_u32));
//! assert_eq!(events.as_slice(), &[HoverEvent::Enter(7)]);
//!
//! // Pointer moves directly onto item 9: leave comes before enter.
//! let events = hover.update(Some(9));
//! assert_eq!(
//!     events.as_slice(),
//!     &[HoverEvent::Leave(7), HoverEvent::Enter(9)],
//! );
//!
//! // Same sample again: no edges.
//! assert!(hover.update(Some(9)).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hover;
mod keyboard;
mod pointer;
mod view;

pub use hover::{HoverEvent, HoverEvents, HoverState};
pub use keyboard::{KeyCode, KeyEventArgs};
pub use pointer::{PointerButtons, PointerEventArgs, ScreenPoint};
pub use view::{IdentityView, ViewTransform};
