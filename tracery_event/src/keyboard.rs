// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard event arguments.

/// Semantic identity of a pressed key.
///
/// Only keys the interaction layer assigns meaning to are represented here.
/// Everything else reaches handlers with [`KeyEventArgs::key`] set to `None`
/// and is expected to be ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// The Escape key.
    Escape,
    /// The Delete (or forward delete) key.
    Delete,
    /// A printable character key. Hosts pass the lowercase form for letters
    /// so keyboard shortcuts are case-insensitive; the Shift modifier is
    /// reported separately in [`KeyEventArgs`].
    Char(char),
}

/// Immutable arguments describing one key-down event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyEventArgs {
    /// Whether a Shift modifier was held.
    pub shift: bool,
    /// Whether a Control modifier was held.
    pub ctrl: bool,
    /// The semantic key, or `None` when the physical key has no mapping.
    pub key: Option<KeyCode>,
}

impl KeyEventArgs {
    /// Arguments for `key` pressed without modifiers.
    #[must_use]
    pub const fn plain(key: KeyCode) -> Self {
        Self {
            shift: false,
            ctrl: false,
            key: Some(key),
        }
    }
}
