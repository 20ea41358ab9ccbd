// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: enter/leave edges for the item under the pointer.

use smallvec::SmallVec;

/// A hover transition produced by [`HoverState::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The rising edge: `K` became hovered.
    Enter(K),
    /// The falling edge: `K` stopped being hovered.
    Leave(K),
}

/// Edges produced by a single update: at most one leave and one enter.
pub type HoverEvents<K> = SmallVec<[HoverEvent<K>; 2]>;

/// Tracks which key (if any) the pointer is over and reports edge crossings.
///
/// Feed the topmost pick result on every pointer move; identical consecutive
/// samples produce no events. When hover moves directly from one key to
/// another, the leave is emitted before the enter so observers always see a
/// consistent ordering.
#[derive(Clone, Copy, Debug)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + PartialEq> HoverState<K> {
    /// Returns the currently hovered key, if any.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Feeds the latest pick result and returns the edges crossed.
    pub fn update(&mut self, sample: Option<K>) -> HoverEvents<K> {
        let mut events = HoverEvents::new();
        if self.current == sample {
            return events;
        }
        if let Some(old) = self.current {
            events.push(HoverEvent::Leave(old));
        }
        if let Some(new) = sample {
            events.push(HoverEvent::Enter(new));
        }
        self.current = sample;
        events
    }

    /// Drops any current hover, returning the leave edge if one was crossed.
    ///
    /// Useful when the pointer exits the surface entirely and no further
    /// samples will arrive.
    pub fn clear(&mut self) -> HoverEvents<K> {
        self.update(None)
    }
}
