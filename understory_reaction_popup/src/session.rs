// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input and the per-gesture touch session.
//!
//! A session starts when the popup is shown and lives until it is dismissed.
//! It answers two questions the surface asks on every event:
//!
//! - Has every pointer position so far stayed on the anchor? If so, the
//!   first release is the end of the tap that opened the popup and must not
//!   count as a selection.
//! - Should moves still be ignored? Right after opening, the first reaction
//!   sits just above the finger; until the pointer leaves both the anchor and
//!   the strip below that reaction, nothing is selected.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_reaction_layout::Anchor;
//! use understory_reaction_popup::TouchSession;
//!
//! let anchor = Anchor::new(Point::new(0.0, 100.0), Size::new(80.0, 40.0));
//! let mut session = TouchSession::new(Point::new(20.0, 120.0), anchor);
//!
//! assert!(session.track(Point::new(30.0, 130.0)));
//! // The release of the opening tap is consumed once.
//! assert!(session.consume_tap());
//! assert!(!session.consume_tap());
//! ```

use kurbo::Point;
use understory_reaction_layout::Anchor;

/// Kind of pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Pointer pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// Gesture cancelled by the platform.
    Cancel,
}

/// A pointer event in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Kind of event.
    pub action: PointerAction,
    /// Pointer position in screen coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Creates a pointer event.
    #[must_use]
    pub const fn new(action: PointerAction, position: Point) -> Self {
        Self { action, position }
    }

    /// Pointer pressed at `position`.
    #[must_use]
    pub const fn down(position: Point) -> Self {
        Self::new(PointerAction::Down, position)
    }

    /// Pointer moved to `position`.
    #[must_use]
    pub const fn moved(position: Point) -> Self {
        Self::new(PointerAction::Move, position)
    }

    /// Pointer released at `position`.
    #[must_use]
    pub const fn up(position: Point) -> Self {
        Self::new(PointerAction::Up, position)
    }

    /// Gesture cancelled at `position`.
    #[must_use]
    pub const fn cancel(position: Point) -> Self {
        Self::new(PointerAction::Cancel, position)
    }
}

/// Transient state of the gesture that opened the popup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchSession {
    first_touch: Point,
    anchor: Anchor,
    always_inside_anchor: bool,
    ignoring_first_reaction: bool,
}

impl TouchSession {
    /// Starts a session for a gesture that began at `first_touch` on `anchor`.
    #[must_use]
    pub fn new(first_touch: Point, anchor: Anchor) -> Self {
        Self {
            first_touch,
            anchor,
            always_inside_anchor: true,
            ignoring_first_reaction: true,
        }
    }

    /// Screen point that opened the popup.
    #[must_use]
    pub fn first_touch(&self) -> Point {
        self.first_touch
    }

    /// Anchor bounds captured when the gesture started.
    #[must_use]
    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    /// Records a pointer position; returns whether the pointer has stayed on
    /// the anchor for the whole gesture.
    ///
    /// Once the pointer leaves the anchor the flag stays cleared.
    pub fn track(&mut self, position: Point) -> bool {
        self.always_inside_anchor = self.always_inside_anchor && self.anchor.contains(position);
        self.always_inside_anchor
    }

    /// Consumes the release of the opening tap.
    ///
    /// Returns `true` (and clears the flag) if the pointer never left the
    /// anchor, meaning the release must be swallowed.
    pub fn consume_tap(&mut self) -> bool {
        core::mem::replace(&mut self.always_inside_anchor, false)
    }

    /// Returns `true` while moves are still ignored.
    #[must_use]
    pub fn is_ignoring_first_reaction(&self) -> bool {
        self.ignoring_first_reaction
    }

    /// Updates the ignore flag for a down/move event and returns it.
    ///
    /// `below_first_reaction` tells whether the pointer is in the strip
    /// directly below the first reaction. The flag survives only while that
    /// holds or the pointer has never left the anchor; once cleared it stays
    /// cleared for the rest of the session.
    pub fn keep_ignoring_first_reaction(&mut self, below_first_reaction: bool) -> bool {
        self.ignoring_first_reaction = self.ignoring_first_reaction
            && (below_first_reaction || self.always_inside_anchor);
        self.ignoring_first_reaction
    }
}
