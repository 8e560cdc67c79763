// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reaction_popup --heading-base-level=0

//! Understory Reaction Popup: a headless, animated reaction picker.
//!
//! The popup opens from an anchor (typically a "like" button) when it is
//! pressed. The user drags across a row of reactions, the one under the
//! pointer magnifies while its neighbours shrink, and releasing reports the
//! reaction to the host.
//!
//! This crate owns the behaviour and leaves pixels to the host:
//!
//! - [`ReactionSurface`]: the state machine ([`InteractionState`]) fed with
//!   [`PointerEvent`]s, its animations ([`Animation`]), layout and painting.
//! - [`ReactionPopup`]: glue that opens an [`OverlayWindow`] from the
//!   anchor's pointer stream and closes it once the popup has disappeared.
//! - [`Canvas`] and [`TextMeasure`]: the host's renderer and text shaper.
//!
//! Nothing reads a clock: the host calls [`ReactionSurface::advance`] with
//! frame deltas while [`FrameResult::animating`] is set.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use kurbo::{Point, Size};
//! use understory_reaction_config::{CaptionStyle, ImageId, ReactionOptions};
//! use understory_reaction_layout::Anchor;
//! use understory_reaction_popup::{InteractionState, PointerEvent, ReactionSurface};
//!
//! let config = ReactionOptions::new()
//!     .with_reactions((0..4).map(ImageId))
//!     .resolve()
//!     .unwrap();
//! let mut surface =
//!     ReactionSurface::new(config, |_: &str, _: &CaptionStyle| Size::new(40.0, 20.0));
//! surface.set_container_size(Size::new(400.0, 800.0));
//!
//! let anchor = Anchor::new(Point::new(40.0, 600.0), Size::new(120.0, 48.0));
//! surface.show(Point::new(60.0, 620.0), anchor);
//! assert_eq!(surface.state(), Some(InteractionState::Appearing));
//!
//! surface.advance(Duration::from_millis(100));
//! assert_eq!(surface.state(), Some(InteractionState::WaitingSelection));
//!
//! // Drag onto the third reaction.
//! let target = surface.icons()[2].frame().center();
//! surface.on_pointer(PointerEvent::moved(target));
//! assert_eq!(surface.state(), Some(InteractionState::Selected(2)));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod animation;
mod background;
mod canvas;
mod caption;
mod child;
mod host;
mod icon;
mod session;
mod state;
mod surface;

pub use animation::{Animation, AnimationKind, Boundary, IconSizeList, lerp};
pub use background::RoundedBackground;
pub use canvas::{Canvas, TextMeasure};
pub use caption::Caption;
pub use child::{ChildVisuals, PopupChild};
pub use host::{OverlayWindow, ReactionPopup};
pub use icon::{LocationCache, ReactionIcon};
pub use session::{PointerAction, PointerEvent, TouchSession};
pub use state::InteractionState;
pub use surface::{DismissListener, FrameResult, ReactionSurface, SelectionListener};
