// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reaction_config --heading-base-level=0

//! Understory Reaction Config: settings for a reaction picker popup.
//!
//! A reaction picker is a small popup anchored to a button: a rounded
//! background with one row of reaction icons, one of which magnifies under
//! the pointer, plus an optional caption above the magnified icon.
//!
//! This crate holds the data the picker is built from:
//!
//! - [`ReactionItem`]: one reaction, an opaque [`ImageId`] plus a [`ScaleMode`].
//! - [`PopupGravity`]: the horizontal placement policy of the popup.
//! - [`CaptionStyle`]: colors, padding and text size of the caption.
//! - [`ReactionOptions`]: a plain options struct whose fields are all optional.
//! - [`ReactionsConfig`]: the validated, immutable result of
//!   [`ReactionOptions::resolve`].
//!
//! Unset options are filled from defaults only when resolving, so options
//! that depend on each other (the vertical margin and the popup margin both
//! follow the horizontal margin) stay consistent however they were set.
//!
//! ## Example
//!
//! ```rust
//! use understory_reaction_config::{ImageId, PopupGravity, ReactionItem, ReactionOptions};
//!
//! let config = ReactionOptions::new()
//!     .with_reactions((1..=6).map(|id| ReactionItem::new(ImageId(id))))
//!     .with_reaction_size(40.0)
//!     .with_horizontal_margin(12.0)
//!     .with_popup_gravity(PopupGravity::ParentLeft)
//!     .with_reaction_texts(["Like", "Love", "Haha", "Wow", "Sad", "Angry"])
//!     .resolve()
//!     .unwrap();
//!
//! assert_eq!(config.reaction_count(), 6);
//! // The vertical margin follows the horizontal one unless set explicitly.
//! assert_eq!(config.vertical_margin(), 12.0);
//! assert_eq!(config.caption_for(1).as_deref(), Some("Love"));
//! assert_eq!(config.caption_for(6), None);
//! ```
//!
//! Resolving fails fast on configurations the picker cannot lay out:
//!
//! ```rust
//! use understory_reaction_config::{ConfigError, ReactionOptions};
//!
//! assert_eq!(ReactionOptions::new().resolve().unwrap_err(), ConfigError::NoReactions);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod error;
mod item;
mod options;

pub use config::{CaptionProvider, CaptionStyle, ReactionsConfig};
pub use error::ConfigError;
pub use item::{ImageId, PopupGravity, ReactionItem, ScaleMode};
pub use options::ReactionOptions;

/// Re-exported so dependants can name colors without depending on Peniko.
pub use peniko::Color;
