// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reaction_layout --heading-base-level=0

//! Understory Reaction Layout: geometry of a reaction picker popup.
//!
//! Everything here is a pure function of the configuration and of a few
//! host-provided measurements (anchor bounds, container size, the touch
//! point that opened the popup):
//!
//! - [`PopupMetrics`]: popup size, divider spacing, corner radius and the
//!   three icon sizes ([`IconSizes`], indexed by [`SizeMode`]).
//! - [`place_popup`] / [`PopupGeometry`]: where the popup goes on screen for
//!   a given [`PopupGravity`](understory_reaction_config::PopupGravity).
//! - [`PopupGeometry::row_frames`]: frames of the icon row for any set of
//!   current icon sizes.
//! - [`HitSlop`] / [`hit_test`]: the generous per-icon hit areas used while
//!   dragging across the row.
//!
//! ## Row width stability
//!
//! The medium size is the configured reaction size and the large size is
//! twice that. The small size is solved so that a row with one large icon
//! and every other icon small is exactly as wide as a row of medium icons,
//! so magnifying a reaction never changes the width of the row.
//!
//! ```rust
//! use understory_reaction_config::{ImageId, ReactionOptions};
//! use understory_reaction_layout::{PopupMetrics, SizeMode};
//!
//! let config = ReactionOptions::new()
//!     .with_reactions((0..4).map(ImageId))
//!     .with_reaction_size(48.0)
//!     .with_horizontal_margin(16.0)
//!     .resolve()
//!     .unwrap();
//! let metrics = PopupMetrics::new(&config);
//!
//! assert_eq!(metrics.divider, 8.0);
//! assert_eq!(metrics.size.width, 248.0);
//! assert_eq!(metrics.icons.size(SizeMode::Large), 96.0);
//! assert_eq!(metrics.icons.size(SizeMode::Small), 32.0);
//!
//! let resting = metrics.row_width(metrics.target_sizes(None));
//! let magnified = metrics.row_width(metrics.target_sizes(Some(2)));
//! assert_eq!(resting, magnified);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

mod hit;
mod metrics;
mod placement;

pub use hit::{HitSlop, hit_test};
pub use metrics::{IconSizes, PopupMetrics, SizeMode};
pub use placement::{Anchor, PopupGeometry, place_popup};
