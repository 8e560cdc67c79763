// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use peniko::Color;

use crate::{PopupGravity, ReactionItem};

/// Caption text for a reaction index, or `None` for no caption.
///
/// The provider is consulted once each time a reaction finishes magnifying.
pub type CaptionProvider = Arc<dyn Fn(usize) -> Option<String>>;

/// Appearance of the caption shown above the magnified reaction.
#[derive(Copy, Clone, Debug)]
pub struct CaptionStyle {
    /// Text color.
    pub text_color: Color,
    /// Fill of the pill drawn behind the text.
    pub background: Color,
    /// Space between the text and the left/right edges of its background.
    pub horizontal_padding: f64,
    /// Space between the text and the top/bottom edges of its background.
    pub vertical_padding: f64,
    /// Text size in logical pixels.
    pub text_size: f64,
}

/// Validated, immutable reaction picker settings.
///
/// Produced by [`ReactionOptions::resolve`](crate::ReactionOptions::resolve).
/// Cloning is cheap: reactions are copied, the caption provider is shared.
#[derive(Clone)]
pub struct ReactionsConfig {
    pub(crate) reactions: Vec<ReactionItem>,
    pub(crate) reaction_size: f64,
    pub(crate) horizontal_margin: f64,
    pub(crate) vertical_margin: f64,
    pub(crate) popup_gravity: PopupGravity,
    pub(crate) popup_margin: f64,
    pub(crate) background_color: Color,
    pub(crate) corner_radius: Option<f64>,
    pub(crate) caption_provider: Option<CaptionProvider>,
    pub(crate) caption_style: CaptionStyle,
    pub(crate) animation_duration: Duration,
}

impl ReactionsConfig {
    /// Reactions in display order, left to right.
    #[must_use]
    pub fn reactions(&self) -> &[ReactionItem] {
        &self.reactions
    }

    /// Number of reactions; always at least two.
    #[must_use]
    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    /// Size of a resting ("medium") reaction icon.
    #[must_use]
    pub fn reaction_size(&self) -> f64 {
        self.reaction_size
    }

    /// Space between the popup edges and the first/last icon.
    #[must_use]
    pub fn horizontal_margin(&self) -> f64 {
        self.horizontal_margin
    }

    /// Space between the popup top/bottom edges and the resting icons.
    #[must_use]
    pub fn vertical_margin(&self) -> f64 {
        self.vertical_margin
    }

    /// Horizontal placement policy.
    #[must_use]
    pub fn popup_gravity(&self) -> PopupGravity {
        self.popup_gravity
    }

    /// Inset from the container edges used by screen-relative gravities.
    #[must_use]
    pub fn popup_margin(&self) -> f64 {
        self.popup_margin
    }

    /// Fill color of the popup background, alpha included.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Explicit corner radius of the background.
    ///
    /// `None` means a pill: half of the popup height.
    #[must_use]
    pub fn corner_radius(&self) -> Option<f64> {
        self.corner_radius
    }

    /// Caption appearance.
    #[must_use]
    pub fn caption_style(&self) -> &CaptionStyle {
        &self.caption_style
    }

    /// Returns `true` when a caption provider was configured.
    #[must_use]
    pub fn has_captions(&self) -> bool {
        self.caption_provider.is_some()
    }

    /// Caption text for the reaction at `index`, if any.
    #[must_use]
    pub fn caption_for(&self, index: usize) -> Option<String> {
        self.caption_provider
            .as_ref()
            .and_then(|provider| provider(index))
    }

    /// Duration of every popup animation.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }
}

impl fmt::Debug for ReactionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionsConfig")
            .field("reactions", &self.reactions)
            .field("reaction_size", &self.reaction_size)
            .field("horizontal_margin", &self.horizontal_margin)
            .field("vertical_margin", &self.vertical_margin)
            .field("popup_gravity", &self.popup_gravity)
            .field("popup_margin", &self.popup_margin)
            .field("background_color", &self.background_color)
            .field("corner_radius", &self.corner_radius)
            .field("caption_provider", &self.caption_provider.is_some())
            .field("caption_style", &self.caption_style)
            .field("animation_duration", &self.animation_duration)
            .finish()
    }
}
