// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use peniko::Color;

use crate::{
    CaptionProvider, CaptionStyle, ConfigError, PopupGravity, ReactionItem, ReactionsConfig,
};

const DEFAULT_REACTION_SIZE: f64 = 48.0;
const DEFAULT_HORIZONTAL_MARGIN: f64 = 16.0;
const DEFAULT_TEXT_SIZE: f64 = 14.0;
const DEFAULT_TEXT_HORIZONTAL_PADDING: f64 = 8.0;
const DEFAULT_TEXT_VERTICAL_PADDING: f64 = 4.0;
const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(100);

/// Reaction picker options, all optional except the reactions themselves.
///
/// Fields left as `None` are filled with defaults by [`resolve`](Self::resolve):
///
/// | Option | Default |
/// | --- | --- |
/// | `reaction_size` | 48 |
/// | `horizontal_margin` | 16 |
/// | `vertical_margin` | `horizontal_margin` |
/// | `popup_gravity` | [`PopupGravity::Default`] |
/// | `popup_margin` | `horizontal_margin` |
/// | `background_color` | white, alpha 230/255 |
/// | `corner_radius` | half of the popup height |
/// | `caption_text_color` | white |
/// | `caption_background` | black, alpha 170/255 |
/// | `caption_horizontal_padding` / `caption_vertical_padding` | 8 / 4 |
/// | `caption_text_size` | 14 |
/// | `animation_duration` | 100 ms |
#[derive(Clone, Default)]
pub struct ReactionOptions {
    /// Reactions in display order. Must hold at least two items.
    pub reactions: Vec<ReactionItem>,
    /// Size of a resting reaction icon.
    pub reaction_size: Option<f64>,
    /// Space between the popup edges and the first/last icon.
    pub horizontal_margin: Option<f64>,
    /// Space between the popup top/bottom edges and the resting icons.
    pub vertical_margin: Option<f64>,
    /// Horizontal placement policy.
    pub popup_gravity: Option<PopupGravity>,
    /// Inset from the container edges used by screen-relative gravities.
    pub popup_margin: Option<f64>,
    /// Fill color of the popup background.
    pub background_color: Option<Color>,
    /// Corner radius of the popup background.
    pub corner_radius: Option<f64>,
    /// Caption text provider.
    pub caption_provider: Option<CaptionProvider>,
    /// Caption text color.
    pub caption_text_color: Option<Color>,
    /// Caption background fill.
    pub caption_background: Option<Color>,
    /// Caption padding on the left/right.
    pub caption_horizontal_padding: Option<f64>,
    /// Caption padding on the top/bottom.
    pub caption_vertical_padding: Option<f64>,
    /// Caption text size.
    pub caption_text_size: Option<f64>,
    /// Duration of the popup animations.
    pub animation_duration: Option<Duration>,
}

impl ReactionOptions {
    /// Creates options with no reactions and every other field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the reactions.
    #[must_use]
    pub fn with_reactions<I>(mut self, reactions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ReactionItem>,
    {
        self.reactions = reactions.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one reaction.
    #[must_use]
    pub fn with_reaction(mut self, reaction: impl Into<ReactionItem>) -> Self {
        self.reactions.push(reaction.into());
        self
    }

    /// Sets the size of a resting reaction icon.
    #[must_use]
    pub fn with_reaction_size(mut self, size: f64) -> Self {
        self.reaction_size = Some(size);
        self
    }

    /// Sets the horizontal margin.
    #[must_use]
    pub fn with_horizontal_margin(mut self, margin: f64) -> Self {
        self.horizontal_margin = Some(margin);
        self
    }

    /// Sets the vertical margin.
    #[must_use]
    pub fn with_vertical_margin(mut self, margin: f64) -> Self {
        self.vertical_margin = Some(margin);
        self
    }

    /// Sets the horizontal placement policy.
    #[must_use]
    pub fn with_popup_gravity(mut self, gravity: PopupGravity) -> Self {
        self.popup_gravity = Some(gravity);
        self
    }

    /// Sets the inset used by screen-relative gravities.
    #[must_use]
    pub fn with_popup_margin(mut self, margin: f64) -> Self {
        self.popup_margin = Some(margin);
        self
    }

    /// Sets the popup background color, alpha included.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets an explicit corner radius for the popup background.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Sets the caption text provider.
    #[must_use]
    pub fn with_caption_provider(
        mut self,
        provider: impl Fn(usize) -> Option<String> + 'static,
    ) -> Self {
        self.caption_provider = Some(Arc::new(provider));
        self
    }

    /// Uses a fixed list of captions, one per reaction index.
    ///
    /// Indices past the end of the list have no caption.
    #[must_use]
    pub fn with_reaction_texts<I>(self, texts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        self.with_caption_provider(move |index| texts.get(index).cloned())
    }

    /// Sets the caption text color.
    #[must_use]
    pub fn with_caption_text_color(mut self, color: Color) -> Self {
        self.caption_text_color = Some(color);
        self
    }

    /// Sets the caption background fill.
    #[must_use]
    pub fn with_caption_background(mut self, color: Color) -> Self {
        self.caption_background = Some(color);
        self
    }

    /// Sets the caption padding.
    #[must_use]
    pub fn with_caption_padding(mut self, horizontal: f64, vertical: f64) -> Self {
        self.caption_horizontal_padding = Some(horizontal);
        self.caption_vertical_padding = Some(vertical);
        self
    }

    /// Sets the caption text size.
    #[must_use]
    pub fn with_caption_text_size(mut self, size: f64) -> Self {
        self.caption_text_size = Some(size);
        self
    }

    /// Sets the duration of the popup animations.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = Some(duration);
        self
    }

    /// Applies defaults and validates the options.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoReactions`] / [`ConfigError::SingleReaction`] when
    ///   fewer than two reactions are configured.
    /// - [`ConfigError::InvalidDimension`] for a non-finite dimension, a
    ///   non-positive size or duration, or a negative margin, padding or radius.
    pub fn resolve(self) -> Result<ReactionsConfig, ConfigError> {
        match self.reactions.len() {
            0 => return Err(ConfigError::NoReactions),
            1 => return Err(ConfigError::SingleReaction),
            _ => {}
        }

        let reaction_size = positive(
            "reaction_size",
            self.reaction_size.unwrap_or(DEFAULT_REACTION_SIZE),
        )?;
        let horizontal_margin = non_negative(
            "horizontal_margin",
            self.horizontal_margin.unwrap_or(DEFAULT_HORIZONTAL_MARGIN),
        )?;
        let vertical_margin = non_negative(
            "vertical_margin",
            self.vertical_margin.unwrap_or(horizontal_margin),
        )?;
        let popup_margin = non_negative(
            "popup_margin",
            self.popup_margin.unwrap_or(horizontal_margin),
        )?;
        let corner_radius = self
            .corner_radius
            .map(|radius| non_negative("corner_radius", radius))
            .transpose()?;

        let caption_style = CaptionStyle {
            text_color: self.caption_text_color.unwrap_or(Color::WHITE),
            background: self
                .caption_background
                .unwrap_or(Color::from_rgba8(0, 0, 0, 170)),
            horizontal_padding: non_negative(
                "caption_horizontal_padding",
                self.caption_horizontal_padding
                    .unwrap_or(DEFAULT_TEXT_HORIZONTAL_PADDING),
            )?,
            vertical_padding: non_negative(
                "caption_vertical_padding",
                self.caption_vertical_padding
                    .unwrap_or(DEFAULT_TEXT_VERTICAL_PADDING),
            )?,
            text_size: positive(
                "caption_text_size",
                self.caption_text_size.unwrap_or(DEFAULT_TEXT_SIZE),
            )?,
        };

        let animation_duration = self
            .animation_duration
            .unwrap_or(DEFAULT_ANIMATION_DURATION);
        if animation_duration.is_zero() {
            return Err(ConfigError::InvalidDimension {
                name: "animation_duration",
                value: 0.0,
            });
        }

        Ok(ReactionsConfig {
            reactions: self.reactions,
            reaction_size,
            horizontal_margin,
            vertical_margin,
            popup_gravity: self.popup_gravity.unwrap_or_default(),
            popup_margin,
            background_color: self
                .background_color
                .unwrap_or(Color::from_rgba8(255, 255, 255, 230)),
            corner_radius,
            caption_provider: self.caption_provider,
            caption_style,
            animation_duration,
        })
    }
}

impl fmt::Debug for ReactionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionOptions")
            .field("reactions", &self.reactions)
            .field("reaction_size", &self.reaction_size)
            .field("horizontal_margin", &self.horizontal_margin)
            .field("vertical_margin", &self.vertical_margin)
            .field("popup_gravity", &self.popup_gravity)
            .field("popup_margin", &self.popup_margin)
            .field("background_color", &self.background_color)
            .field("corner_radius", &self.corner_radius)
            .field("caption_provider", &self.caption_provider.is_some())
            .field("caption_text_color", &self.caption_text_color)
            .field("caption_background", &self.caption_background)
            .field(
                "caption_horizontal_padding",
                &self.caption_horizontal_padding,
            )
            .field("caption_vertical_padding", &self.caption_vertical_padding)
            .field("caption_text_size", &self.caption_text_size)
            .field("animation_duration", &self.animation_duration)
            .finish()
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidDimension { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageId;

    fn two_reactions() -> ReactionOptions {
        ReactionOptions::new().with_reactions([ImageId(1), ImageId(2)])
    }

    #[test]
    fn empty_reactions_are_rejected() {
        let err = ReactionOptions::new().resolve().unwrap_err();
        assert_eq!(err, ConfigError::NoReactions);
    }

    #[test]
    fn single_reaction_is_rejected() {
        let err = ReactionOptions::new()
            .with_reaction(ImageId(1))
            .resolve()
            .unwrap_err();
        assert_eq!(err, ConfigError::SingleReaction);
    }

    #[test]
    fn defaults_follow_horizontal_margin() {
        let config = two_reactions().with_horizontal_margin(10.0).resolve().unwrap();
        assert_eq!(config.reaction_size(), DEFAULT_REACTION_SIZE);
        assert_eq!(config.horizontal_margin(), 10.0);
        assert_eq!(config.vertical_margin(), 10.0);
        assert_eq!(config.popup_margin(), 10.0);
        assert_eq!(config.popup_gravity(), PopupGravity::Default);
        assert_eq!(config.corner_radius(), None);
        assert_eq!(config.animation_duration(), Duration::from_millis(100));
        assert_eq!(config.background_color().to_rgba8().a, 230);
    }

    #[test]
    fn explicit_values_win_over_derived_defaults() {
        let config = two_reactions()
            .with_horizontal_margin(10.0)
            .with_vertical_margin(4.0)
            .with_popup_margin(2.0)
            .with_corner_radius(6.0)
            .resolve()
            .unwrap();
        assert_eq!(config.vertical_margin(), 4.0);
        assert_eq!(config.popup_margin(), 2.0);
        assert_eq!(config.corner_radius(), Some(6.0));
    }

    #[test]
    fn invalid_dimensions_are_reported_by_name() {
        let err = two_reactions().with_reaction_size(0.0).resolve().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDimension {
                name: "reaction_size",
                value: 0.0
            }
        );

        let err = two_reactions()
            .with_horizontal_margin(-1.0)
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDimension {
                name: "horizontal_margin",
                ..
            }
        ));

        let err = two_reactions()
            .with_caption_text_size(f64::NAN)
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDimension {
                name: "caption_text_size",
                ..
            }
        ));

        let err = two_reactions()
            .with_animation_duration(Duration::ZERO)
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDimension {
                name: "animation_duration",
                ..
            }
        ));
    }

    #[test]
    fn caption_provider_is_optional() {
        let config = two_reactions().resolve().unwrap();
        assert!(!config.has_captions());
        assert_eq!(config.caption_for(0), None);

        let config = two_reactions()
            .with_caption_provider(|index| (index == 1).then(|| String::from("Love")))
            .resolve()
            .unwrap();
        assert!(config.has_captions());
        assert_eq!(config.caption_for(0), None);
        assert_eq!(config.caption_for(1).as_deref(), Some("Love"));
    }
}
