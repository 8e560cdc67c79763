// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-provided rendering and text measurement.
//!
//! The popup never rasterizes anything itself. Painting walks the visible
//! children and emits a handful of calls on a [`Canvas`]; the host maps them
//! onto its renderer. Caption layout needs the size of a string, which comes
//! from a [`TextMeasure`].

use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;
use understory_reaction_config::{CaptionStyle, ImageId, ScaleMode};

/// Render target the popup paints into, in overlay coordinates.
pub trait Canvas {
    /// Fills a rounded rectangle with a solid color.
    fn fill_rounded_rect(&mut self, shape: RoundedRect, color: Color);

    /// Draws a reaction image fitted into `bounds`, with an opacity in `0..=1`.
    fn draw_image(&mut self, image: ImageId, bounds: Rect, scale_mode: ScaleMode, alpha: f32);

    /// Draws a single line of caption text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &CaptionStyle, alpha: f32);
}

/// Measures caption text, without padding.
pub trait TextMeasure {
    /// Returns the size of `text` laid out on one line with `style`.
    fn measure(&self, text: &str, style: &CaptionStyle) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &CaptionStyle) -> Size,
{
    fn measure(&self, text: &str, style: &CaptionStyle) -> Size {
        self(text, style)
    }
}
