// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, RoundedRect, Vec2};
use peniko::Color;

use crate::{Canvas, ChildVisuals, PopupChild};

/// Rounded rectangle painted behind the reaction row.
///
/// Stateless apart from its frame: it paints exactly one filled rounded
/// rectangle spanning whatever bounds the last layout gave it.
#[derive(Clone, Debug)]
pub struct RoundedBackground {
    color: Color,
    corner_radius: f64,
    frame: Rect,
    visuals: ChildVisuals,
}

impl RoundedBackground {
    /// Creates a background with the given fill; alpha is part of `color`.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            corner_radius: 0.0,
            frame: Rect::ZERO,
            visuals: ChildVisuals::default(),
        }
    }

    /// Fill color, before the animated opacity is applied.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Laid-out bounds, translation included.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Corner radius used for painting.
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Positions the background; `bounds` excludes the child's translation.
    pub fn layout(&mut self, bounds: Rect, corner_radius: f64) {
        self.frame = bounds + Vec2::new(0.0, self.visuals.translation_y);
        self.corner_radius = corner_radius;
    }
}

impl PopupChild for RoundedBackground {
    fn visuals(&self) -> ChildVisuals {
        self.visuals
    }

    fn set_visuals(&mut self, visuals: ChildVisuals) {
        self.visuals = visuals;
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rounded_rect(
            RoundedRect::from_rect(self.frame, self.corner_radius),
            self.color.multiply_alpha(self.visuals.alpha),
        );
    }
}
