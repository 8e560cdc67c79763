// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability shared by everything the popup animates as a whole.

use crate::Canvas;

/// Properties driven by the appear/disappear animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChildVisuals {
    /// Vertical offset from the laid-out position, positive downwards.
    pub translation_y: f64,
    /// Opacity in `0..=1`.
    pub alpha: f32,
}

impl Default for ChildVisuals {
    fn default() -> Self {
        Self {
            translation_y: 0.0,
            alpha: 1.0,
        }
    }
}

/// An element of the popup moved and faded by boundary transitions.
///
/// The background, every reaction icon and the caption implement this, so
/// the surface can slide and fade all of them without caring which is which.
pub trait PopupChild {
    /// Current translation and opacity.
    fn visuals(&self) -> ChildVisuals;

    /// Replaces translation and opacity; takes effect on the next layout.
    fn set_visuals(&mut self, visuals: ChildVisuals);

    /// Paints the element at its laid-out frame.
    fn paint(&self, canvas: &mut dyn Canvas);
}
