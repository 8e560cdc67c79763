// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifier for a reaction image.
///
/// This is a small, opaque handle. The host owns the actual bitmaps or
/// vector images and resolves the handle when painting.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// How a reaction image is fitted into its square icon bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Scale uniformly so the whole image fits, centred.
    #[default]
    FitCenter,
    /// Scale uniformly so the image covers the bounds, cropping overflow.
    CenterCrop,
    /// Like [`ScaleMode::FitCenter`], but never scale up.
    CenterInside,
    /// Stretch independently on both axes to fill the bounds.
    FitXy,
}

/// One reaction of the picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReactionItem {
    /// Image painted for this reaction.
    pub image: ImageId,
    /// How the image is fitted into the icon bounds.
    pub scale_mode: ScaleMode,
}

impl ReactionItem {
    /// Creates a reaction with the default [`ScaleMode::FitCenter`].
    #[must_use]
    pub const fn new(image: ImageId) -> Self {
        Self {
            image,
            scale_mode: ScaleMode::FitCenter,
        }
    }

    /// Returns this reaction with another scale mode.
    #[must_use]
    pub const fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }
}

impl From<ImageId> for ReactionItem {
    fn from(image: ImageId) -> Self {
        Self::new(image)
    }
}

/// Horizontal placement of the popup relative to its anchor or the screen.
///
/// Whatever the policy, a position that would leave the popup partly
/// outside of the container falls back to centring it horizontally.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PopupGravity {
    /// First reaction centred over the touch point that opened the popup.
    #[default]
    Default,
    /// Left edge aligned with the anchor's left edge.
    ///
    /// Falls back to [`PopupGravity::ScreenRight`] when the popup would
    /// overflow the right side of the container.
    ParentLeft,
    /// Right edge aligned with the anchor's right edge.
    ///
    /// Falls back to [`PopupGravity::ScreenLeft`] when the popup would
    /// overflow the left side of the container.
    ParentRight,
    /// Left side of the container, inset by the popup margin.
    ScreenLeft,
    /// Right side of the container, inset by the popup margin.
    ScreenRight,
    /// Horizontally centred in the container.
    Center,
}
