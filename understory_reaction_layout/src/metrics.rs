// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use understory_reaction_config::ReactionsConfig;

/// Size class of a reaction icon.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeMode {
    /// Shrunk to make room for a magnified neighbour.
    Small,
    /// Resting size, nothing is selected.
    #[default]
    Medium,
    /// Magnified under the pointer.
    Large,
}

/// Icon edge lengths for each [`SizeMode`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IconSizes {
    /// Edge length of [`SizeMode::Small`] icons.
    pub small: f64,
    /// Edge length of [`SizeMode::Medium`] icons.
    pub medium: f64,
    /// Edge length of [`SizeMode::Large`] icons.
    pub large: f64,
}

impl IconSizes {
    /// Returns the edge length for `mode`.
    #[must_use]
    pub fn size(&self, mode: SizeMode) -> f64 {
        match mode {
            SizeMode::Small => self.small,
            SizeMode::Medium => self.medium,
            SizeMode::Large => self.large,
        }
    }
}

/// Position-independent measurements of the popup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopupMetrics {
    /// Number of reactions in the row.
    pub count: usize,
    /// Popup (background) size.
    pub size: Size,
    /// Icon sizes per size mode.
    pub icons: IconSizes,
    /// Gap between two adjacent icons: half of the horizontal margin.
    pub divider: f64,
    /// Space between the popup edges and the first/last icon.
    pub horizontal_margin: f64,
    /// Space between the popup top/bottom edges and resting icons.
    pub vertical_margin: f64,
    /// Corner radius of the background.
    pub corner_radius: f64,
}

impl PopupMetrics {
    /// Computes the metrics for a resolved configuration.
    #[must_use]
    pub fn new(config: &ReactionsConfig) -> Self {
        Self::from_parts(
            config.reaction_count(),
            config.reaction_size(),
            config.horizontal_margin(),
            config.vertical_margin(),
            config.corner_radius(),
        )
    }

    /// Computes the metrics from raw dimensions.
    ///
    /// Resolved configurations always hold at least two reactions. With
    /// fewer there is no neighbour to shrink, so the small size is reported
    /// as the medium one and the row-width invariant does not hold.
    #[must_use]
    pub fn from_parts(
        count: usize,
        reaction_size: f64,
        horizontal_margin: f64,
        vertical_margin: f64,
        corner_radius: Option<f64>,
    ) -> Self {
        let divider = horizontal_margin / 2.0;
        let medium = reaction_size;
        let large = 2.0 * medium;
        let gaps = count.saturating_sub(1) as f64;

        let width = 2.0 * horizontal_margin + count as f64 * medium + gaps * divider;
        let height = medium + 2.0 * vertical_margin;

        let small = if count < 2 {
            medium
        } else {
            (width - 2.0 * horizontal_margin - large - gaps * divider) / gaps
        };

        Self {
            count,
            size: Size::new(width, height),
            icons: IconSizes {
                small,
                medium,
                large,
            },
            divider,
            horizontal_margin,
            vertical_margin,
            corner_radius: corner_radius.unwrap_or(height / 2.0),
        }
    }

    /// Target edge length of each icon, in row order.
    ///
    /// With no selection every icon is medium; otherwise the selected icon
    /// is large and every other icon small.
    pub fn target_sizes(&self, selected: Option<usize>) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |index| self.icons.size(self.size_mode(index, selected)))
    }

    /// Size mode of the icon at `index` for a given selection.
    #[must_use]
    pub fn size_mode(&self, index: usize, selected: Option<usize>) -> SizeMode {
        match selected {
            None => SizeMode::Medium,
            Some(selected) if selected == index => SizeMode::Large,
            Some(_) => SizeMode::Small,
        }
    }

    /// Width of the icon row (icons plus dividers, without the margins).
    pub fn row_width(&self, sizes: impl IntoIterator<Item = f64>) -> f64 {
        let mut width = 0.0;
        let mut count = 0_usize;
        for size in sizes {
            width += size;
            count += 1;
        }
        width + count.saturating_sub(1) as f64 * self.divider
    }
}
