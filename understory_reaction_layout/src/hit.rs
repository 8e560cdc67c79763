// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::PopupMetrics;

/// Outward expansion of an icon's bounds used for hit testing.
///
/// Dragging across the row should never fall into a dead zone between two
/// icons, and a finger that drifts below the row (towards where it started,
/// or while reading the caption) should keep its selection. The expanded
/// area is inclusive on the left/top edges and exclusive on the right/bottom
/// edges, so adjacent icons never both claim a point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HitSlop {
    /// Expansion to the left.
    pub left: f64,
    /// Expansion upwards.
    pub top: f64,
    /// Expansion to the right.
    pub right: f64,
    /// Expansion downwards.
    pub bottom: f64,
}

impl HitSlop {
    /// Hit slop of a reaction row.
    ///
    /// Left and top grow by the horizontal margin, right by the divider, and
    /// bottom by the divider plus the popup height.
    #[must_use]
    pub fn for_row(metrics: &PopupMetrics) -> Self {
        Self {
            left: metrics.horizontal_margin,
            top: metrics.horizontal_margin,
            right: metrics.divider,
            bottom: metrics.divider + metrics.size.height,
        }
    }

    fn expand(&self, bounds: Rect) -> Rect {
        Rect::new(
            bounds.x0 - self.left,
            bounds.y0 - self.top,
            bounds.x1 + self.right,
            bounds.y1 + self.bottom,
        )
    }

    /// Returns `true` if `pt` falls within `bounds` grown by this slop.
    #[must_use]
    pub fn contains(&self, bounds: Rect, pt: Point) -> bool {
        self.expand(bounds).contains(pt)
    }
}

/// Returns the index of the first of `bounds` whose expanded area contains `pt`.
pub fn hit_test(
    bounds: impl IntoIterator<Item = Rect>,
    slop: &HitSlop,
    pt: Point,
) -> Option<usize> {
    bounds.into_iter().position(|bounds| slop.contains(bounds, pt))
}
