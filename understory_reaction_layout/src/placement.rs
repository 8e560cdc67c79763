// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use understory_reaction_config::{PopupGravity, ReactionsConfig};

use crate::PopupMetrics;

/// On-screen bounds of the view that opened the popup.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Anchor {
    /// Top-left corner in screen coordinates.
    pub origin: Point,
    /// Size of the anchor view.
    pub size: Size,
}

impl Anchor {
    /// Creates an anchor from its screen origin and size.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Anchor bounds in screen coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Returns `true` if `pt` lies within the anchor, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let rect = self.rect();
        pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
    }
}

/// Computes the popup origin within a container of size `container`.
///
/// Horizontal placement follows `gravity`, with the per-gravity fallbacks
/// documented on [`PopupGravity`]; any result that leaves the popup partly
/// outside the container is replaced by a horizontally centred position.
///
/// Vertically the popup sits above the anchor, leaving one popup height of
/// room for the magnified icon and its caption. When there is no room above,
/// it goes below the anchor with the same spacing.
#[must_use]
pub fn place_popup(
    metrics: &PopupMetrics,
    gravity: PopupGravity,
    popup_margin: f64,
    anchor: &Anchor,
    first_touch: Point,
    container: Size,
) -> Point {
    let width = metrics.size.width;
    let height = metrics.size.height;
    let anchor_rect = anchor.rect();

    let mut x = match gravity {
        PopupGravity::Default => {
            first_touch.x - metrics.horizontal_margin - metrics.icons.medium / 2.0
        }
        PopupGravity::ParentLeft => {
            if anchor_rect.x0 + width > container.width {
                container.width - width - popup_margin
            } else {
                anchor_rect.x0
            }
        }
        PopupGravity::ParentRight => {
            let x = anchor_rect.x1 - width;
            if x < 0.0 { popup_margin } else { x }
        }
        PopupGravity::ScreenLeft => popup_margin,
        PopupGravity::ScreenRight => container.width - width - popup_margin,
        PopupGravity::Center => (container.width - width) / 2.0,
    };
    if x < 0.0 || x + width >= container.width {
        x = ((container.width - width) / 2.0).max(0.0);
    }

    let mut y = anchor_rect.y0 - 2.0 * height;
    if y < 0.0 {
        y = anchor_rect.y1 + height;
    }

    Point::new(x, y)
}

/// Placed popup: metrics plus a screen position.
///
/// This is the geometry snapshot a reaction surface works from. It must be
/// recomputed whenever the container size, the anchor or the configuration
/// changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopupGeometry {
    /// Top-left corner of the popup background.
    pub origin: Point,
    /// Position-independent measurements.
    pub metrics: PopupMetrics,
}

impl PopupGeometry {
    /// Computes the metrics and placement for `config`.
    #[must_use]
    pub fn compute(
        config: &ReactionsConfig,
        anchor: &Anchor,
        first_touch: Point,
        container: Size,
    ) -> Self {
        let metrics = PopupMetrics::new(config);
        let origin = place_popup(
            &metrics,
            config.popup_gravity(),
            config.popup_margin(),
            anchor,
            first_touch,
            container,
        );
        Self { origin, metrics }
    }

    /// Bounds of the popup background, without any animated translation.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.metrics.size)
    }

    /// Frames of the icon row for the given current icon sizes.
    ///
    /// Icons start after the horizontal margin and are separated by the
    /// divider. They share a bottom edge one vertical margin above the
    /// bottom of the popup, so magnified icons grow upward out of the
    /// background. Every frame is shifted down by `translation_y`.
    pub fn row_frames<'a>(
        &'a self,
        sizes: impl IntoIterator<Item = f64> + 'a,
        translation_y: f64,
    ) -> impl Iterator<Item = Rect> + 'a {
        let bottom = self.origin.y + self.metrics.size.height - self.metrics.vertical_margin
            + translation_y;
        let mut left = self.origin.x + self.metrics.horizontal_margin;
        sizes.into_iter().map(move |size| {
            let frame = Rect::new(left, bottom - size, left + size, bottom);
            left += size + self.metrics.divider;
            frame
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1080.0, 1920.0);

    fn metrics() -> PopupMetrics {
        PopupMetrics::from_parts(4, 48.0, 16.0, 16.0, None)
    }

    fn anchor() -> Anchor {
        Anchor::new(Point::new(300.0, 1000.0), Size::new(200.0, 60.0))
    }

    fn place(gravity: PopupGravity, anchor: &Anchor, touch: Point, container: Size) -> Point {
        place_popup(&metrics(), gravity, 16.0, anchor, touch, container)
    }

    #[test]
    fn default_gravity_centres_first_icon_on_touch() {
        let pos = place(
            PopupGravity::Default,
            &anchor(),
            Point::new(340.0, 1030.0),
            SCREEN,
        );
        // 340 - 16 - 24
        assert_eq!(pos.x, 300.0);
        // 1000 - 2 * 80
        assert_eq!(pos.y, 840.0);
    }

    #[test]
    fn parent_left_falls_back_to_screen_right() {
        let pos = place(PopupGravity::ParentLeft, &anchor(), Point::ZERO, SCREEN);
        assert_eq!(pos.x, 300.0);

        let near_right = Anchor::new(Point::new(900.0, 1000.0), Size::new(100.0, 60.0));
        let pos = place(PopupGravity::ParentLeft, &near_right, Point::ZERO, SCREEN);
        assert_eq!(pos.x, 1080.0 - 248.0 - 16.0);
    }

    #[test]
    fn parent_right_falls_back_to_screen_left() {
        let pos = place(PopupGravity::ParentRight, &anchor(), Point::ZERO, SCREEN);
        assert_eq!(pos.x, 500.0 - 248.0);

        let near_left = Anchor::new(Point::new(10.0, 1000.0), Size::new(100.0, 60.0));
        let pos = place(PopupGravity::ParentRight, &near_left, Point::ZERO, SCREEN);
        assert_eq!(pos.x, 16.0);
    }

    #[test]
    fn screen_gravities() {
        let a = anchor();
        assert_eq!(place(PopupGravity::ScreenLeft, &a, Point::ZERO, SCREEN).x, 16.0);
        assert_eq!(
            place(PopupGravity::ScreenRight, &a, Point::ZERO, SCREEN).x,
            1080.0 - 248.0 - 16.0
        );
        assert_eq!(
            place(PopupGravity::Center, &a, Point::ZERO, SCREEN).x,
            (1080.0 - 248.0) / 2.0
        );
    }

    #[test]
    fn out_of_bounds_positions_fall_back_to_centre() {
        // Touch near the left edge would put the popup at a negative x.
        let pos = place(PopupGravity::Default, &anchor(), Point::new(5.0, 1030.0), SCREEN);
        assert_eq!(pos.x, (1080.0 - 248.0) / 2.0);

        // A container narrower than the popup clamps to zero.
        let narrow = Size::new(200.0, 1920.0);
        let pos = place(PopupGravity::Center, &anchor(), Point::ZERO, narrow);
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn popup_goes_below_anchor_without_room_above() {
        let top = Anchor::new(Point::new(300.0, 100.0), Size::new(200.0, 60.0));
        let pos = place(PopupGravity::Center, &top, Point::ZERO, SCREEN);
        // 100 + 60 + 80
        assert_eq!(pos.y, 240.0);
    }

    #[test]
    fn anchor_contains_its_edges() {
        let a = anchor();
        assert!(a.contains(Point::new(300.0, 1000.0)));
        assert!(a.contains(Point::new(500.0, 1060.0)));
        assert!(!a.contains(Point::new(500.5, 1060.0)));
    }

    #[test]
    fn row_frames_share_a_bottom_edge() {
        let geometry = PopupGeometry {
            origin: Point::new(100.0, 200.0),
            metrics: metrics(),
        };
        let frames: [Rect; 4] = {
            let mut it = geometry.row_frames([32.0, 96.0, 32.0, 32.0], 0.0);
            core::array::from_fn(|_| it.next().unwrap())
        };
        assert_eq!(frames[0], Rect::new(116.0, 232.0, 148.0, 264.0));
        assert_eq!(frames[1], Rect::new(156.0, 168.0, 252.0, 264.0));
        assert_eq!(frames[3].x1, 100.0 + 248.0 - 16.0);

        let shifted = geometry.row_frames([48.0; 4], 80.0).next().unwrap();
        assert_eq!(shifted, Rect::new(116.0, 296.0, 164.0, 344.0));
    }
}
