// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use understory_reaction_config::ReactionItem;

use crate::{Canvas, ChildVisuals, PopupChild};

/// Cached screen location of a laid-out element.
///
/// Hosts may map overlay coordinates to the screen through something more
/// expensive than an offset, and a drag hit-tests every icon on every move,
/// so the result is kept until the next layout pass invalidates it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LocationCache {
    screen: Option<Point>,
}

impl LocationCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { screen: None }
    }

    /// Returns `true` if a location is cached.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.screen.is_some()
    }

    /// Forgets the cached location.
    pub fn invalidate(&mut self) {
        self.screen = None;
    }

    /// Returns the cached location, computing it with `locate` if needed.
    pub fn get_or_locate(&mut self, locate: impl FnOnce() -> Point) -> Point {
        *self.screen.get_or_insert_with(locate)
    }
}

/// One reaction of the row.
#[derive(Clone, Debug)]
pub struct ReactionIcon {
    item: ReactionItem,
    size: f64,
    frame: Rect,
    visuals: ChildVisuals,
    location: LocationCache,
}

impl ReactionIcon {
    /// Creates an icon for `item` with a square edge of `size`.
    #[must_use]
    pub fn new(item: ReactionItem, size: f64) -> Self {
        Self {
            item,
            size,
            frame: Rect::ZERO,
            visuals: ChildVisuals::default(),
            location: LocationCache::new(),
        }
    }

    /// The reaction this icon shows.
    #[must_use]
    pub fn item(&self) -> &ReactionItem {
        &self.item
    }

    /// Current edge length; the frame catches up on the next layout.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Sets the edge length used by the next layout.
    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    /// Laid-out bounds in overlay coordinates, translation included.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Positions the icon; `frame` excludes the child's translation.
    ///
    /// Invalidates the cached screen location.
    pub fn layout(&mut self, frame: Rect) {
        self.frame = frame + Vec2::new(0.0, self.visuals.translation_y);
        self.location.invalidate();
    }

    /// Screen location cache, for inspection.
    #[must_use]
    pub fn location_cache(&self) -> &LocationCache {
        &self.location
    }

    /// Bounds in screen coordinates, for an overlay placed at `overlay_origin`.
    pub fn screen_bounds(&mut self, overlay_origin: Point) -> Rect {
        let frame = self.frame;
        let origin = self
            .location
            .get_or_locate(|| overlay_origin + frame.origin().to_vec2());
        Rect::from_origin_size(origin, frame.size())
    }
}

impl PopupChild for ReactionIcon {
    fn visuals(&self) -> ChildVisuals {
        self.visuals
    }

    fn set_visuals(&mut self, visuals: ChildVisuals) {
        self.visuals = visuals;
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.draw_image(
            self.item.image,
            self.frame,
            self.item.scale_mode,
            self.visuals.alpha,
        );
    }
}
