// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the popup integration tests.

#![allow(
    dead_code,
    missing_docs,
    reason = "Integration-test helper module; each test binary uses a different subset."
)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;
use understory_reaction_config::{CaptionStyle, ImageId, ReactionOptions, ReactionsConfig, ScaleMode};
use understory_reaction_layout::Anchor;
use understory_reaction_popup::{Canvas, OverlayWindow, ReactionSurface};

pub(crate) const FRAME: Duration = Duration::from_millis(100);
pub(crate) const CONTAINER: Size = Size::new(400.0, 800.0);
pub(crate) const TOUCH: Point = Point::new(60.0, 620.0);

pub(crate) fn anchor() -> Anchor {
    Anchor::new(Point::new(40.0, 600.0), Size::new(120.0, 48.0))
}

/// Four reactions, size 48, margin 16, default gravity.
pub(crate) fn options() -> ReactionOptions {
    ReactionOptions::new().with_reactions((0..4).map(ImageId))
}

pub(crate) fn config() -> ReactionsConfig {
    options().resolve().unwrap()
}

/// Every string measures 10px per byte by 16px.
pub(crate) fn measure(text: &str, _: &CaptionStyle) -> Size {
    Size::new(10.0 * text.len() as f64, 16.0)
}

/// A surface in a 400x800 container, not shown yet.
pub(crate) fn surface(config: ReactionsConfig) -> ReactionSurface {
    let mut surface = ReactionSurface::new(config, measure);
    surface.set_container_size(CONTAINER);
    surface
}

/// A surface shown from [`TOUCH`] on [`anchor`] and past its appearance.
pub(crate) fn shown(config: ReactionsConfig) -> ReactionSurface {
    let mut surface = surface(config);
    surface.show(TOUCH, anchor());
    surface.advance(FRAME);
    surface
}

/// Advances until no animation is running.
pub(crate) fn settle(surface: &mut ReactionSurface) {
    for _ in 0..16 {
        if !surface.advance(FRAME).animating {
            return;
        }
    }
    panic!("animations did not settle");
}

/// Screen-space centre of the icon at `index`.
pub(crate) fn icon_center(surface: &ReactionSurface, index: usize) -> Point {
    surface.icons()[index].frame().center() + surface.screen_origin().to_vec2()
}

/// Records selection callbacks; answers with a fixed "should close".
#[derive(Clone, Debug, Default)]
pub(crate) struct Selections {
    pub(crate) calls: Rc<RefCell<Vec<Option<usize>>>>,
}

impl Selections {
    pub(crate) fn listener(&self, close: bool) -> impl FnMut(Option<usize>) -> bool + 'static {
        let calls = Rc::clone(&self.calls);
        move |selected| {
            calls.borrow_mut().push(selected);
            close
        }
    }

    pub(crate) fn recorded(&self) -> Vec<Option<usize>> {
        self.calls.borrow().clone()
    }
}

/// Counts dismiss callbacks.
#[derive(Clone, Debug, Default)]
pub(crate) struct Dismissals {
    pub(crate) count: Rc<Cell<usize>>,
}

impl Dismissals {
    pub(crate) fn listener(&self) -> impl FnMut() + 'static {
        let count = Rc::clone(&self.count);
        move || count.set(count.get() + 1)
    }

    pub(crate) fn count(&self) -> usize {
        self.count.get()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PaintOp {
    RoundedRect { rect: Rect, radius: f64, color: Color },
    Image { image: ImageId, bounds: Rect, scale_mode: ScaleMode, alpha: f32 },
    Text { text: String, origin: Point, alpha: f32 },
}

/// Canvas that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub(crate) ops: Vec<PaintOp>,
}

impl RecordingCanvas {
    pub(crate) fn rounded_rects(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::RoundedRect { .. }))
            .count()
    }

    pub(crate) fn images(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::Image { .. }))
            .count()
    }

    pub(crate) fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, shape: RoundedRect, color: Color) {
        self.ops.push(PaintOp::RoundedRect {
            rect: shape.rect(),
            radius: shape.radii().top_left,
            color,
        });
    }

    fn draw_image(&mut self, image: ImageId, bounds: Rect, scale_mode: ScaleMode, alpha: f32) {
        self.ops.push(PaintOp::Image {
            image,
            bounds,
            scale_mode,
            alpha,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, _: &CaptionStyle, alpha: f32) {
        self.ops.push(PaintOp::Text {
            text: text.into(),
            origin,
            alpha,
        });
    }
}

/// Overlay window that counts opens and closes.
#[derive(Debug)]
pub(crate) struct FakeOverlay {
    pub(crate) open: bool,
    pub(crate) opened: usize,
    pub(crate) closed: usize,
    pub(crate) size: Size,
    pub(crate) origin: Point,
}

impl FakeOverlay {
    pub(crate) fn new() -> Self {
        Self {
            open: false,
            opened: 0,
            closed: 0,
            size: CONTAINER,
            origin: Point::ZERO,
        }
    }
}

impl OverlayWindow for FakeOverlay {
    fn open(&mut self, _: &Anchor) {
        self.open = true;
        self.opened += 1;
    }

    fn close(&mut self) {
        self.open = false;
        self.closed += 1;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn container_size(&self) -> Size {
        self.size
    }

    fn screen_origin(&self) -> Point {
        self.origin
    }
}
