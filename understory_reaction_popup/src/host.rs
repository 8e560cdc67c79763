// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hosting the surface in a full-screen overlay opened from an anchor view.

use core::time::Duration;

use kurbo::{Point, Size};
use understory_reaction_config::ReactionsConfig;
use understory_reaction_layout::Anchor;

use crate::{Canvas, FrameResult, PointerAction, PointerEvent, ReactionSurface, TextMeasure};

/// A transparent overlay window covering the screen, provided by the host
/// platform.
pub trait OverlayWindow {
    /// Shows the overlay on behalf of `anchor`.
    fn open(&mut self, anchor: &Anchor);

    /// Tears the overlay down.
    fn close(&mut self);

    /// Returns `true` while the overlay is shown.
    fn is_open(&self) -> bool;

    /// Size of the overlay content area.
    fn container_size(&self) -> Size;

    /// Screen position of the overlay's top-left corner.
    fn screen_origin(&self) -> Point {
        Point::ZERO
    }
}

/// A reaction surface hosted in an [`OverlayWindow`].
///
/// Feed the anchor's pointer stream to [`on_anchor_touch`](Self::on_anchor_touch):
/// the first press opens the overlay and shows the popup, and the rest of the
/// gesture drives the selection. Later gestures land on the overlay and go to
/// [`on_overlay_pointer`](Self::on_overlay_pointer).
#[derive(Debug)]
pub struct ReactionPopup<W> {
    surface: ReactionSurface,
    window: W,
    tap_inside_anchor: bool,
}

impl<W: OverlayWindow> ReactionPopup<W> {
    /// Creates a popup hosted in `window`.
    pub fn new(config: ReactionsConfig, window: W, measure: impl TextMeasure + 'static) -> Self {
        Self {
            surface: ReactionSurface::new(config, measure),
            window,
            tap_inside_anchor: false,
        }
    }

    /// Sets the callback invoked on release; see
    /// [`ReactionSurface::set_selection_listener`].
    pub fn set_selection_listener(
        &mut self,
        listener: impl FnMut(Option<usize>) -> bool + 'static,
    ) {
        self.surface.set_selection_listener(listener);
    }

    /// Sets the callback invoked when the popup has finished disappearing.
    pub fn set_dismiss_listener(&mut self, listener: impl FnMut() + 'static) {
        self.surface.set_dismiss_listener(listener);
    }

    /// Handles a pointer event from the anchor view.
    ///
    /// A press while the overlay is closed opens it and shows the popup.
    /// Afterwards a release that never left the anchor only returns the
    /// reactions to rest, so the tap that opened the popup selects nothing.
    ///
    /// Returns `true` if the event was consumed by the popup.
    pub fn on_anchor_touch(&mut self, event: PointerEvent, anchor: Anchor) -> bool {
        if !self.window.is_open() {
            if event.action != PointerAction::Down {
                return false;
            }
            self.window.open(&anchor);
            self.surface.set_screen_origin(self.window.screen_origin());
            self.surface.set_container_size(self.window.container_size());
            self.tap_inside_anchor = true;
            self.surface.show(event.position, anchor);
        }

        let tracked = self
            .surface
            .session()
            .map_or(anchor, |session| *session.anchor());
        self.tap_inside_anchor = self.tap_inside_anchor && tracked.contains(event.position);
        if event.action == PointerAction::Up && self.tap_inside_anchor {
            self.surface.reset_to_resting();
        } else {
            self.surface.on_pointer(event);
        }
        true
    }

    /// Handles a pointer event delivered to the overlay itself.
    pub fn on_overlay_pointer(&mut self, event: PointerEvent) {
        self.surface.on_pointer(event);
    }

    /// Advances animations; closes the overlay once the popup has disappeared.
    pub fn advance(&mut self, dt: Duration) -> FrameResult {
        let frame = self.surface.advance(dt);
        if frame.dismissed && self.window.is_open() {
            self.window.close();
        }
        frame
    }

    /// Starts the disappearance.
    ///
    /// The overlay closes when the animation completes in
    /// [`advance`](Self::advance), or right away if nothing is shown.
    pub fn dismiss(&mut self) {
        if !self.surface.dismiss() && !self.surface.is_visible() && self.window.is_open() {
            self.window.close();
        }
    }

    /// Forwards a new overlay size to the surface.
    pub fn on_container_resized(&mut self, size: Size) {
        self.surface.set_container_size(size);
    }

    /// Paints the popup into the overlay.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        self.surface.paint(canvas);
    }

    /// Returns `true` while the popup is visible.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.surface.is_visible()
    }

    /// The hosted surface.
    #[must_use]
    pub fn surface(&self) -> &ReactionSurface {
        &self.surface
    }

    /// The hosted surface, mutably.
    pub fn surface_mut(&mut self) -> &mut ReactionSurface {
        &mut self.surface
    }

    /// The overlay window.
    #[must_use]
    pub fn window(&self) -> &W {
        &self.window
    }
}
