// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive reaction surface: gesture handling, state machine and
//! animations over the background, the icon row and the caption.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;
use understory_reaction_config::ReactionsConfig;
use understory_reaction_layout::{Anchor, HitSlop, PopupGeometry, hit_test};

use crate::animation::{INLINE_ICONS, IconSizeList};
use crate::{
    Animation, AnimationKind, Boundary, Canvas, Caption, InteractionState, PointerAction,
    PointerEvent, PopupChild, ReactionIcon, RoundedBackground, TextMeasure, TouchSession,
};

/// Called on release with the reaction under the pointer (`None` for no
/// reaction). Returns whether the popup should close.
pub type SelectionListener = Box<dyn FnMut(Option<usize>) -> bool>;

/// Called once each time a disappearance completes.
pub type DismissListener = Box<dyn FnMut()>;

/// Outcome of [`ReactionSurface::advance`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameResult {
    /// An animation is still running; keep scheduling frames.
    pub animating: bool,
    /// The disappearance completed during this frame.
    pub dismissed: bool,
}

/// Headless reaction picker popup.
///
/// The surface lays out and animates its children in overlay coordinates
/// and receives pointer events in screen coordinates; the overlay's
/// position on screen is set with [`set_screen_origin`](Self::set_screen_origin).
///
/// Every state change goes through [`transition`](Self::transition), which
/// starts the matching animation. The host advances animations with
/// [`advance`](Self::advance) and paints with [`paint`](Self::paint).
pub struct ReactionSurface {
    config: ReactionsConfig,
    measure: Box<dyn TextMeasure>,
    container: Size,
    screen_origin: Point,
    geometry: PopupGeometry,
    background: RoundedBackground,
    icons: Vec<ReactionIcon>,
    caption: Caption,
    state: Option<InteractionState>,
    animation: Option<Animation>,
    session: Option<TouchSession>,
    visible: bool,
    selection_listener: Option<SelectionListener>,
    dismiss_listener: Option<DismissListener>,
}

impl fmt::Debug for ReactionSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionSurface")
            .field("config", &self.config)
            .field("container", &self.container)
            .field("screen_origin", &self.screen_origin)
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("animation", &self.animation)
            .field("session", &self.session)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl ReactionSurface {
    /// Creates a hidden surface for `config`, measuring caption text with
    /// `measure`.
    pub fn new(config: ReactionsConfig, measure: impl TextMeasure + 'static) -> Self {
        let geometry =
            PopupGeometry::compute(&config, &Anchor::default(), Point::ZERO, Size::ZERO);
        let icons = config
            .reactions()
            .iter()
            .map(|item| ReactionIcon::new(*item, geometry.metrics.icons.medium))
            .collect();
        let mut surface = Self {
            background: RoundedBackground::new(config.background_color()),
            caption: Caption::new(*config.caption_style()),
            config,
            measure: Box::new(measure),
            container: Size::ZERO,
            screen_origin: Point::ZERO,
            geometry,
            icons,
            state: None,
            animation: None,
            session: None,
            visible: false,
            selection_listener: None,
            dismiss_listener: None,
        };
        surface.layout();
        surface
    }

    /// The configuration this surface was built from.
    #[must_use]
    pub fn config(&self) -> &ReactionsConfig {
        &self.config
    }

    /// Current state; `None` while not shown.
    #[must_use]
    pub fn state(&self) -> Option<InteractionState> {
        self.state
    }

    /// Returns `true` between [`show`](Self::show) and the end of the
    /// disappearance.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current placement and measurements.
    #[must_use]
    pub fn geometry(&self) -> &PopupGeometry {
        &self.geometry
    }

    /// Size of the overlay the popup is placed in.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Screen position of the overlay's top-left corner.
    #[must_use]
    pub fn screen_origin(&self) -> Point {
        self.screen_origin
    }

    /// The background child.
    #[must_use]
    pub fn background(&self) -> &RoundedBackground {
        &self.background
    }

    /// Reaction icons in row order.
    #[must_use]
    pub fn icons(&self) -> &[ReactionIcon] {
        &self.icons
    }

    /// The caption child.
    #[must_use]
    pub fn caption(&self) -> &Caption {
        &self.caption
    }

    /// The running animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// The touch session of the current gesture, if shown.
    #[must_use]
    pub fn session(&self) -> Option<&TouchSession> {
        self.session.as_ref()
    }

    /// Sets the callback invoked on release.
    ///
    /// Without a listener every release closes the popup.
    pub fn set_selection_listener(
        &mut self,
        listener: impl FnMut(Option<usize>) -> bool + 'static,
    ) {
        self.selection_listener = Some(Box::new(listener));
    }

    /// Sets the callback invoked when a disappearance completes.
    pub fn set_dismiss_listener(&mut self, listener: impl FnMut() + 'static) {
        self.dismiss_listener = Some(Box::new(listener));
    }

    /// Sets the screen position of the overlay.
    pub fn set_screen_origin(&mut self, origin: Point) {
        self.screen_origin = origin;
        self.recompute_geometry();
        self.layout();
    }

    /// Sets the overlay size and recomputes the placement.
    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
        self.recompute_geometry();
        self.layout();
    }

    /// Shows the popup for a gesture that started at `position` on `anchor`.
    ///
    /// Both are in screen coordinates.
    pub fn show(&mut self, position: Point, anchor: Anchor) {
        self.session = Some(TouchSession::new(position, anchor));
        self.recompute_geometry();
        self.visible = true;
        self.set_state(InteractionState::Appearing);
    }

    /// Handles a pointer event in screen coordinates.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        let state = match self.state {
            None | Some(InteractionState::Disappearing(_)) => {
                log::trace!("pointer {:?} ignored in state {:?}", event.action, self.state);
                return;
            }
            Some(state) => state,
        };
        if let Some(session) = self.session.as_mut() {
            session.track(event.position);
        }

        match event.action {
            PointerAction::Down | PointerAction::Move => {
                self.on_pointer_move(state, event.position);
            }
            PointerAction::Up => self.on_pointer_up(event.position),
            PointerAction::Cancel => {
                self.set_state(InteractionState::WaitingSelection);
            }
        }
    }

    fn on_pointer_move(&mut self, state: InteractionState, position: Point) {
        let below = self.is_below_first_reaction(position);
        if self
            .session
            .as_mut()
            .is_some_and(|session| session.keep_ignoring_first_reaction(below))
        {
            log::trace!("pointer at {position:?} ignored near the first reaction");
            return;
        }
        if state == InteractionState::Appearing {
            log::trace!("pointer at {position:?} ignored while appearing");
            return;
        }
        let next = self
            .reaction_at(position)
            .map_or(InteractionState::WaitingSelection, InteractionState::Selected);
        self.set_state(next);
    }

    fn on_pointer_up(&mut self, position: Point) {
        if self.session.as_mut().is_some_and(TouchSession::consume_tap) {
            log::trace!("release of the opening tap swallowed");
            return;
        }
        let selected = self.reaction_at(position);
        let close = match self.selection_listener.as_mut() {
            Some(listener) => listener(selected),
            None => true,
        };
        log::debug!("reaction {selected:?} released, close: {close}");
        if close {
            self.dismiss();
        } else {
            self.set_state(InteractionState::WaitingSelection);
        }
    }

    /// Index of the reaction whose hit area contains the screen point
    /// `position`.
    pub fn reaction_at(&mut self, position: Point) -> Option<usize> {
        let slop = HitSlop::for_row(&self.geometry.metrics);
        let origin = self.screen_origin;
        hit_test(
            self.icons.iter_mut().map(|icon| icon.screen_bounds(origin)),
            &slop,
            position,
        )
    }

    fn is_below_first_reaction(&mut self, position: Point) -> bool {
        let height = self.geometry.metrics.size.height;
        let origin = self.screen_origin;
        self.icons.first_mut().is_some_and(|icon| {
            let bounds = icon.screen_bounds(origin);
            position.x >= bounds.x0
                && position.x <= bounds.x1
                && position.y >= bounds.y1
                && position.y <= bounds.y1 + height
        })
    }

    /// Returns every reaction to its resting size.
    ///
    /// Does nothing while hidden or disappearing.
    pub fn reset_to_resting(&mut self) -> bool {
        match self.state {
            None | Some(InteractionState::Disappearing(_)) => false,
            Some(_) => self.set_state(InteractionState::WaitingSelection),
        }
    }

    /// Starts the disappearance, keeping the current selection.
    ///
    /// Returns `false` if the popup is hidden or already disappearing.
    pub fn dismiss(&mut self) -> bool {
        match self.state {
            None | Some(InteractionState::Disappearing(_)) => false,
            Some(state) => self.set_state(InteractionState::Disappearing(state.selected())),
        }
    }

    /// Moves a shown popup to `next` and starts the matching size animation.
    ///
    /// Only [`InteractionState::WaitingSelection`] and
    /// [`InteractionState::Selected`] can be entered this way; appearing and
    /// disappearing go through [`show`](Self::show) and
    /// [`dismiss`](Self::dismiss).
    ///
    /// Returns `false`, doing nothing, while hidden, appearing or
    /// disappearing, when `next` equals the current state, or when it
    /// selects a reaction that does not exist.
    pub fn transition(&mut self, next: InteractionState) -> bool {
        let interactive = self.visible
            && matches!(
                self.state,
                Some(InteractionState::WaitingSelection | InteractionState::Selected(_))
            );
        if next.is_boundary() || !interactive {
            log::debug!("refusing transition {:?} -> {next:?}", self.state);
            return false;
        }
        self.set_state(next)
    }

    fn set_state(&mut self, next: impl Into<Option<InteractionState>>) -> bool {
        let next = next.into();
        if next == self.state {
            return false;
        }
        if let Some(InteractionState::Selected(index)) = next {
            if index >= self.icons.len() {
                log::debug!("ignoring selection of missing reaction {index}");
                return false;
            }
        }
        log::debug!("reaction popup state {:?} -> {:?}", self.state, next);
        self.state = next;

        let height = self.geometry.metrics.size.height;
        match next {
            None => {
                self.cancel_animation();
                self.visible = false;
                self.session = None;
                self.caption.hide();
            }
            Some(InteractionState::Appearing) => {
                let medium = self.geometry.metrics.icons.medium;
                for icon in &mut self.icons {
                    icon.set_size(medium);
                }
                self.start_animation(AnimationKind::Boundary {
                    boundary: Boundary::Appear,
                    height,
                });
            }
            Some(InteractionState::Disappearing(_)) => {
                self.start_animation(AnimationKind::Boundary {
                    boundary: Boundary::Disappear,
                    height,
                });
            }
            Some(InteractionState::WaitingSelection) => self.start_size_animation(None),
            Some(InteractionState::Selected(index)) => self.start_size_animation(Some(index)),
        }
        true
    }

    fn start_size_animation(&mut self, selected: Option<usize>) {
        let from = self.icons.iter().map(ReactionIcon::size).collect();
        let to = self.geometry.metrics.target_sizes(selected).collect();
        self.start_animation(AnimationKind::Size { from, to, selected });
    }

    fn start_animation(&mut self, kind: AnimationKind) {
        self.cancel_animation();
        self.caption.hide();
        let animation = Animation::new(kind, self.config.animation_duration());
        log::trace!(
            "animating {:?} over {:?}",
            animation.kind(),
            animation.duration()
        );
        self.apply(&animation);
        self.animation = Some(animation);
        self.layout();
    }

    /// Drops the running animation without its completion; a boundary
    /// animation leaves its children at their end values.
    fn cancel_animation(&mut self) {
        if let Some(mut previous) = self.animation.take() {
            if matches!(previous.kind(), AnimationKind::Boundary { .. }) {
                previous.finish();
                self.apply(&previous);
            }
        }
    }

    fn apply(&mut self, animation: &Animation) {
        let progress = animation.progress();
        match animation.kind() {
            AnimationKind::Boundary { boundary, height } => {
                let visuals = boundary.visuals_at(*height, progress);
                self.for_each_child(|child| child.set_visuals(visuals));
            }
            kind @ AnimationKind::Size { .. } => {
                let sizes = kind.sizes_at(progress).unwrap_or_default();
                for (icon, size) in self.icons.iter_mut().zip(sizes) {
                    icon.set_size(size);
                }
            }
        }
    }

    /// Advances the running animation by `dt` and lays out.
    ///
    /// Completion effects run within this call: a finished appearance moves
    /// to [`InteractionState::WaitingSelection`], a finished disappearance
    /// hides the surface and notifies the dismiss listener, and a finished
    /// magnification shows the caption of the selected reaction.
    pub fn advance(&mut self, dt: Duration) -> FrameResult {
        let Some(mut animation) = self.animation.take() else {
            return FrameResult::default();
        };
        animation.advance(dt);
        self.apply(&animation);
        if !animation.is_finished() {
            self.animation = Some(animation);
            self.layout();
            return FrameResult {
                animating: true,
                dismissed: false,
            };
        }
        self.layout();

        match *animation.kind() {
            AnimationKind::Boundary {
                boundary: Boundary::Appear,
                ..
            } => {
                self.set_state(InteractionState::WaitingSelection);
                FrameResult {
                    animating: self.animation.is_some(),
                    dismissed: false,
                }
            }
            AnimationKind::Boundary {
                boundary: Boundary::Disappear,
                ..
            } => {
                self.set_state(None);
                if let Some(listener) = self.dismiss_listener.as_mut() {
                    listener();
                }
                FrameResult {
                    animating: false,
                    dismissed: true,
                }
            }
            AnimationKind::Size {
                selected: Some(index),
                ..
            } => {
                if let Some(text) = self.config.caption_for(index) {
                    self.caption.show(text);
                    self.layout();
                }
                FrameResult::default()
            }
            AnimationKind::Size { selected: None, .. } => FrameResult::default(),
        }
    }

    /// Positions every child from the geometry and the current icon sizes.
    pub fn layout(&mut self) {
        self.background
            .layout(self.geometry.bounds(), self.geometry.metrics.corner_radius);

        let sizes: IconSizeList = self.icons.iter().map(ReactionIcon::size).collect();
        let frames: SmallVec<[Rect; INLINE_ICONS]> =
            self.geometry.row_frames(sizes, 0.0).collect();
        for (icon, frame) in self.icons.iter_mut().zip(frames.iter()) {
            icon.layout(*frame);
        }

        if let Some(InteractionState::Selected(index)) = self.state {
            if let Some(frame) = frames.get(index) {
                if self.caption.is_visible() {
                    let size = self.caption.measure(self.measure.as_ref());
                    self.caption.layout_above(*frame, size);
                }
            }
        }
    }

    /// Paints the background, the icons and the caption, in that order.
    ///
    /// Paints nothing while hidden.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }
        self.background.paint(canvas);
        for icon in &self.icons {
            icon.paint(canvas);
        }
        if self.caption.is_visible() {
            self.caption.paint(canvas);
        }
    }

    /// Calls `f` on the background, every icon and the caption.
    pub fn for_each_child(&mut self, mut f: impl FnMut(&mut dyn PopupChild)) {
        f(&mut self.background);
        for icon in &mut self.icons {
            f(icon);
        }
        f(&mut self.caption);
    }

    fn recompute_geometry(&mut self) {
        let offset = self.screen_origin.to_vec2();
        let (anchor, first_touch) = match &self.session {
            Some(session) => (
                Anchor::new(session.anchor().origin - offset, session.anchor().size),
                session.first_touch() - offset,
            ),
            None => (Anchor::default(), Point::ZERO),
        };
        self.geometry = PopupGeometry::compute(&self.config, &anchor, first_touch, self.container);
        log::debug!(
            "reaction popup placed at {:?}, size {:?}, captions: {}",
            self.geometry.origin,
            self.geometry.metrics.size,
            self.config.has_captions()
        );
    }
}
