// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear, host-clocked animations.
//!
//! The surface owns at most one [`Animation`] at a time. The host advances it
//! with frame deltas; nothing here reads a clock.

use core::time::Duration;

use smallvec::SmallVec;

use crate::ChildVisuals;

/// Inline capacity for per-icon size lists.
pub(crate) const INLINE_ICONS: usize = 8;

/// Per-icon edge lengths, in row order.
pub type IconSizeList = SmallVec<[f64; INLINE_ICONS]>;

/// Direction of a boundary animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Slides up from one popup height below and fades in.
    Appear,
    /// Slides down by one popup height and fades out.
    Disappear,
}

impl Boundary {
    /// Child translation and opacity at `progress` for a popup of `height`.
    #[must_use]
    pub fn visuals_at(self, height: f64, progress: f64) -> ChildVisuals {
        let (from, to, alpha) = match self {
            Self::Appear => (height, 0.0, progress),
            Self::Disappear => (0.0, height, 1.0 - progress),
        };
        ChildVisuals {
            translation_y: lerp(from, to, progress),
            alpha: opacity(alpha),
        }
    }
}

/// What an [`Animation`] drives.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationKind {
    /// Translation and opacity of every child.
    Boundary {
        /// Direction.
        boundary: Boundary,
        /// Popup height, the length of the slide.
        height: f64,
    },
    /// Icon edge lengths, towards a selection.
    Size {
        /// Sizes when the animation started.
        from: IconSizeList,
        /// Target sizes.
        to: IconSizeList,
        /// Selection the target sizes were computed for.
        selected: Option<usize>,
    },
}

impl AnimationKind {
    /// Icon sizes at `progress` for a size animation, `None` otherwise.
    #[must_use]
    pub fn sizes_at(&self, progress: f64) -> Option<IconSizeList> {
        match self {
            Self::Size { from, to, .. } => Some(
                from.iter()
                    .zip(to.iter())
                    .map(|(&from, &to)| lerp(from, to, progress))
                    .collect(),
            ),
            Self::Boundary { .. } => None,
        }
    }
}

/// A linear animation over a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    kind: AnimationKind,
    duration: Duration,
    elapsed: Duration,
}

impl Animation {
    /// Creates an animation at progress 0.
    #[must_use]
    pub fn new(kind: AnimationKind, duration: Duration) -> Self {
        Self {
            kind,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// What this animation drives.
    #[must_use]
    pub fn kind(&self) -> &AnimationKind {
        &self.kind
    }

    /// Configured duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time advanced so far, capped at the duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear progress in `0..=1`. A zero duration is always complete.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Moves the animation forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Jumps to the end.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }

    /// Returns `true` once progress has reached 1.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Linear interpolation from `from` to `to`, exact at both ends.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "opacity in 0..=1 only needs f32 precision"
)]
fn opacity(alpha: f64) -> f32 {
    alpha as f32
}
