// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Phase of the reaction surface while it is shown.
///
/// The surface stores an `Option<InteractionState>`; `None` means the popup
/// is not shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Sliding and fading in; pointer moves are ignored.
    Appearing,
    /// Shown with every reaction at its resting size.
    WaitingSelection,
    /// The reaction at this index is magnified under the pointer.
    Selected(usize),
    /// Sliding and fading out, remembering the selection it closed with.
    Disappearing(Option<usize>),
}

impl InteractionState {
    /// Index of the selected reaction, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match *self {
            Self::Selected(index) => Some(index),
            Self::Disappearing(selected) => selected,
            Self::Appearing | Self::WaitingSelection => None,
        }
    }

    /// Returns `true` for the two boundary states.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::Appearing | Self::Disappearing(_))
    }
}
