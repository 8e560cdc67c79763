// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by [`ReactionOptions::resolve`](crate::ReactionOptions::resolve).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// No reaction was configured.
    NoReactions,
    /// Exactly one reaction was configured.
    ///
    /// Shrinking the other icons to make room for the magnified one needs at
    /// least one other icon, so a single reaction cannot be laid out.
    SingleReaction,
    /// A dimension is not finite, or is out of range for its kind.
    ///
    /// Sizes and durations must be strictly positive; margins, paddings and
    /// corner radii must not be negative.
    InvalidDimension {
        /// Name of the offending option.
        name: &'static str,
        /// The rejected value (durations are reported in seconds).
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoReactions => f.write_str("no reactions configured"),
            Self::SingleReaction => f.write_str("a reaction picker needs at least two reactions"),
            Self::InvalidDimension { name, value } => {
                write!(f, "invalid value {value} for `{name}`")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_option() {
        let err = ConfigError::InvalidDimension {
            name: "reaction_size",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid value -1 for `reaction_size`");
    }
}
