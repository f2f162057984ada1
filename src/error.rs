//! Errors reported for rejected proposals.

use thiserror::Error;

use crate::color::{Component, Space};

/// Raw input text could not be turned into a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A channel's text is not a valid number.
    #[error("{space} {channel} is not a valid number: {text:?}")]
    Number {
        /// The representation the text was entered for.
        space: Space,
        /// The channel the text was entered for.
        channel: &'static str,
        /// The offending text.
        text: String,
    },
    /// The wrong number of channels was given.
    #[error("{space} takes {expected} values, got {found}")]
    Arity {
        /// The representation the values were entered for.
        space: Space,
        /// The number of channels of the representation.
        expected: usize,
        /// The number of values given.
        found: usize,
    },
    /// The text is not a `#rgb` or `#rrggbb` color.
    #[error("not a hex color: {text:?}")]
    Hex {
        /// The offending text.
        text: String,
    },
}

/// A value parsed fine but is outside the domain of its representation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{space} {channel} must be between {min} and {max}, got {value}")]
pub struct RangeViolation {
    /// The representation the value was proposed in.
    pub space: Space,
    /// The first channel that is out of range.
    pub channel: &'static str,
    /// The out of range value.
    pub value: Component,
    /// The lower bound of the channel.
    pub min: Component,
    /// The upper bound of the channel.
    pub max: Component,
}

/// Why a proposal was rejected. The canonical color is unchanged and no
/// display is refreshed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProposalError {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// See [`RangeViolation`].
    #[error(transparent)]
    Range(#[from] RangeViolation),
}
