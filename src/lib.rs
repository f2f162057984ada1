//! colorsync keeps one color synchronized across its RGB, CIE-XYZ and CMYK
//! representations.
//!
//! [`convert`] holds the pure conversions between the representations.
//! [`ColorSync`] owns the canonical color, validates values proposed from
//! any representation and pushes the re-derived representations to a
//! [`DisplaySurface`].

#![deny(missing_docs)]

mod color;
pub mod convert;
mod error;
mod gamut;
mod math;
mod models;
pub mod parse;
mod proposal;
mod sync;


pub use color::{Clip, Component, Space};
pub use error::{ParseError, ProposalError, RangeViolation};
pub use gamut::GAMUT_EPSILON;
pub use models::{Cmyk, Rgb8, Srgb, SrgbLinear, Xyz};
pub use proposal::Proposal;
pub use sync::{
    ColorSync, DisplaySurface, Displays, IgnoreReason, OutOfGamutWarning, Outcome, State, Update,
};
