//! Gamut checks and clipping for sRGB colors.

use crate::{
    color::{Clip, Component},
    models::Srgb,
};

/// Excursions outside `[0, 1]` smaller than this are floating point noise
/// from the matrix round trip and are not reported as clipping.
pub const GAMUT_EPSILON: Component = Component::EPSILON * 1024.0;

#[allow(clippy::manual_range_contains)]
fn in_zero_to_one(value: Component) -> bool {
    value >= -GAMUT_EPSILON && value <= 1.0 + GAMUT_EPSILON
}

// `clamp` passes NaN through, it has to become a real channel value.
fn clamp_unit(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl Srgb {
    /// Return the color with each of the channels clamped to `[0, 1]`,
    /// together with the channels that were out of range.
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> (Srgb, Clip) {
        let mut clip = Clip::empty();
        clip.set(Clip::RED, !in_zero_to_one(self.red));
        clip.set(Clip::GREEN, !in_zero_to_one(self.green));
        clip.set(Clip::BLUE, !in_zero_to_one(self.blue));

        (self.clamped(), clip)
    }

    /// Return the color with each of the channels clamped to `[0, 1]`. NaN
    /// channels become zero.
    pub fn clamped(&self) -> Srgb {
        self.map(clamp_unit)
    }

    /// Returns true if every channel is inside `[0, 1]`.
    pub fn in_gamut(&self) -> bool {
        self.to_array().into_iter().all(in_zero_to_one)
    }
}
