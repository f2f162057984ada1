//! Scalar type, representation kinds and clip flags shared by every model.

use std::fmt;

use bitflags::bitflags;

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

/// The three interchangeable representations of the canonical color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Gamma encoded sRGB, displayed as 8-bit integers.
    Rgb = 0,
    /// CIE-XYZ with a D65 white point, scaled so that white has `Y = 100`.
    Xyz = 1,
    /// Subtractive cyan, magenta, yellow and black.
    Cmyk = 2,
}

impl Space {
    /// Every representation, in display order.
    pub const ALL: [Space; 3] = [Space::Rgb, Space::Xyz, Space::Cmyk];

    /// The number of channels a value in this representation has.
    pub fn channel_count(&self) -> usize {
        match self {
            Space::Rgb | Space::Xyz => 3,
            Space::Cmyk => 4,
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Space::Rgb => "RGB",
            Space::Xyz => "XYZ",
            Space::Cmyk => "CMYK",
        })
    }
}

bitflags! {
    /// Marks the sRGB channels that had to be clamped into `[0, 1]`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Clip : u8 {
        /// Set when the red channel was out of range.
        const RED = 1 << 0;
        /// Set when the green channel was out of range.
        const GREEN = 1 << 1;
        /// Set when the blue channel was out of range.
        const BLUE = 1 << 2;
    }
}

impl Clip {
    /// Returns true if any channel was clipped.
    pub fn is_clipped(&self) -> bool {
        !self.is_empty()
    }
}
