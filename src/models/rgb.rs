//! Model a color in the sRGB color space.

use std::fmt;

use crate::{
    color::Component,
    math::{transform, transform_3x3, Transform},
};

colorsync_macros::gen_model! {
    /// A gamma encoded sRGB color with every channel in `[0, 1]`. This is
    /// the canonical value all other representations are derived from.
    pub struct Srgb {
        /// The red channel of the color.
        red: Component,
        /// The green channel of the color.
        green: Component,
        /// The blue channel of the color.
        blue: Component,
    }
}

colorsync_macros::gen_model! {
    /// An sRGB color with no gamma encoding.
    pub struct SrgbLinear {
        /// The red channel of the color.
        red: Component,
        /// The green channel of the color.
        green: Component,
        /// The blue channel of the color.
        blue: Component,
    }
}

impl Srgb {
    /// Pure white, the initial canonical color.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Convert this color from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.map(|value| {
            if value <= 0.04045 {
                value / 12.92
            } else {
                ((value + 0.055) / 1.055).powf(2.4)
            }
        })
        .to_array()
        .into()
    }

    /// The 8-bit display view of this color, `round(channel * 255)`.
    pub fn to_rgb8(&self) -> Rgb8 {
        let [red, green, blue] = self
            .to_array()
            .map(|value| (value.clamp(0.0, 1.0) * 255.0).round() as u8);
        Rgb8::new(red, green, blue)
    }
}

impl SrgbLinear {
    /// Convert this color from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.map(|value| {
            if value <= 0.0031308 {
                12.92 * value
            } else {
                1.055 * value.powf(1.0 / 2.4) - 0.055
            }
        })
        .to_array()
        .into()
    }

    /// Convert to CIE-XYZ (D65) in unit scale, where white has `Y = 1`.
    pub fn to_xyz_unit(&self) -> [Component; 3] {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.412453, 0.212671, 0.019334,
            0.357580, 0.715160, 0.119193,
            0.180423, 0.072169, 0.950227,
        );

        transform(&TO_XYZ, self.to_array())
    }

    /// Convert from CIE-XYZ (D65) in unit scale. The result may be outside
    /// the sRGB gamut.
    pub fn from_xyz_unit(xyz: [Component; 3]) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404813432005266, -0.9692549499965684,  0.05564663913517716,
            -1.5371515162713185,  1.8759900014898907, -0.20404133836651125,
            -0.49853632616888793, 0.04155592655829283, 1.0573110696453445,
        );

        transform(&FROM_XYZ, xyz).into()
    }
}

/// The 8-bit integer view of an sRGB color, as shown on RGB displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
}

impl Rgb8 {
    /// Create a new 8-bit color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Return the channels as an array.
    pub fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Convert to the canonical floating point form.
    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Format the color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl From<Rgb8> for Srgb {
    fn from(value: Rgb8) -> Self {
        value.to_srgb()
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
