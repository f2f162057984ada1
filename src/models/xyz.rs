//! Model a color in the CIE-XYZ color space.

use std::fmt;

use crate::color::Component;

colorsync_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point, scaled so
    /// that the reference white has `Y = 100`.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl Xyz {
    /// The D65 reference white. Every sRGB color lies inside the box spanned
    /// by the origin and this point.
    #[allow(clippy::excessive_precision)]
    pub const D65_WHITE: Self = Self::new(95.0456, 100.0, 108.8754);
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xyz({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
