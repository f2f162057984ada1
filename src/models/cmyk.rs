//! Model a color with the subtractive CMYK notation.

use std::fmt;

use crate::{color::Component, math::round_to};

colorsync_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and black channels, each
    /// in `[0, 1]`.
    pub struct Cmyk {
        /// The cyan channel of the color.
        cyan: Component,
        /// The magenta channel of the color.
        magenta: Component,
        /// The yellow channel of the color.
        yellow: Component,
        /// The black (key) channel of the color.
        black: Component,
    }
}

impl Cmyk {
    /// Full black ink and nothing else.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from percentages in `[0, 100]`.
    pub fn from_percent(percent: [Component; 4]) -> Self {
        percent.map(|value| value / 100.0).into()
    }

    /// The display scale of this color: percentages rounded to one decimal.
    pub fn to_percent(&self) -> [Component; 4] {
        self.to_array().map(|value| round_to(value * 100.0, 1))
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c, m, y, k] = self.to_percent();
        write!(f, "cmyk({c:.1}%, {m:.1}%, {y:.1}%, {k:.1}%)")
    }
}
