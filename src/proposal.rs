//! Candidate values proposed by one of the representations, and the range
//! checks they go through before becoming canonical.

use crate::{
    color::{Clip, Component, Space},
    convert,
    error::{ParseError, RangeViolation},
    models::{Cmyk, Rgb8, Srgb, Xyz},
    parse::{parse_integer, parse_number},
};

/// A new value proposed from one of the representations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Proposal {
    /// 8-bit RGB channels, each in `[0, 255]`.
    Rgb([i64; 3]),
    /// XYZ channels inside the box spanned by [`Xyz::D65_WHITE`].
    Xyz([Component; 3]),
    /// CMYK channels as fractions in `[0, 1]`.
    Cmyk([Component; 4]),
    /// CMYK channels as percentages in `[0, 100]`, the display scale.
    CmykPercent([Component; 4]),
}

/// Relative slack on the upper bounds. Derived views of white can land a few
/// ulps above the D65 corner, and they have to validate when proposed back.
const BOUND_TOLERANCE: Component = Component::EPSILON * 16.0;

/// Check every value against `[0, max]`, reporting the first that is not.
fn check_range(
    space: Space,
    channels: &[&'static str],
    values: &[Component],
    max: &[Component],
) -> Result<(), RangeViolation> {
    let violation = channels
        .iter()
        .zip(values)
        .zip(max)
        .find(|((_, value), max)| !(**value >= 0.0 && **value <= **max * (1.0 + BOUND_TOLERANCE)));

    match violation {
        Some(((&channel, &value), &max)) => Err(RangeViolation {
            space,
            channel,
            value,
            min: 0.0,
            max,
        }),
        None => Ok(()),
    }
}

impl Proposal {
    /// Parse raw text fields, one per channel. RGB channels must be whole
    /// numbers; CMYK channels are read as percentages.
    pub fn parse(space: Space, fields: &[&str]) -> Result<Self, ParseError> {
        if fields.len() != space.channel_count() {
            return Err(ParseError::Arity {
                space,
                expected: space.channel_count(),
                found: fields.len(),
            });
        }

        match space {
            Space::Rgb => {
                let mut values = [0; 3];
                for ((value, field), channel) in values.iter_mut().zip(fields).zip(Srgb::CHANNELS) {
                    *value = parse_integer(space, channel, field)?;
                }
                Ok(Proposal::Rgb(values))
            }
            Space::Xyz => {
                let mut values = [0.0; 3];
                for ((value, field), channel) in values.iter_mut().zip(fields).zip(Xyz::CHANNELS) {
                    *value = parse_number(space, channel, field)?;
                }
                Ok(Proposal::Xyz(values))
            }
            Space::Cmyk => {
                let mut values = [0.0; 4];
                for ((value, field), channel) in values.iter_mut().zip(fields).zip(Cmyk::CHANNELS) {
                    *value = parse_number(space, channel, field)?;
                }
                Ok(Proposal::CmykPercent(values))
            }
        }
    }

    /// The representation this proposal came from.
    pub fn space(&self) -> Space {
        match self {
            Proposal::Rgb(_) => Space::Rgb,
            Proposal::Xyz(_) => Space::Xyz,
            Proposal::Cmyk(_) | Proposal::CmykPercent(_) => Space::Cmyk,
        }
    }

    /// The upper bound of each channel. Every lower bound is zero.
    pub fn max(&self) -> &'static [Component] {
        const RGB: [Component; 3] = [255.0; 3];
        const XYZ: [Component; 3] = [
            Xyz::D65_WHITE.x,
            Xyz::D65_WHITE.y,
            Xyz::D65_WHITE.z,
        ];
        const CMYK: [Component; 4] = [1.0; 4];
        const CMYK_PERCENT: [Component; 4] = [100.0; 4];

        match self {
            Proposal::Rgb(_) => &RGB,
            Proposal::Xyz(_) => &XYZ,
            Proposal::Cmyk(_) => &CMYK,
            Proposal::CmykPercent(_) => &CMYK_PERCENT,
        }
    }

    /// Check the proposal against its range.
    pub fn validate(&self) -> Result<(), RangeViolation> {
        let space = self.space();
        match self {
            Proposal::Rgb(values) => check_range(
                space,
                &Srgb::CHANNELS,
                &values.map(|v| v as Component),
                self.max(),
            ),
            Proposal::Xyz(values) => check_range(space, &Xyz::CHANNELS, values, self.max()),
            Proposal::Cmyk(values) | Proposal::CmykPercent(values) => {
                check_range(space, &Cmyk::CHANNELS, values, self.max())
            }
        }
    }

    /// Validate the proposal and convert it to a canonical color, along with
    /// any channels that had to be clipped on the way.
    pub fn resolve(&self) -> Result<(Srgb, Clip), RangeViolation> {
        self.validate()?;

        Ok(match *self {
            Proposal::Rgb([red, green, blue]) => {
                // In range, so the casts are exact.
                let rgb = Rgb8::new(red as u8, green as u8, blue as u8);
                (rgb.to_srgb(), Clip::empty())
            }
            Proposal::Xyz(values) => convert::xyz_to_rgb(&Xyz::from(values)),
            Proposal::Cmyk(values) => (convert::cmyk_to_rgb(&Cmyk::from(values)), Clip::empty()),
            Proposal::CmykPercent(values) => (
                convert::cmyk_to_rgb(&Cmyk::from_percent(values)),
                Clip::empty(),
            ),
        })
    }
}

impl From<Rgb8> for Proposal {
    fn from(value: Rgb8) -> Self {
        Proposal::Rgb(value.to_array().map(i64::from))
    }
}

impl From<Xyz> for Proposal {
    fn from(value: Xyz) -> Self {
        Proposal::Xyz(value.to_array())
    }
}

impl From<Cmyk> for Proposal {
    fn from(value: Cmyk) -> Self {
        Proposal::Cmyk(value.to_array())
    }
}
