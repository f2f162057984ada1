//! Lenient parsing of channel values entered as text.
//!
//! Numbers may be surrounded by whitespace and may use either `.` or `,` as
//! the decimal separator. `NaN` and infinities are not numbers here.

use crate::{
    color::{Component, Space},
    error::ParseError,
    models::Rgb8,
};

fn number_error(space: Space, channel: &'static str, text: &str) -> ParseError {
    ParseError::Number {
        space,
        channel,
        text: text.to_string(),
    }
}

/// Parse a decimal number for the given channel.
pub fn parse_number(space: Space, channel: &'static str, text: &str) -> Result<Component, ParseError> {
    text.trim()
        .replace(',', ".")
        .parse::<Component>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| number_error(space, channel, text))
}

/// Parse a whole number for the given channel. Range checks happen later, so
/// any value that fits an `i64` is accepted.
pub fn parse_integer(space: Space, channel: &'static str, text: &str) -> Result<i64, ParseError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| number_error(space, channel, text))
}

/// Parse a `#rrggbb` or `#rgb` hex color. The leading `#` is optional.
pub fn parse_hex(text: &str) -> Result<Rgb8, ParseError> {
    let error = || ParseError::Hex {
        text: text.to_string(),
    };

    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(error());
    }

    let channel = |i: usize, width: usize| {
        u8::from_str_radix(&hex[i * width..(i + 1) * width], 16).map_err(|_| error())
    };

    match hex.len() {
        // #rgb, each digit is repeated.
        3 => Ok(Rgb8::new(
            channel(0, 1)? * 17,
            channel(1, 1)? * 17,
            channel(2, 1)? * 17,
        )),
        6 => Ok(Rgb8::new(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
        _ => Err(error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(parse_number(Space::Xyz, "X", "41.25"), Ok(41.25));
        assert_eq!(parse_number(Space::Xyz, "X", "  41,25 "), Ok(41.25));
        assert_eq!(parse_number(Space::Xyz, "X", "7"), Ok(7.0));
        assert_eq!(parse_number(Space::Xyz, "X", "-1"), Ok(-1.0));
    }

    #[test]
    fn bad_numbers() {
        for text in ["", "abc", "1.2.3", "1,2,3", "NaN", "inf", "-infinity", "1e"] {
            assert_eq!(
                parse_number(Space::Cmyk, "Cyan", text),
                Err(ParseError::Number {
                    space: Space::Cmyk,
                    channel: "Cyan",
                    text: text.to_string(),
                }),
                "{text:?}"
            );
        }
    }

    #[test]
    fn integers() {
        assert_eq!(parse_integer(Space::Rgb, "Red", " 255 "), Ok(255));
        assert_eq!(parse_integer(Space::Rgb, "Red", "300"), Ok(300));
        assert_eq!(parse_integer(Space::Rgb, "Red", "-4"), Ok(-4));
        assert!(parse_integer(Space::Rgb, "Red", "12.5").is_err());
        assert!(parse_integer(Space::Rgb, "Red", "x").is_err());
    }

    #[test]
    fn hex() {
        assert_eq!(parse_hex("#d2691e"), Ok(Rgb8::new(210, 105, 30)));
        assert_eq!(parse_hex("D2691E"), Ok(Rgb8::new(210, 105, 30)));
        assert_eq!(parse_hex(" #fff "), Ok(Rgb8::new(255, 255, 255)));
        assert_eq!(parse_hex("#0a0"), Ok(Rgb8::new(0, 170, 0)));
    }

    #[test]
    fn bad_hex() {
        for text in ["", "#", "#ff", "#fffff", "#gggggg", "#ff00ff00", "#+f+f+f"] {
            assert_eq!(
                parse_hex(text),
                Err(ParseError::Hex {
                    text: text.to_string()
                }),
                "{text:?}"
            );
        }
    }
}
