//! Hex codes, the `#rrggbb` notation used by the web and most design tools. A hex code has no room
//! for a working space, so codes are always read as sRGB.

use regex::Regex;

use crate::colors::{ColorValue, Coordinates};
use crate::error::{ColorError, Result};

lazy_static! {
    static ref HEX_CODE: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("hex code pattern is valid");
}

/// Rounds a channel and clamps it into a byte.
fn channel_byte(value: f64) -> u8 {
    value.round().max(0.0).min(255.0) as u8
}

/// Formats an RGB color as a lowercase `#rrggbb` code, rounding and clipping each channel.
///
/// # Example
/// ```
/// # use tristimulus::colors::ColorValue;
/// # use tristimulus::hex::to_hex;
/// assert_eq!(to_hex(&ColorValue::rgb(255.0, 0.4, 300.0)).unwrap(), "#ff00ff");
/// assert!(to_hex(&ColorValue::lab(50.0, 0.0, 0.0)).is_err());
/// ```
pub fn to_hex(color: &ColorValue) -> Result<String> {
    let rgb = match &color.coords {
        Coordinates::Rgb(rgb, _) => rgb,
        other => {
            return Err(ColorError::invalid_argument(
                "color",
                format!("hex codes need an rgb color, not {}", other.kind()),
            ))
        }
    };
    color.validate()?;
    Ok(format!(
        "#{:02x}{:02x}{:02x}",
        channel_byte(rgb.r),
        channel_byte(rgb.g),
        channel_byte(rgb.b)
    ))
}

/// Parses a six-digit hex code, with or without the leading `#`, in either case.
///
/// # Example
/// ```
/// # use tristimulus::colors::ColorValue;
/// # use tristimulus::hex::from_hex;
/// assert_eq!(from_hex("#FF0000").unwrap(), ColorValue::rgb(255.0, 0.0, 0.0));
/// assert!(from_hex("#f00").is_err());
/// ```
pub fn from_hex(code: &str) -> Result<ColorValue> {
    let invalid = || ColorError::invalid_argument("hex", format!("invalid format {:?}", code));
    let captures = HEX_CODE.captures(code.trim()).ok_or_else(invalid)?;
    let mut channels = [0.0; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let digits = captures.get(i + 1).ok_or_else(invalid)?.as_str();
        *channel = f64::from(u8::from_str_radix(digits, 16).map_err(|_| invalid())?);
    }
    Ok(ColorValue::rgb(channels[0], channels[1], channels[2]))
}
