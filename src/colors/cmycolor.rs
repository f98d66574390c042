//! CMY, the subtractive complement of RGB: each ink absorbs one additive primary. This is the naive
//! device-independent form, without any ink or paper model, so it is exactly one minus RGB.

use crate::colors::RGBColor;
use crate::coord::Coord;

/// A color as amounts of cyan, magenta, and yellow ink, each from 0 to 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYColor {
    /// Cyan, absorbing red.
    pub c: f64,
    /// Magenta, absorbing green.
    pub m: f64,
    /// Yellow, absorbing blue.
    pub y: f64,
}

impl CMYColor {
    /// Converts from RGB on the 0-255 scale.
    pub fn from_rgb(rgb: RGBColor) -> CMYColor {
        let unit = Coord::from(rgb) / 255;
        CMYColor {
            c: 1.0 - unit.x,
            m: 1.0 - unit.y,
            y: 1.0 - unit.z,
        }
    }

    /// Converts to RGB on the 0-255 scale.
    pub fn to_rgb(&self) -> RGBColor {
        let unit = Coord {
            x: 1.0 - self.c,
            y: 1.0 - self.m,
            z: 1.0 - self.y,
        };
        RGBColor::from(unit * 255)
    }
}

impl From<Coord> for CMYColor {
    fn from(c: Coord) -> CMYColor {
        CMYColor {
            c: c.x,
            m: c.y,
            y: c.z,
        }
    }
}

impl From<CMYColor> for Coord {
    fn from(val: CMYColor) -> Self {
        Coord {
            x: val.c,
            y: val.m,
            z: val.y,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_cmy_rgb_conversion() {
        let cmy = CMYColor::from_rgb(RGBColor {
            r: 255.,
            g: 51.,
            b: 0.,
        });
        assert_eq!(cmy.c, 0.0);
        assert!((cmy.m - 0.8).abs() <= 1e-12);
        assert_eq!(cmy.y, 1.0);
        let rgb = cmy.to_rgb();
        assert!((rgb.g - 51.).abs() <= 1e-9);
        assert_eq!(rgb.b, 0.0);
    }
}
