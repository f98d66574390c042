//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but does make the hue and saturation a
//! bit more meaningful than HSL.

use super::hslcolor::{hexagon_point, hexagonal_hue};
use crate::colors::RGBColor;
use crate::coord::Coord;

/// An HSV color, defining parameters for hue, saturation, and value from an RGB space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, described as an angle that ranges between 0 and 360 in degrees.
    pub h: f64,
    /// The saturation, defined as the radius of the HSV cylinder and the distance between the color
    /// and the equivalent-value grayscale. Ranges between 0 and 1.
    pub s: f64,
    /// The value, defined as the largest RGB primary value of a color, from 0 to 1.
    pub v: f64,
}

impl HSVColor {
    /// Converts from RGB in the same working space.
    pub fn from_rgb(rgb: RGBColor) -> HSVColor {
        let (hue, max_c, min_c) = hexagonal_hue(Coord::from(rgb) / 255);
        // black has no saturation: it would be a divide by 0 otherwise
        let saturation = if max_c == 0.0 {
            0.0
        } else {
            (max_c - min_c) / max_c
        };
        HSVColor {
            h: hue,
            s: saturation,
            v: max_c,
        }
    }

    /// Converts back to RGB in the same working space.
    pub fn to_rgb(&self) -> RGBColor {
        let chroma = self.v * self.s;
        let offset = self.v - chroma;
        let point = hexagon_point(self.h, chroma)
            + Coord {
                x: offset,
                y: offset,
                z: offset,
            };
        RGBColor::from(point * 255)
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl From<HSVColor> for Coord {
    fn from(val: HSVColor) -> Self {
        Coord {
            x: val.h,
            y: val.s,
            z: val.v,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsv_values() {
        let hsv = HSVColor::from_rgb(RGBColor {
            r: 200.,
            g: 100.,
            b: 50.,
        });
        assert!((hsv.h - 20.0).abs() <= 1e-10);
        assert!((hsv.s - 0.75).abs() <= 1e-10);
        assert!((hsv.v - 0.7843137).abs() <= 1e-6);
        let hsv = HSVColor::from_rgb(RGBColor {
            r: 30.,
            g: 60.,
            b: 210.,
        });
        assert!((hsv.h - 230.0).abs() <= 1e-10);
        assert!((hsv.s - 0.8571429).abs() <= 1e-6);
    }

    #[test]
    fn test_hsv_rgb_round_trip() {
        for &(r, g, b) in [(200., 100., 50.), (30., 60., 210.), (10., 250., 128.), (0., 0., 0.)]
            .iter()
        {
            let rgb = RGBColor { r, g, b };
            let back = HSVColor::from_rgb(rgb).to_rgb();
            assert!(Coord::from(back).euclidean_distance(&Coord::from(rgb)) <= 1e-9);
        }
    }

    #[test]
    fn test_named_colors() {
        let yellow = HSVColor {
            h: 60.0,
            s: 1.0,
            v: 1.0,
        }
        .to_rgb();
        assert_eq!(
            yellow,
            RGBColor {
                r: 255.,
                g: 255.,
                b: 0.
            }
        );
    }
}
