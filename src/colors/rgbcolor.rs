//! RGB colors, in whichever working space they were encoded. Channels are kept as floats on the
//! familiar 0-255 scale rather than being rounded to bytes, so that a round trip through XYZ loses
//! nothing but the final clip into the gamut. Decoding goes channel / 255, then the space's transfer
//! curve, then the matrix; encoding is the exact reverse, with the clip at the very end.

use crate::bound::Bound;
use crate::colors::XYZColor;
use crate::coord::Coord;
use crate::rgb_spaces::RgbSpaceDef;

/// An encoded RGB triple. What the numbers mean depends on the working space, which
/// [`ColorValue`](crate::colors::ColorValue) carries alongside.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, 0 to 255.
    pub r: f64,
    /// The green channel, 0 to 255.
    pub g: f64,
    /// The blue channel, 0 to 255.
    pub b: f64,
}

impl RGBColor {
    /// Encodes an XYZ color, which must already be relative to the space's own white point, and
    /// clips the result into the gamut.
    pub fn from_xyz(xyz: XYZColor, space: &RgbSpaceDef) -> RGBColor {
        let linear = xyz.transform(&space.xyz_to_rgb);
        let encoded = Coord {
            x: space.curve.encode(linear.x),
            y: space.curve.encode(linear.y),
            z: space.curve.encode(linear.z),
        };
        let rgb = RGBColor::from(encoded * 255);
        if rgb.in_bounds() {
            rgb
        } else {
            tracing::trace!(?rgb, space = %space.space, "Clipping color outside the gamut");
            rgb.clamp()
        }
    }

    /// Decodes to XYZ relative to the space's own white point.
    pub fn to_xyz(&self, space: &RgbSpaceDef) -> XYZColor {
        let unit = Coord::from(*self) / 255;
        XYZColor {
            x: space.curve.decode(unit.x),
            y: space.curve.decode(unit.y),
            z: space.curve.decode(unit.z),
        }
        .transform(&space.rgb_to_xyz)
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(val: RGBColor) -> Self {
        Coord {
            x: val.r,
            y: val.g,
            z: val.b,
        }
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 255.), (0., 255.), (0., 255.)]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::rgb_spaces::{RgbSpace, RGB_SPACES};

    #[test]
    fn test_srgb_primaries() {
        let srgb = RgbSpace::Srgb.definition().unwrap();
        let white = RGBColor {
            r: 255.,
            g: 255.,
            b: 255.,
        }
        .to_xyz(&srgb);
        assert!((white.x - 0.95047).abs() <= 1e-12);
        assert!((white.y - 1.0).abs() <= 1e-12);
        assert!((white.z - 1.08883).abs() <= 1e-12);
        let red = RGBColor {
            r: 255.,
            g: 0.,
            b: 0.,
        }
        .to_xyz(&srgb);
        assert!((red.x - 0.4124564).abs() <= 1e-6);
        assert!((red.y - 0.2126729).abs() <= 1e-6);
        assert!((red.z - 0.0193339).abs() <= 1e-6);
    }

    #[test]
    fn test_round_trip_in_every_space() {
        let color = RGBColor {
            r: 200.,
            g: 100.,
            b: 50.,
        };
        for space in RGB_SPACES.iter() {
            let def = space.definition().unwrap();
            let back = RGBColor::from_xyz(color.to_xyz(&def), &def);
            assert!(Coord::from(back).euclidean_distance(&Coord::from(color)) <= 1e-6);
        }
    }

    #[test]
    fn test_out_of_gamut_is_clipped() {
        let srgb = RgbSpace::Srgb.definition().unwrap();
        // far more saturated green than sRGB can show
        let rgb = RGBColor::from_xyz(
            XYZColor {
                x: 0.1,
                y: 0.6,
                z: 0.05,
            },
            &srgb,
        );
        assert!(rgb.in_bounds());
        assert_eq!(rgb.r, 0.0);
        assert_eq!(rgb.b, 0.0);
        assert!(rgb.g > 200.0 && rgb.g <= 255.0);
    }
}
