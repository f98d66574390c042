//! This file implements HSL: a simple transformation of an RGB space that creates a cylindrical
//! space. HSL has the same problems with perceptual uniformity and general unsuitability for exact
//! psychophysically-accurate representation as color as RGB does, but it does have the advantage
//! of being easy to display on a monitor and having some conception of common color attributes. HSL
//! and HSV are very similar but have an important difference: *value* in HSV runs from black to
//! fully saturated colors, whereas *lightness* or *luminosity* in HSL runs from black to fully
//! saturated in the middle to white at the end. This space is mathematically cylindrical, but when
//! you account for the actual differentiation of colors it forms a "bi-hexcone" model, where the hue
//! component is actually a hexagon but simply stretched into a circle.
//!
//! A special note: some implementations of HSV and HSL are circular in nature, using polar
//! coordinates explicitly. This implementation is instead hexagonal: first values are put on a
//! hexagon, and then that hexagon is "squeezed" into a circle. Converting gray into HSL or HSV will
//! give a hue of 0 degrees, although any hue could be used in its place.

use crate::colors::RGBColor;
use crate::coord::Coord;

/// A color in the HSL color space, a direct transformation of whichever RGB space the color is in.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component. Ranges from 0 to 360, as the angle in a cylindrical space. Exactly the same
    /// as the hue component of HSV.
    pub h: f64,
    /// The saturation component. Ranges between 0 and 1. Note that this is much less accurate to
    /// human perception than the chroma or saturation found in other, higher-fidelity color spaces.
    pub s: f64,
    /// The lightness component. Ranges from 0 to 1. Defined in HSL as the average of the largest and
    /// smallest color components in RGB, which sacrifices accuracy for convenience.
    pub l: f64,
}

/// Projects an RGB color with channels in 0-1 onto the hexagon, returning the hue, the largest
/// component, and the smallest component. Shared with HSV.
pub(super) fn hexagonal_hue(unit: Coord) -> (f64, f64, f64) {
    // if you tilt the RGB cube and project it into a hexagon, the equivalent of radius is simply the
    // largest component minus the smallest component
    // More info: https://en.wikipedia.org/wiki/HSL_and_HSV#Formal_derivation
    let (r, g, b) = (unit.x, unit.y, unit.z);
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let chroma = max_c - min_c;

    // hue is the proportion of the length of the hexagon through the point, treated as degrees
    let hue = if chroma == 0.0 {
        0.0
    } else if max_c == r {
        (((g - b) / chroma) * 60.0).rem_euclid(360.0)
    } else if max_c == g {
        ((b - r) / chroma) * 60.0 + 120.0
    } else {
        ((r - g) / chroma) * 60.0 + 240.0
    };
    (hue, max_c, min_c)
}

/// The inverse of the projection: the point on the hexagon with the given hue and chroma whose
/// smallest component is 0. Shared with HSV.
pub(super) fn hexagon_point(hue: f64, chroma: f64) -> Coord {
    let h = hue.rem_euclid(360.0);
    // the second-largest RGB value, where chroma is the largest because the smallest is 0
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let (r, g, b) = if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };
    Coord { x: r, y: g, z: b }
}

impl HSLColor {
    /// Converts from RGB in the same working space.
    pub fn from_rgb(rgb: RGBColor) -> HSLColor {
        let (hue, max_c, min_c) = hexagonal_hue(Coord::from(rgb) / 255);
        let chroma = max_c - min_c;
        // lightness is the average of the largest and smallest components: a double hex cone
        let lightness = (max_c + min_c) / 2.0;
        // saturation is chroma relative to the largest chroma possible at this lightness, which is
        // nothing at all once channels outside the gamut push lightness to 1 or past it
        let max_chroma = 1.0 - (2.0 * lightness - 1.0).abs();
        let saturation = if chroma == 0.0 || max_chroma <= 0.0 {
            0.0
        } else {
            chroma / max_chroma
        };
        HSLColor {
            h: hue,
            s: saturation,
            l: lightness,
        }
    }

    /// Converts back to RGB in the same working space.
    pub fn to_rgb(&self) -> RGBColor {
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        // add the same value to each component to get the correct lightness
        let offset = self.l - chroma / 2.0;
        let point = hexagon_point(self.h, chroma);
        let shifted = point
            + Coord {
                x: offset,
                y: offset,
                z: offset,
            };
        RGBColor::from(shifted * 255)
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLColor> for Coord {
    fn from(val: HSLColor) -> Self {
        Coord {
            x: val.h,
            y: val.s,
            z: val.l,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsl_rgb_conversion() {
        let red_rgb = RGBColor {
            r: 255.,
            g: 0.,
            b: 0.,
        };
        let red_hsl = HSLColor::from_rgb(red_rgb);
        assert!(red_hsl.h.abs() <= 0.0001);
        assert!((red_hsl.s - 1.0).abs() <= 0.0001);
        assert!((red_hsl.l - 0.5).abs() <= 0.0001);
        let lavender_hsl = HSLColor {
            h: 245.0,
            s: 0.5,
            l: 0.6,
        };
        let lavender_rgb = lavender_hsl.to_rgb();
        assert!((lavender_rgb.r - 110.5).abs() <= 1e-9);
        assert!((lavender_rgb.g - 102.0).abs() <= 1e-9);
        assert!((lavender_rgb.b - 204.0).abs() <= 1e-9);
    }

    #[test]
    fn test_hsl_values() {
        let hsl = HSLColor::from_rgb(RGBColor {
            r: 200.,
            g: 100.,
            b: 50.,
        });
        assert!((hsl.h - 20.0).abs() <= 1e-10);
        assert!((hsl.s - 0.6).abs() <= 1e-10);
        assert!((hsl.l - 0.4901961).abs() <= 1e-6);
        let hsl = HSLColor::from_rgb(RGBColor {
            r: 30.,
            g: 60.,
            b: 210.,
        });
        assert!((hsl.h - 230.0).abs() <= 1e-10);
        assert!((hsl.s - 0.75).abs() <= 1e-10);
    }

    #[test]
    fn test_round_trip_and_gray() {
        for &(r, g, b) in [(200., 100., 50.), (30., 60., 210.), (10., 250., 128.), (255., 0., 77.)]
            .iter()
        {
            let rgb = RGBColor { r, g, b };
            let back = HSLColor::from_rgb(rgb).to_rgb();
            assert!(Coord::from(back).euclidean_distance(&Coord::from(rgb)) <= 1e-9);
        }
        let gray = HSLColor::from_rgb(RGBColor {
            r: 128.,
            g: 128.,
            b: 128.,
        });
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
    }

    #[test]
    fn test_out_of_gamut_saturation_is_finite() {
        let hsl = HSLColor::from_rgb(RGBColor {
            r: 255.,
            g: 510.,
            b: 0.,
        });
        assert!((hsl.h - 90.0).abs() <= 1e-10);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.l, 1.0);
        let hsl = HSLColor::from_rgb(RGBColor {
            r: 600.,
            g: 300.,
            b: 300.,
        });
        assert!(hsl.s.is_finite());
        assert_eq!(hsl.s, 0.0);
    }
}
