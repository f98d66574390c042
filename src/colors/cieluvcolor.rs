//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV is very similar to CIELAB, but with the difference that u and v are roughly
//! equivalent to red and green and luminance is then used to calculate the blue part.

use crate::colors::XYZColor;
use crate::consts::{CIE_E, CIE_K};
use crate::coord::Coord;

/// A similar color system to CIELAB, adapted at the same time and with similar goals. It attempts to
/// be an easy-to-convert color space from XYZ that approaches perceptual uniformity. U and V
/// represent chromaticity and roughly equate to CIELAB's A and B, but they're scaled differently and
/// act slightly differently. These coordinates are often referred to as the CIE 1976 UCS (uniform
/// chromaticity scale) diagram, and they're good descriptors of chromaticity.
/// # Example
///
/// ```
/// # use tristimulus::colors::{CIELUVColor, XYZColor};
/// let d50 = [0.96422, 1.0, 0.82521];
/// let white = CIELUVColor::from_xyz(XYZColor{x: d50[0], y: d50[1], z: d50[2]}, d50);
/// assert!((white.l - 100.).abs() <= 1e-10);
/// assert!(white.u.abs() <= 1e-10);
/// assert!(white.v.abs() <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The luminance component of LUV. Ranges from 0 to 100 by definition.
    pub l: f64,
    /// The component of LUV that roughly equates to how red the color is vs. how green it is.
    pub u: f64,
    /// The component of LUV that roughly equates to how yellow vs. blue the color is.
    pub v: f64,
}

/// The u' and v' chromaticities of the 1976 UCS diagram. Black has no chromaticity; it is put at
/// the origin rather than dividing by zero.
fn uv_prime(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denom = x + 15.0 * y + 3.0 * z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

impl CIELUVColor {
    /// Given an XYZ color and its reference white, gets a new CIELUV color.
    pub fn from_xyz(xyz: XYZColor, white: [f64; 3]) -> CIELUVColor {
        // https://en.wikipedia.org/wiki/CIELUV
        let (u_prime_n, v_prime_n) = uv_prime(white[0], white[1], white[2]);
        let (u_prime, v_prime) = uv_prime(xyz.x, xyz.y, xyz.z);

        let y_scaled = xyz.y / white[1];
        let l = if y_scaled > CIE_E {
            116.0 * y_scaled.cbrt() - 16.0
        } else {
            CIE_K * y_scaled
        };

        CIELUVColor {
            l,
            u: 13.0 * l * (u_prime - u_prime_n),
            v: 13.0 * l * (v_prime - v_prime_n),
        }
    }

    /// Returns the XYZ color that matches this one under the given reference white. Zero or
    /// negative lightness is black.
    pub fn to_xyz(&self, white: [f64; 3]) -> XYZColor {
        if self.l <= 0.0 {
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }
        let (u_prime_n, v_prime_n) = uv_prime(white[0], white[1], white[2]);
        let u_prime = self.u / (13.0 * self.l) + u_prime_n;
        let v_prime = self.v / (13.0 * self.l) + v_prime_n;

        let y = if self.l > CIE_K * CIE_E {
            white[1] * ((self.l + 16.0) / 116.0).powi(3)
        } else {
            white[1] * self.l / CIE_K
        };
        if v_prime == 0.0 {
            return XYZColor { x: 0.0, y, z: 0.0 };
        }

        XYZColor {
            x: y * 9.0 * u_prime / (4.0 * v_prime),
            y,
            z: y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime),
        }
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl From<CIELUVColor> for Coord {
    fn from(val: CIELUVColor) -> Self {
        Coord {
            x: val.l,
            y: val.u,
            z: val.v,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    const D50: [f64; 3] = [0.96422, 1.0, 0.82521];
    const D65: [f64; 3] = [0.95047, 1.0, 1.08883];

    #[test]
    fn test_cieluv_xyz_conversion_d50() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.2,
            z: 0.6,
        };
        let luv = CIELUVColor::from_xyz(xyz, D50);
        assert!((luv.l - 51.8372115).abs() <= 1e-6);
        assert!((luv.u - 66.3992854).abs() <= 1e-6);
        assert!((luv.v + 95.6372707).abs() <= 1e-6);
        let xyz2 = luv.to_xyz(D50);
        assert!(Coord::from(xyz).euclidean_distance(&Coord::from(xyz2)) <= 1e-10);
    }

    #[test]
    fn test_cieluv_xyz_conversion_d65() {
        let xyz = XYZColor {
            x: 0.3,
            y: 0.53,
            z: 0.65,
        };
        let luv = CIELUVColor::from_xyz(xyz, D65);
        let xyz2 = luv.to_xyz(D65);
        assert!(Coord::from(xyz).euclidean_distance(&Coord::from(xyz2)) <= 1e-10);
    }

    #[test]
    fn test_black() {
        let black = XYZColor {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        let luv = CIELUVColor::from_xyz(black, D50);
        assert_eq!(luv.l, 0.0);
        assert_eq!(luv.to_xyz(D50), black);
        let negative = CIELUVColor {
            l: -3.0,
            u: 10.0,
            v: 10.0,
        };
        assert_eq!(negative.to_xyz(D50), black);
    }
}
