//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, A\*, and B\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `L`, `a`,
//! and `b` in this module. Every Delta E formula works on CIELAB, so any two colors being compared
//! end up here first.

use crate::colors::XYZColor;
use crate::consts::{CIE_E, CIE_K};
use crate::coord::Coord;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is the lowest visible value and gives
    /// black, whereas 100 is the value of diffuse white: it is perhaps possible to have a higher
    /// value for reflective surfaces.
    pub l: f64,
    /// The first opponent color axis. By convention, this is usually between -128 and 127, with -128
    /// being fully green and 127 being fully magenta, but note that it is still possible to create
    /// "imaginary" colors (ones that cannot normally be seen by the human eye).
    pub a: f64,
    /// The second opponent color axis. This is, like `a`, between -128 and 127 by convention for most
    /// visible colors. -128 is fully blue; 127 is fully yellow.
    pub b: f64,
}

impl CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB, relative to the given reference white.
    pub fn from_xyz(xyz: XYZColor, white: [f64; 3]) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        // the linear segment near black avoids the infinite slope of the cube root at 0
        let f = |t: f64| {
            if t > CIE_E {
                t.cbrt()
            } else {
                (CIE_K * t + 16.0) / 116.0
            }
        };
        let fx = f(xyz.x / white[0]);
        let fy = f(xyz.y / white[1]);
        let fz = f(xyz.z / white[2]);

        // note how a and b are opponent color axes
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Returns the XYZ color that corresponds to this one under the given reference white.
    pub fn to_xyz(&self, white: [f64; 3]) -> XYZColor {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;
        let f_inv = |t: f64| {
            let cubed = t * t * t;
            if cubed > CIE_E {
                cubed
            } else {
                (116.0 * t - 16.0) / CIE_K
            }
        };
        // L is checked directly rather than through fy so that the two segments meet exactly
        let y = if self.l > CIE_K * CIE_E {
            fy * fy * fy
        } else {
            self.l / CIE_K
        };
        XYZColor {
            x: white[0] * f_inv(fx),
            y: white[1] * y,
            z: white[2] * f_inv(fz),
        }
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<CIELABColor> for Coord {
    fn from(val: CIELABColor) -> Self {
        Coord {
            x: val.l,
            y: val.a,
            z: val.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    const D50: [f64; 3] = [0.96422, 1.0, 0.82521];

    #[test]
    fn test_cielab_xyz_conversion_d50() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.2,
            z: 0.6,
        };
        let lab = CIELABColor::from_xyz(xyz, D50);
        assert!((lab.l - 51.8372115).abs() <= 1e-6);
        assert!((lab.a - 80.5030113).abs() <= 1e-6);
        assert!((lab.b + 62.8817576).abs() <= 1e-6);
        let xyz2 = lab.to_xyz(D50);
        assert!((xyz.x - xyz2.x).abs() <= 1e-10);
        assert!((xyz.y - xyz2.y).abs() <= 1e-10);
        assert!((xyz.z - xyz2.z).abs() <= 1e-10);
    }

    #[test]
    fn test_white_and_dark_colors() {
        let white = XYZColor {
            x: D50[0],
            y: D50[1],
            z: D50[2],
        };
        let lab = CIELABColor::from_xyz(white, D50);
        assert!((lab.l - 100.0).abs() <= 1e-10);
        assert!(lab.a.abs() <= 1e-10);
        assert!(lab.b.abs() <= 1e-10);
        // the linear segment, on both sides of the conversion
        let dark = XYZColor {
            x: 0.002,
            y: 0.003,
            z: 0.001,
        };
        let lab = CIELABColor::from_xyz(dark, D50);
        assert!(lab.l < 8.0);
        let back = lab.to_xyz(D50);
        assert!(Coord::from(back).euclidean_distance(&Coord::from(dark)) <= 1e-12);
    }
}
