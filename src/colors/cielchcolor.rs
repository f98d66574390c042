//! This file implements the CIELCH color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes. Be careful not to confuse this color with
//! CIELCHuv, which uses CIELUV internally.

use super::cielabcolor::CIELABColor;
use super::{from_polar, to_polar};
use crate::coord::Coord;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
/// # Example
///
/// ```
/// # use tristimulus::colors::{CIELABColor, CIELCHColor};
/// let lab = CIELABColor{l: 50., a: 0., b: 20.};
/// let lch = CIELCHColor::from_lab(lab);
/// // pure positive b is yellow, a quarter turn around the hue circle
/// assert!((lch.c - 20.).abs() <= 1e-10);
/// assert!((lch.h - 90.).abs() <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHColor {
    /// The luminance component, identical to CIELAB's and CIELUV's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma component. Chroma is defined as the difference from the grayscale color of the same
    /// luminance (in CIELAB, essentially the distance away from the line a = b = 0). In the
    /// cylindrical space, this is equivalent to radius. It ranges from 0 to roughly 150 for most
    /// colors that are physically possible.
    pub c: f64,
    /// The hue component, in degrees. Essentially the angle in cylindrical coordinates, it ranges
    /// from 0 degrees to 360. 90 degrees corresponds to yellow, 180 corresponds to green, 270 to
    /// blue, and 360 to red.
    pub h: f64,
}

impl CIELCHColor {
    /// Converts from CIELAB: radius is sqrt(a^2 + b^2), angle is atan2(b, a).
    pub fn from_lab(lab: CIELABColor) -> CIELCHColor {
        let (c, h) = to_polar(lab.a, lab.b);
        CIELCHColor { l: lab.l, c, h }
    }

    /// Converts back to CIELAB: a = c cos h, b = c sin h.
    pub fn to_lab(&self) -> CIELABColor {
        let (a, b) = from_polar(self.c, self.h);
        CIELABColor { l: self.l, a, b }
    }
}

impl From<Coord> for CIELCHColor {
    fn from(c: Coord) -> CIELCHColor {
        CIELCHColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<CIELCHColor> for Coord {
    fn from(val: CIELCHColor) -> Self {
        Coord {
            x: val.l,
            y: val.c,
            z: val.h,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lch_lab_conversion() {
        let lab = CIELABColor {
            l: 51.8372115,
            a: 80.5030113,
            b: -62.8817576,
        };
        let lch = CIELCHColor::from_lab(lab);
        assert!((lch.c - 102.1511149).abs() <= 1e-6);
        assert!((lch.h - 322.0062268).abs() <= 1e-6);
        let lab2 = lch.to_lab();
        assert!(Coord::from(lab).euclidean_distance(&Coord::from(lab2)) <= 1e-10);
    }

    #[test]
    fn test_hue_is_normalized() {
        for &(a, b) in [(1.0, 0.0), (0.0, -1.0), (-1.0, -0.0001), (-1.0, 0.0)].iter() {
            let lch = CIELCHColor::from_lab(CIELABColor { l: 50.0, a, b });
            assert!(lch.h >= 0.0 && lch.h < 360.0);
        }
        // gray has no hue: report 0
        let gray = CIELCHColor::from_lab(CIELABColor {
            l: 50.0,
            a: 0.0,
            b: 0.0,
        });
        assert_eq!(gray.c, 0.0);
        assert_eq!(gray.h, 0.0);
    }
}
