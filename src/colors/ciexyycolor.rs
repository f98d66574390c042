//! The CIE xyY color space: XYZ split into chromaticity (x, y) and luminance (Y). Chromaticity
//! coordinates are simply X, Y and Z divided by their sum, which throws away brightness and leaves
//! only the "kind" of color, making xyY handy for plotting gamuts and specifying primaries.

use crate::colors::XYZColor;
use crate::coord::Coord;

/// A color in CIE xyY.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIExyYColor {
    /// Chromaticity x: X / (X + Y + Z).
    pub x: f64,
    /// Chromaticity y: Y / (X + Y + Z).
    pub y: f64,
    /// Luminance, identical to XYZ's Y.
    #[serde(rename = "Y")]
    pub big_y: f64,
}

impl CIExyYColor {
    /// Converts from XYZ. Black has no chromaticity of its own, so it takes the chromaticity of
    /// the reference white instead.
    pub fn from_xyz(xyz: XYZColor, white: [f64; 3]) -> CIExyYColor {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum == 0.0 {
            let white_sum = white[0] + white[1] + white[2];
            CIExyYColor {
                x: white[0] / white_sum,
                y: white[1] / white_sum,
                big_y: xyz.y,
            }
        } else {
            CIExyYColor {
                x: xyz.x / sum,
                y: xyz.y / sum,
                big_y: xyz.y,
            }
        }
    }

    /// Converts back to XYZ. A chromaticity with y = 0 carries no luminance, so it maps to black.
    pub fn to_xyz(&self) -> XYZColor {
        if self.y == 0.0 {
            XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            }
        } else {
            XYZColor {
                x: self.x * self.big_y / self.y,
                y: self.big_y,
                z: (1.0 - self.x - self.y) * self.big_y / self.y,
            }
        }
    }
}

impl From<Coord> for CIExyYColor {
    fn from(c: Coord) -> CIExyYColor {
        CIExyYColor {
            x: c.x,
            y: c.y,
            big_y: c.z,
        }
    }
}

impl From<CIExyYColor> for Coord {
    fn from(val: CIExyYColor) -> Self {
        Coord {
            x: val.x,
            y: val.y,
            z: val.big_y,
        }
    }
}
