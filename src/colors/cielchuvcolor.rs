//! This file implements CIELCHuv, the cylindrical form of CIELUV. It relates to CIELUV exactly as
//! CIELCH relates to CIELAB: lightness is shared, and the two chromaticity axes become chroma and
//! hue.

use super::cieluvcolor::CIELUVColor;
use super::{from_polar, to_polar};
use crate::coord::Coord;

/// A cylindrical form of CIELUV.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHuvColor {
    /// The luminance component, identical to CIELUV's.
    pub l: f64,
    /// The chroma component: distance from the neutral axis u = v = 0.
    pub c: f64,
    /// The hue angle in degrees, from 0 up to but not including 360.
    pub h: f64,
}

impl CIELCHuvColor {
    /// Converts from CIELUV.
    pub fn from_luv(luv: CIELUVColor) -> CIELCHuvColor {
        let (c, h) = to_polar(luv.u, luv.v);
        CIELCHuvColor { l: luv.l, c, h }
    }

    /// Converts back to CIELUV.
    pub fn to_luv(&self) -> CIELUVColor {
        let (u, v) = from_polar(self.c, self.h);
        CIELUVColor { l: self.l, u, v }
    }
}

impl From<Coord> for CIELCHuvColor {
    fn from(c: Coord) -> CIELCHuvColor {
        CIELCHuvColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<CIELCHuvColor> for Coord {
    fn from(val: CIELCHuvColor) -> Self {
        Coord {
            x: val.l,
            y: val.c,
            z: val.h,
        }
    }
}
