//! This module implements the CIE 1931 XYZ color space, the hub that almost every conversion passes
//! through. XYZ values here are normalized so that the white point of an illuminant has Y = 1.
//! Because an XYZ triple is only meaningful relative to a reference white, moving a color from one
//! illuminant to another is a matter of chromatic adaptation, which is also implemented here.

use rulinalg::matrix::Matrix;

use crate::consts::{mul3, AdaptationMethod};
use crate::coord::Coord;
use crate::error::Result;

/// A color in the CIE 1931 XYZ color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis, a mix of the three cone responses chosen to be nonnegative.
    pub x: f64,
    /// The Y axis: luminance. 1 is the luminance of the reference white.
    pub y: f64,
    /// The Z axis, roughly the response of the short-wavelength cones.
    pub z: f64,
}

impl XYZColor {
    /// The components as an array, in x, y, z order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Multiplies the color by a 3x3 matrix.
    pub fn transform(self, m: &Matrix<f64>) -> XYZColor {
        let [x, y, z] = mul3(m, self.to_array());
        XYZColor { x, y, z }
    }

    /// Adapts this color, in place, from being relative to `source_white` to being relative to
    /// `target_white`, using the given cone-response model. Nothing happens when the two white
    /// points are the same.
    /// # Example
    /// ```
    /// # use tristimulus::colors::XYZColor;
    /// # use tristimulus::consts::AdaptationMethod;
    /// let d65 = [0.95047, 1.0, 1.08883];
    /// let d50 = [0.96422, 1.0, 0.82521];
    /// let mut white = XYZColor{x: d65[0], y: d65[1], z: d65[2]};
    /// white.apply_adaptation(d65, d50, AdaptationMethod::Bradford).unwrap();
    /// assert!((white.x - d50[0]).abs() <= 1e-10);
    /// assert!((white.z - d50[2]).abs() <= 1e-10);
    /// ```
    pub fn apply_adaptation(
        &mut self,
        source_white: [f64; 3],
        target_white: [f64; 3],
        method: AdaptationMethod,
    ) -> Result<()> {
        if source_white != target_white {
            let m = method.adaptation_matrix(source_white, target_white)?;
            *self = self.transform(&m);
        }
        Ok(())
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(val: XYZColor) -> Self {
        Coord {
            x: val.x,
            y: val.y,
            z: val.z,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_adaptation_round_trip() {
        let d65 = [0.95047, 1.0, 1.08883];
        let a = [1.09850, 1.0, 0.35585];
        let original = XYZColor {
            x: 0.4,
            y: 0.2,
            z: 0.6,
        };
        for method in [
            AdaptationMethod::Bradford,
            AdaptationMethod::VonKries,
            AdaptationMethod::XyzScaling,
        ]
        .iter()
        {
            let mut color = original;
            color.apply_adaptation(d65, a, *method).unwrap();
            assert!((color.z - original.z).abs() > 0.1);
            color.apply_adaptation(a, d65, *method).unwrap();
            assert!(Coord::from(color).euclidean_distance(&Coord::from(original)) <= 1e-10);
        }
    }

    #[test]
    fn test_xyz_scaling_is_per_channel() {
        let mut color = XYZColor {
            x: 0.5,
            y: 0.5,
            z: 0.5,
        };
        color
            .apply_adaptation([1.0, 1.0, 1.0], [0.5, 1.0, 2.0], AdaptationMethod::XyzScaling)
            .unwrap();
        assert!((color.x - 0.25).abs() <= 1e-12);
        assert!((color.y - 0.5).abs() <= 1e-12);
        assert!((color.z - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn test_same_white_is_untouched() {
        let d50 = [0.96422, 1.0, 0.82521];
        let mut color = XYZColor {
            x: 0.1,
            y: 0.2,
            z: 0.3,
        };
        color
            .apply_adaptation(d50, d50, AdaptationMethod::Bradford)
            .unwrap();
        assert_eq!(
            color,
            XYZColor {
                x: 0.1,
                y: 0.2,
                z: 0.3
            }
        );
    }
}
