//! This module describes the RGB working spaces a color can be encoded in. An RGB space is fully
//! determined by three things: the chromaticities of its red, green, and blue primaries, the white
//! point that (1, 1, 1) represents, and the nonlinear transfer curve applied to each channel. The
//! conversion matrices are not tabulated: they are derived from the primaries and the white point,
//! scaled so that RGB white lands exactly on the tabulated white point of the space's illuminant.
//! That way sRGB white really is D65 white, down to the last digit.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use rulinalg::matrix::Matrix;

use crate::consts::{inv, mul3};
use crate::error::{ColorError, Result};
use crate::illuminants::{Illuminant, Observer};

/// The RGB working spaces supported by the library. sRGB is the default, and what everything from
/// CSS to most image files assume.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum RgbSpace {
    /// IEC 61966-2-1 sRGB, with D65 white.
    Srgb,
    /// Adobe RGB (1998), a wider gamut for print work, with D65 white.
    AdobeRgb,
    /// The legacy Apple RGB space, with D65 white and a 1.8 gamma.
    AppleRgb,
    /// ITU-R BT.2020, the wide-gamut space for UHD television.
    Bt2020,
    /// ROMM RGB, also known as ProPhoto RGB: very wide, with D50 white.
    ProPhoto,
}

/// Every supported space, in declaration order.
pub static RGB_SPACES: [RgbSpace; 5] = [
    RgbSpace::Srgb,
    RgbSpace::AdobeRgb,
    RgbSpace::AppleRgb,
    RgbSpace::Bt2020,
    RgbSpace::ProPhoto,
];

impl RgbSpace {
    /// The canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            RgbSpace::Srgb => "srgb",
            RgbSpace::AdobeRgb => "adobe_rgb",
            RgbSpace::AppleRgb => "apple_rgb",
            RgbSpace::Bt2020 => "bt2020",
            RgbSpace::ProPhoto => "prophoto",
        }
    }

    /// Builds the full definition of the space from its published parameters.
    pub fn definition(self) -> Result<RgbSpaceDef> {
        match self {
            RgbSpace::Srgb => RgbSpaceDef::new(
                self,
                [[0.64, 0.33], [0.30, 0.60], [0.15, 0.06]],
                Illuminant::D65,
                TransferCurve::Piecewise {
                    gamma: 2.4,
                    alpha: 1.055,
                    beta: 0.0031308,
                    slope: 12.92,
                },
            ),
            RgbSpace::AdobeRgb => RgbSpaceDef::new(
                self,
                [[0.64, 0.33], [0.21, 0.71], [0.15, 0.06]],
                Illuminant::D65,
                TransferCurve::Power(2.2),
            ),
            RgbSpace::AppleRgb => RgbSpaceDef::new(
                self,
                [[0.625, 0.34], [0.28, 0.595], [0.155, 0.07]],
                Illuminant::D65,
                TransferCurve::Power(1.8),
            ),
            RgbSpace::Bt2020 => RgbSpaceDef::new(
                self,
                [[0.708, 0.292], [0.170, 0.797], [0.131, 0.046]],
                Illuminant::D65,
                TransferCurve::Piecewise {
                    gamma: 1.0 / 0.45,
                    alpha: 1.0993,
                    beta: 0.0181,
                    slope: 4.5,
                },
            ),
            // the ROMM curve has no offset, so alpha is 1
            RgbSpace::ProPhoto => RgbSpaceDef::new(
                self,
                [[0.7347, 0.2653], [0.1596, 0.8404], [0.0366, 0.0001]],
                Illuminant::D50,
                TransferCurve::Piecewise {
                    gamma: 1.8,
                    alpha: 1.0,
                    beta: 1.0 / 512.0,
                    slope: 16.0,
                },
            ),
        }
    }
}

impl Default for RgbSpace {
    fn default() -> RgbSpace {
        RgbSpace::Srgb
    }
}

impl fmt::Display for RgbSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RgbSpace {
    type Err = ColorError;

    /// Accepts the canonical names along with the common spellings "sRGB", "Adobe RGB",
    /// "adobe-rgb", "BT.2020", "ROMM RGB" and so on.
    fn from_str(s: &str) -> Result<RgbSpace> {
        let squashed: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match squashed.as_str() {
            "srgb" => Ok(RgbSpace::Srgb),
            "adobergb" | "adobe" => Ok(RgbSpace::AdobeRgb),
            "applergb" | "apple" => Ok(RgbSpace::AppleRgb),
            "bt2020" | "rec2020" => Ok(RgbSpace::Bt2020),
            "prophoto" | "prophotorgb" | "rommrgb" | "romm" => Ok(RgbSpace::ProPhoto),
            _ => Err(ColorError::not_found("RGB working space", s)),
        }
    }
}

impl TryFrom<String> for RgbSpace {
    type Error = ColorError;

    fn try_from(s: String) -> Result<RgbSpace> {
        s.parse()
    }
}

/// The nonlinearity between linear light and the encoded channel values of an RGB space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransferCurve {
    /// A pure power law: encoded = linear ^ (1 / gamma).
    Power(f64),
    /// A linear segment near black joined to an offset power law, as in sRGB:
    /// encoded = slope * linear below `beta`, and alpha * linear ^ (1 / gamma) - (alpha - 1) above.
    Piecewise {
        /// Exponent of the power segment.
        gamma: f64,
        /// Scale of the power segment; the offset is alpha - 1.
        alpha: f64,
        /// The linear value where the segments meet.
        beta: f64,
        /// Slope of the linear segment.
        slope: f64,
    },
}

impl TransferCurve {
    /// Linear light to encoded value. Negative inputs are mirrored, so out-of-gamut intermediates
    /// never turn into NaN.
    pub fn encode(self, linear: f64) -> f64 {
        let magnitude = linear.abs();
        let encoded = match self {
            TransferCurve::Power(gamma) => magnitude.powf(1.0 / gamma),
            TransferCurve::Piecewise {
                gamma,
                alpha,
                beta,
                slope,
            } => {
                if magnitude < beta {
                    slope * magnitude
                } else {
                    alpha * magnitude.powf(1.0 / gamma) - (alpha - 1.0)
                }
            }
        };
        encoded.copysign(linear)
    }

    /// Encoded value to linear light; the exact inverse of `encode`.
    pub fn decode(self, encoded: f64) -> f64 {
        let magnitude = encoded.abs();
        let linear = match self {
            TransferCurve::Power(gamma) => magnitude.powf(gamma),
            TransferCurve::Piecewise {
                gamma,
                alpha,
                beta,
                slope,
            } => {
                if magnitude < slope * beta {
                    magnitude / slope
                } else {
                    ((magnitude + alpha - 1.0) / alpha).powf(gamma)
                }
            }
        };
        linear.copysign(encoded)
    }
}

/// Everything needed to move between an RGB space and XYZ.
#[derive(Debug, Clone)]
pub struct RgbSpaceDef {
    /// Which space this is.
    pub space: RgbSpace,
    /// The xy chromaticities of the red, green, and blue primaries.
    pub primaries: [[f64; 2]; 3],
    /// The illuminant whose white (1, 1, 1) represents.
    pub illuminant: Illuminant,
    /// The per-channel nonlinearity.
    pub curve: TransferCurve,
    /// Linear RGB (0-1) to XYZ relative to the native illuminant.
    pub rgb_to_xyz: Matrix<f64>,
    /// The inverse of `rgb_to_xyz`.
    pub xyz_to_rgb: Matrix<f64>,
}

impl RgbSpaceDef {
    /// Derives the conversion matrices from the primaries. Each primary becomes a column of XYZ
    /// values with Y = 1; the columns are then scaled so that their sum is the native white point
    /// (2° observer). Fails if the primaries are collinear.
    pub fn new(
        space: RgbSpace,
        primaries: [[f64; 2]; 3],
        illuminant: Illuminant,
        curve: TransferCurve,
    ) -> Result<RgbSpaceDef> {
        let column = |[x, y]: [f64; 2]| -> Result<[f64; 3]> {
            if y == 0.0 {
                return Err(ColorError::Matrix(format!(
                    "primary ({}, {}) of {} has zero luminance",
                    x, y, space
                )));
            }
            Ok([x / y, 1.0, (1.0 - x - y) / y])
        };
        let (r, g, b) = (
            column(primaries[0])?,
            column(primaries[1])?,
            column(primaries[2])?,
        );
        let unscaled = Matrix::new(
            3,
            3,
            vec![
                r[0], g[0], b[0], //
                r[1], g[1], b[1], //
                r[2], g[2], b[2],
            ],
        );
        let white = illuminant.white_point(Observer::Two);
        let scale = mul3(&inv(&unscaled)?, white);
        let rgb_to_xyz = &unscaled * &Matrix::from_diag(&scale);
        let xyz_to_rgb = inv(&rgb_to_xyz)?;
        Ok(RgbSpaceDef {
            space,
            primaries,
            illuminant,
            curve,
            rgb_to_xyz,
            xyz_to_rgb,
        })
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_srgb_matrix() {
        let srgb = RgbSpace::Srgb.definition().unwrap();
        let expected = [
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ];
        for i in 0..3 {
            for j in 0..3 {
                assert!((srgb.rgb_to_xyz[[i, j]] - expected[i][j]).abs() <= 1e-6);
            }
        }
    }

    #[test]
    fn test_white_is_exact() {
        for space in RGB_SPACES.iter() {
            let def = space.definition().unwrap();
            let white = mul3(&def.rgb_to_xyz, [1.0, 1.0, 1.0]);
            let expected = def.illuminant.white_point(Observer::Two);
            for i in 0..3 {
                assert!((white[i] - expected[i]).abs() <= 1e-12);
            }
            let back = mul3(&def.xyz_to_rgb, white);
            for channel in back.iter() {
                assert!((channel - 1.0).abs() <= 1e-12);
            }
        }
    }

    #[test]
    fn test_curves_invert() {
        for space in RGB_SPACES.iter() {
            let curve = space.definition().unwrap().curve;
            for &x in [0.0, 0.001, 0.01, 0.2, 0.5, 0.99, 1.0, -0.3].iter() {
                assert!((curve.decode(curve.encode(x)) - x).abs() <= 1e-12);
            }
        }
    }

    #[test]
    fn test_srgb_curve_values() {
        let curve = RgbSpace::Srgb.definition().unwrap().curve;
        assert!((curve.encode(0.5) - 0.7353570).abs() <= 1e-6);
        assert!((curve.decode(0.5) - 0.2140411).abs() <= 1e-6);
        assert!((curve.encode(0.001) - 0.01292).abs() <= 1e-12);
        // mirrored rather than NaN
        assert!((curve.encode(-0.5) + 0.7353570).abs() <= 1e-6);
    }

    #[test]
    fn test_collinear_primaries_fail() {
        let def = RgbSpaceDef::new(
            RgbSpace::Srgb,
            [[0.2, 0.2], [0.3, 0.3], [0.4, 0.4]],
            Illuminant::D65,
            TransferCurve::Power(2.2),
        );
        match def {
            Err(ColorError::Matrix(_)) => {}
            other => panic!("unexpected {:?}", other.map(|d| d.space)),
        }
    }

    #[test]
    fn test_space_names() {
        assert_eq!("sRGB".parse::<RgbSpace>().unwrap(), RgbSpace::Srgb);
        assert_eq!("Adobe RGB".parse::<RgbSpace>().unwrap(), RgbSpace::AdobeRgb);
        assert_eq!("bt.2020".parse::<RgbSpace>().unwrap(), RgbSpace::Bt2020);
        assert_eq!("ROMM RGB".parse::<RgbSpace>().unwrap(), RgbSpace::ProPhoto);
        for space in RGB_SPACES.iter() {
            assert_eq!(space.name().parse::<RgbSpace>().unwrap(), *space);
        }
        assert!("cmyk".parse::<RgbSpace>().is_err());
    }
}
