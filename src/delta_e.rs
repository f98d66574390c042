//! Color difference formulas. All of them work on CIELAB, and all of them are some variation on a
//! weighted Euclidean distance: CIE1976 is the plain distance, CIE1994 and CMC weight lightness,
//! chroma and hue differences by where the reference color sits, and CIEDE2000 adds a hue rotation
//! term for blues and a correction to a* for near-neutrals.
//!
//! CIE1994 and CMC are not symmetric: the first argument is the reference (standard) color, and
//! the weights are computed from it.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::colors::{to_polar, CIELABColor};
use crate::coord::Coord;
use crate::error::{ColorError, Result};

/// Weights for CIE1994.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cie1994Params {
    /// Lightness weight.
    pub k_l: f64,
    /// Chroma scaling.
    pub k_1: f64,
    /// Hue scaling.
    pub k_2: f64,
}

impl Cie1994Params {
    /// The graphic arts weights.
    pub const GRAPHIC_ARTS: Cie1994Params = Cie1994Params {
        k_l: 1.0,
        k_1: 0.045,
        k_2: 0.015,
    };

    /// The textile weights.
    pub const TEXTILES: Cie1994Params = Cie1994Params {
        k_l: 2.0,
        k_1: 0.048,
        k_2: 0.014,
    };
}

impl Default for Cie1994Params {
    fn default() -> Cie1994Params {
        Cie1994Params::GRAPHIC_ARTS
    }
}

/// Parametric weights for CIEDE2000, all 1 under reference conditions.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cie2000Params {
    /// Lightness weight.
    pub k_l: f64,
    /// Chroma weight.
    pub k_c: f64,
    /// Hue weight.
    pub k_h: f64,
}

impl Default for Cie2000Params {
    fn default() -> Cie2000Params {
        Cie2000Params {
            k_l: 1.0,
            k_c: 1.0,
            k_h: 1.0,
        }
    }
}

/// The lightness to chroma ratio l:c for CMC.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CmcParams {
    /// Lightness weight.
    pub l: f64,
    /// Chroma weight.
    pub c: f64,
}

impl CmcParams {
    /// 2:1, used for acceptability.
    pub const ACCEPTABILITY: CmcParams = CmcParams { l: 2.0, c: 1.0 };
    /// 1:1, used for perceptibility.
    pub const PERCEPTIBILITY: CmcParams = CmcParams { l: 1.0, c: 1.0 };
}

impl Default for CmcParams {
    fn default() -> CmcParams {
        CmcParams::ACCEPTABILITY
    }
}

/// The CIE1976 difference: Euclidean distance in CIELAB.
pub fn delta_e_cie1976(reference: &CIELABColor, sample: &CIELABColor) -> f64 {
    Coord::from(*reference).euclidean_distance(&Coord::from(*sample))
}

fn chroma(lab: &CIELABColor) -> f64 {
    lab.a.hypot(lab.b)
}

/// The squared hue difference, from the total difference less its lightness and chroma parts. It
/// can round slightly below zero when the hues match.
fn hue_difference_squared(reference: &CIELABColor, sample: &CIELABColor, delta_c: f64) -> f64 {
    let delta_a = reference.a - sample.a;
    let delta_b = reference.b - sample.b;
    (delta_a * delta_a + delta_b * delta_b - delta_c * delta_c).max(0.0)
}

/// The CIE1994 difference, weighted by the reference color's chroma.
pub fn delta_e_cie1994(
    reference: &CIELABColor,
    sample: &CIELABColor,
    params: &Cie1994Params,
) -> f64 {
    let c1 = chroma(reference);
    let delta_l = reference.l - sample.l;
    let delta_c = c1 - chroma(sample);
    let delta_h2 = hue_difference_squared(reference, sample, delta_c);

    let s_c = 1.0 + params.k_1 * c1;
    let s_h = 1.0 + params.k_2 * c1;

    ((delta_l / params.k_l).powi(2) + (delta_c / s_c).powi(2) + delta_h2 / (s_h * s_h)).sqrt()
}

/// The CMC l:c difference.
pub fn delta_e_cmc(reference: &CIELABColor, sample: &CIELABColor, params: &CmcParams) -> f64 {
    let (c1, h1) = to_polar(reference.a, reference.b);
    let delta_l = reference.l - sample.l;
    let delta_c = c1 - chroma(sample);
    let delta_h2 = hue_difference_squared(reference, sample, delta_c);

    let s_l = if reference.l < 16.0 {
        0.511
    } else {
        0.040975 * reference.l / (1.0 + 0.01765 * reference.l)
    };
    let s_c = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;
    let t = if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };
    let c1_4 = c1.powi(4);
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();
    let s_h = s_c * (f * t + 1.0 - f);

    ((delta_l / (params.l * s_l)).powi(2)
        + (delta_c / (params.c * s_c)).powi(2)
        + delta_h2 / (s_h * s_h))
        .sqrt()
}

/// Wraps `h2 - h1` into (-180, 180].
fn hue_difference(h1: f64, h2: f64) -> f64 {
    let diff = h2 - h1;
    if diff > 180.0 {
        diff - 360.0
    } else if diff <= -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

/// The CIEDE2000 difference.
///
/// # Example
/// ```
/// # use tristimulus::colors::CIELABColor;
/// # use tristimulus::delta_e::{delta_e_cie2000, Cie2000Params};
/// let a = CIELABColor { l: 50.0, a: 2.5, b: 0.0 };
/// let b = CIELABColor { l: 73.0, a: 25.0, b: -18.0 };
/// let de = delta_e_cie2000(&a, &b, &Cie2000Params::default());
/// assert!((de - 27.1492).abs() < 1e-4);
/// ```
pub fn delta_e_cie2000(
    reference: &CIELABColor,
    sample: &CIELABColor,
    params: &Cie2000Params,
) -> f64 {
    let (l1, a1, b1) = (reference.l, reference.a, reference.b);
    let (l2, a2, b2) = (sample.l, sample.a, sample.b);

    // a* is stretched for near-neutral colors
    let c_bar = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + 25f64.powi(7))).sqrt());
    let a1_p = (1.0 + g) * a1;
    let a2_p = (1.0 + g) * a2;

    let (c1_p, h1_p) = to_polar(a1_p, b1);
    let (c2_p, h2_p) = to_polar(a2_p, b2);
    let chroma_product = c1_p * c2_p;

    let delta_l_p = l2 - l1;
    let delta_c_p = c2_p - c1_p;
    let delta_h_p = if chroma_product == 0.0 {
        0.0
    } else {
        hue_difference(h1_p, h2_p)
    };
    let delta_big_h_p = 2.0 * chroma_product.sqrt() * (delta_h_p / 2.0).to_radians().sin();

    let l_bar_p = (l1 + l2) / 2.0;
    let c_bar_p = (c1_p + c2_p) / 2.0;
    let h_bar_p = if chroma_product == 0.0 {
        h1_p + h2_p
    } else if (h1_p - h2_p).abs() <= 180.0 {
        (h1_p + h2_p) / 2.0
    } else if h1_p + h2_p < 360.0 {
        (h1_p + h2_p + 360.0) / 2.0
    } else {
        (h1_p + h2_p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();
    let delta_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p_7 = c_bar_p.powi(7);
    let r_c = 2.0 * (c_bar_p_7 / (c_bar_p_7 + 25f64.powi(7))).sqrt();
    let l_50 = (l_bar_p - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_50 / (20.0 + l_50).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let l_term = delta_l_p / (params.k_l * s_l);
    let c_term = delta_c_p / (params.k_c * s_c);
    let h_term = delta_big_h_p / (params.k_h * s_h);

    (l_term * l_term + c_term * c_term + h_term * h_term + r_t * c_term * h_term)
        .max(0.0)
        .sqrt()
}

/// A Delta E formula together with its parameters.
///
/// # Example
/// ```
/// # use tristimulus::delta_e::{CmcParams, DeltaEMode};
/// assert_eq!("CMC".parse::<DeltaEMode>().unwrap(), DeltaEMode::Cmc(CmcParams::ACCEPTABILITY));
/// assert!("ciexyz".parse::<DeltaEMode>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum DeltaEMode {
    /// CIE1976.
    Cie1976,
    /// CIE1994.
    Cie1994(Cie1994Params),
    /// CIEDE2000.
    Cie2000(Cie2000Params),
    /// CMC l:c.
    Cmc(CmcParams),
}

impl Default for DeltaEMode {
    fn default() -> DeltaEMode {
        DeltaEMode::Cie2000(Cie2000Params::default())
    }
}

impl DeltaEMode {
    /// The name the mode is parsed from.
    pub fn name(&self) -> &'static str {
        match self {
            DeltaEMode::Cie1976 => "cie1976",
            DeltaEMode::Cie1994(_) => "cie1994",
            DeltaEMode::Cie2000(_) => "cie2000",
            DeltaEMode::Cmc(_) => "cmc",
        }
    }

    /// The difference between a reference color and a sample.
    pub fn delta_e(&self, reference: &CIELABColor, sample: &CIELABColor) -> f64 {
        match self {
            DeltaEMode::Cie1976 => delta_e_cie1976(reference, sample),
            DeltaEMode::Cie1994(params) => delta_e_cie1994(reference, sample, params),
            DeltaEMode::Cie2000(params) => delta_e_cie2000(reference, sample, params),
            DeltaEMode::Cmc(params) => delta_e_cmc(reference, sample, params),
        }
    }
}

impl fmt::Display for DeltaEMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeltaEMode {
    type Err = ColorError;

    /// Parses a mode name, case-insensitively, with its default parameters.
    fn from_str(s: &str) -> Result<DeltaEMode> {
        match s.trim().to_lowercase().as_str() {
            "cie1976" => Ok(DeltaEMode::Cie1976),
            "cie1994" => Ok(DeltaEMode::Cie1994(Cie1994Params::default())),
            "cie2000" => Ok(DeltaEMode::Cie2000(Cie2000Params::default())),
            "cmc" => Ok(DeltaEMode::Cmc(CmcParams::default())),
            _ => Err(ColorError::InvalidDeltaEMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for DeltaEMode {
    type Error = ColorError;

    fn try_from(s: String) -> Result<DeltaEMode> {
        s.parse()
    }
}

/// The difference between one reference color and each of many samples, in sample order. Rows are
/// computed in parallel; each is exactly what [`DeltaEMode::delta_e`] gives for that pair.
pub fn delta_e_many(
    reference: &CIELABColor,
    samples: &[CIELABColor],
    mode: &DeltaEMode,
) -> Vec<f64> {
    samples
        .par_iter()
        .map(|sample| mode.delta_e(reference, sample))
        .collect()
}
