//! This module contains one type per supported color representation, along with [`ColorValue`],
//! the tagged union that carries any of them together with the illuminant and observer they are
//! relative to. For convenience, each coordinate type is imported into this module's namespace
//! directly.
//!
//! The per-representation modules each implement the math to and from their neighbors in the
//! conversion graph (RGB from XYZ, HSL from RGB, and so on); stitching those steps together is the
//! job of [`conversion`](crate::conversion).

pub mod cielabcolor;
pub mod cielchcolor;
pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod ciexyycolor;
pub mod cmycolor;
pub mod cmykcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod rgbcolor;
pub mod spectralcolor;
pub mod xyzcolor;

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cielchcolor::CIELCHColor;
pub use self::cielchuvcolor::CIELCHuvColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::ciexyycolor::CIExyYColor;
pub use self::cmycolor::CMYColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::rgbcolor::RGBColor;
pub use self::spectralcolor::SpectralColor;
pub use self::xyzcolor::XYZColor;

use crate::consts::AdaptationMethod;
use crate::error::{ColorError, Result};
use crate::illuminants::{Illuminant, Observer};
use crate::reference::ReferenceData;
use crate::rgb_spaces::RgbSpace;
use crate::spectral_tables::{FIRST_WAVELENGTH, SPECTRAL_SAMPLES, WAVELENGTH_STEP};

/// Chroma and hue angle (degrees, in [0, 360)) of a point on an opponent-color plane.
pub(crate) fn to_polar(a: f64, b: f64) -> (f64, f64) {
    let mut h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    // a tiny negative angle can round up to exactly 360
    if h >= 360.0 {
        h -= 360.0;
    }
    (a.hypot(b), h)
}

/// The inverse of [`to_polar`].
pub(crate) fn from_polar(c: f64, h: f64) -> (f64, f64) {
    let (sin, cos) = h.to_radians().sin_cos();
    (c * cos, c * sin)
}

/// The closed set of color representations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorKind {
    /// Reflectance spectrum.
    Spectral,
    /// CIE 1931 XYZ.
    Xyz,
    /// CIE xyY.
    XyY,
    /// CIELAB.
    Lab,
    /// Cylindrical CIELAB.
    LCHab,
    /// CIELUV.
    Luv,
    /// Cylindrical CIELUV.
    LCHuv,
    /// Encoded RGB in some working space.
    Rgb,
    /// HSL over some RGB working space.
    Hsl,
    /// HSV over some RGB working space.
    Hsv,
    /// Subtractive CMY.
    Cmy,
    /// Subtractive CMY with a black component.
    Cmyk,
}

/// Every kind, in declaration order.
pub static COLOR_KINDS: [ColorKind; 12] = [
    ColorKind::Spectral,
    ColorKind::Xyz,
    ColorKind::XyY,
    ColorKind::Lab,
    ColorKind::LCHab,
    ColorKind::Luv,
    ColorKind::LCHuv,
    ColorKind::Rgb,
    ColorKind::Hsl,
    ColorKind::Hsv,
    ColorKind::Cmy,
    ColorKind::Cmyk,
];

lazy_static! {
    static ref SPECTRAL_FIELD_NAMES: Vec<String> = (0..SPECTRAL_SAMPLES)
        .map(|i| format!("spec_{}nm", FIRST_WAVELENGTH + WAVELENGTH_STEP * i as u16))
        .collect();
}

impl ColorKind {
    /// The canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ColorKind::Spectral => "spectral",
            ColorKind::Xyz => "xyz",
            ColorKind::XyY => "xyy",
            ColorKind::Lab => "lab",
            ColorKind::LCHab => "lchab",
            ColorKind::Luv => "luv",
            ColorKind::LCHuv => "lchuv",
            ColorKind::Rgb => "rgb",
            ColorKind::Hsl => "hsl",
            ColorKind::Hsv => "hsv",
            ColorKind::Cmy => "cmy",
            ColorKind::Cmyk => "cmyk",
        }
    }

    /// The names of the coordinates of this kind, in order.
    pub fn field_names(self) -> Vec<&'static str> {
        match self {
            ColorKind::Spectral => SPECTRAL_FIELD_NAMES.iter().map(String::as_str).collect(),
            ColorKind::Xyz => vec!["x", "y", "z"],
            ColorKind::XyY => vec!["x", "y", "Y"],
            ColorKind::Lab => vec!["l", "a", "b"],
            ColorKind::LCHab | ColorKind::LCHuv => vec!["l", "c", "h"],
            ColorKind::Luv => vec!["l", "u", "v"],
            ColorKind::Rgb => vec!["r", "g", "b"],
            ColorKind::Hsl => vec!["h", "s", "l"],
            ColorKind::Hsv => vec!["h", "s", "v"],
            ColorKind::Cmy => vec!["c", "m", "y"],
            ColorKind::Cmyk => vec!["c", "m", "y", "k"],
        }
    }

    /// Whether colors of this kind are encoded in an RGB working space.
    pub fn has_rgb_space(self) -> bool {
        match self {
            ColorKind::Rgb | ColorKind::Hsl | ColorKind::Hsv => true,
            _ => false,
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<ColorKind> {
        let lowered = s.trim().to_lowercase();
        if lowered == "lch" {
            return Ok(ColorKind::LCHab);
        }
        COLOR_KINDS
            .iter()
            .copied()
            .find(|kind| kind.name() == lowered)
            .ok_or_else(|| ColorError::invalid_argument("kind", format!("unknown kind {:?}", s)))
    }
}

impl TryFrom<String> for ColorKind {
    type Error = ColorError;

    fn try_from(s: String) -> Result<ColorKind> {
        s.parse()
    }
}

/// The coordinates of a color, tagged with its representation. RGB-family colors also carry the
/// working space their numbers are encoded in.
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinates {
    /// A reflectance spectrum.
    Spectral(SpectralColor),
    /// CIE XYZ.
    Xyz(XYZColor),
    /// CIE xyY.
    XyY(CIExyYColor),
    /// CIELAB.
    Lab(CIELABColor),
    /// CIELCH(ab).
    LCHab(CIELCHColor),
    /// CIELUV.
    Luv(CIELUVColor),
    /// CIELCH(uv).
    LCHuv(CIELCHuvColor),
    /// RGB and its working space.
    Rgb(RGBColor, RgbSpace),
    /// HSL and its working space.
    Hsl(HSLColor, RgbSpace),
    /// HSV and its working space.
    Hsv(HSVColor, RgbSpace),
    /// CMY.
    Cmy(CMYColor),
    /// CMYK.
    Cmyk(CMYKColor),
}

impl Coordinates {
    /// The kind of these coordinates.
    pub fn kind(&self) -> ColorKind {
        match self {
            Coordinates::Spectral(_) => ColorKind::Spectral,
            Coordinates::Xyz(_) => ColorKind::Xyz,
            Coordinates::XyY(_) => ColorKind::XyY,
            Coordinates::Lab(_) => ColorKind::Lab,
            Coordinates::LCHab(_) => ColorKind::LCHab,
            Coordinates::Luv(_) => ColorKind::Luv,
            Coordinates::LCHuv(_) => ColorKind::LCHuv,
            Coordinates::Rgb(..) => ColorKind::Rgb,
            Coordinates::Hsl(..) => ColorKind::Hsl,
            Coordinates::Hsv(..) => ColorKind::Hsv,
            Coordinates::Cmy(_) => ColorKind::Cmy,
            Coordinates::Cmyk(_) => ColorKind::Cmyk,
        }
    }

    /// The coordinate values, in the order of [`ColorKind::field_names`].
    pub fn values(&self) -> Vec<f64> {
        match self {
            Coordinates::Spectral(c) => c.samples.to_vec(),
            Coordinates::Xyz(c) => vec![c.x, c.y, c.z],
            Coordinates::XyY(c) => vec![c.x, c.y, c.big_y],
            Coordinates::Lab(c) => vec![c.l, c.a, c.b],
            Coordinates::LCHab(c) => vec![c.l, c.c, c.h],
            Coordinates::Luv(c) => vec![c.l, c.u, c.v],
            Coordinates::LCHuv(c) => vec![c.l, c.c, c.h],
            Coordinates::Rgb(c, _) => vec![c.r, c.g, c.b],
            Coordinates::Hsl(c, _) => vec![c.h, c.s, c.l],
            Coordinates::Hsv(c, _) => vec![c.h, c.s, c.v],
            Coordinates::Cmy(c) => vec![c.c, c.m, c.y],
            Coordinates::Cmyk(c) => vec![c.c, c.m, c.y, c.k],
        }
    }

    /// Builds coordinates of a kind from values in field order. The working space is only kept
    /// for RGB-family kinds.
    pub fn from_values(kind: ColorKind, values: &[f64], space: RgbSpace) -> Result<Coordinates> {
        let expected = kind.field_names().len();
        if values.len() != expected {
            return Err(ColorError::invalid_argument(
                "values",
                format!(
                    "{} color takes {} values, got {}",
                    kind,
                    expected,
                    values.len()
                ),
            ));
        }
        let v = values;
        Ok(match kind {
            ColorKind::Spectral => {
                let mut samples = [0.0; SPECTRAL_SAMPLES];
                samples.copy_from_slice(v);
                Coordinates::Spectral(SpectralColor::new(samples))
            }
            ColorKind::Xyz => Coordinates::Xyz(XYZColor {
                x: v[0],
                y: v[1],
                z: v[2],
            }),
            ColorKind::XyY => Coordinates::XyY(CIExyYColor {
                x: v[0],
                y: v[1],
                big_y: v[2],
            }),
            ColorKind::Lab => Coordinates::Lab(CIELABColor {
                l: v[0],
                a: v[1],
                b: v[2],
            }),
            ColorKind::LCHab => Coordinates::LCHab(CIELCHColor {
                l: v[0],
                c: v[1],
                h: v[2],
            }),
            ColorKind::Luv => Coordinates::Luv(CIELUVColor {
                l: v[0],
                u: v[1],
                v: v[2],
            }),
            ColorKind::LCHuv => Coordinates::LCHuv(CIELCHuvColor {
                l: v[0],
                c: v[1],
                h: v[2],
            }),
            ColorKind::Rgb => Coordinates::Rgb(
                RGBColor {
                    r: v[0],
                    g: v[1],
                    b: v[2],
                },
                space,
            ),
            ColorKind::Hsl => Coordinates::Hsl(
                HSLColor {
                    h: v[0],
                    s: v[1],
                    l: v[2],
                },
                space,
            ),
            ColorKind::Hsv => Coordinates::Hsv(
                HSVColor {
                    h: v[0],
                    s: v[1],
                    v: v[2],
                },
                space,
            ),
            ColorKind::Cmy => Coordinates::Cmy(CMYColor {
                c: v[0],
                m: v[1],
                y: v[2],
            }),
            ColorKind::Cmyk => Coordinates::Cmyk(CMYKColor {
                c: v[0],
                m: v[1],
                y: v[2],
                k: v[3],
            }),
        })
    }
}

/// A color: its coordinates plus the illuminant and observer they are relative to. Illuminant
/// defaults to D50 and observer to 2°, the most common choices for reflective color work.
///
/// # Example
/// ```
/// # use tristimulus::colors::{ColorKind, ColorValue};
/// # use tristimulus::illuminants::{Illuminant, Observer};
/// let lab = ColorValue::lab(50.0, 20.0, -10.0).with_illuminant(Illuminant::D65);
/// assert_eq!(lab.kind(), ColorKind::Lab);
/// assert_eq!(lab.observer, Observer::Two);
/// assert_eq!(lab.values(), vec![50.0, 20.0, -10.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorValue {
    /// The coordinates.
    pub coords: Coordinates,
    /// The illuminant the coordinates are relative to.
    pub illuminant: Illuminant,
    /// The standard observer the coordinates are relative to.
    pub observer: Observer,
}

impl ColorValue {
    /// Wraps coordinates with the default illuminant and observer.
    pub fn new(coords: Coordinates) -> ColorValue {
        ColorValue {
            coords,
            illuminant: Illuminant::default(),
            observer: Observer::default(),
        }
    }

    /// A spectral color.
    pub fn spectral(color: SpectralColor) -> ColorValue {
        ColorValue::new(Coordinates::Spectral(color))
    }

    /// An XYZ color.
    pub fn xyz(x: f64, y: f64, z: f64) -> ColorValue {
        ColorValue::new(Coordinates::Xyz(XYZColor { x, y, z }))
    }

    /// An xyY color.
    pub fn xyy(x: f64, y: f64, big_y: f64) -> ColorValue {
        ColorValue::new(Coordinates::XyY(CIExyYColor { x, y, big_y }))
    }

    /// A CIELAB color.
    pub fn lab(l: f64, a: f64, b: f64) -> ColorValue {
        ColorValue::new(Coordinates::Lab(CIELABColor { l, a, b }))
    }

    /// A CIELCH(ab) color.
    pub fn lchab(l: f64, c: f64, h: f64) -> ColorValue {
        ColorValue::new(Coordinates::LCHab(CIELCHColor { l, c, h }))
    }

    /// A CIELUV color.
    pub fn luv(l: f64, u: f64, v: f64) -> ColorValue {
        ColorValue::new(Coordinates::Luv(CIELUVColor { l, u, v }))
    }

    /// A CIELCH(uv) color.
    pub fn lchuv(l: f64, c: f64, h: f64) -> ColorValue {
        ColorValue::new(Coordinates::LCHuv(CIELCHuvColor { l, c, h }))
    }

    /// An sRGB color, channels from 0 to 255.
    pub fn rgb(r: f64, g: f64, b: f64) -> ColorValue {
        ColorValue::new(Coordinates::Rgb(RGBColor { r, g, b }, RgbSpace::Srgb))
    }

    /// An HSL color over sRGB.
    pub fn hsl(h: f64, s: f64, l: f64) -> ColorValue {
        ColorValue::new(Coordinates::Hsl(HSLColor { h, s, l }, RgbSpace::Srgb))
    }

    /// An HSV color over sRGB.
    pub fn hsv(h: f64, s: f64, v: f64) -> ColorValue {
        ColorValue::new(Coordinates::Hsv(HSVColor { h, s, v }, RgbSpace::Srgb))
    }

    /// A CMY color.
    pub fn cmy(c: f64, m: f64, y: f64) -> ColorValue {
        ColorValue::new(Coordinates::Cmy(CMYColor { c, m, y }))
    }

    /// A CMYK color.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> ColorValue {
        ColorValue::new(Coordinates::Cmyk(CMYKColor { c, m, y, k }))
    }

    /// Replaces the illuminant.
    pub fn with_illuminant(mut self, illuminant: Illuminant) -> ColorValue {
        self.illuminant = illuminant;
        self
    }

    /// Replaces the observer.
    pub fn with_observer(mut self, observer: Observer) -> ColorValue {
        self.observer = observer;
        self
    }

    /// Replaces the working space of an RGB, HSL or HSV color. Other kinds have no working space,
    /// and are returned unchanged.
    pub fn with_rgb_space(mut self, space: RgbSpace) -> ColorValue {
        match &mut self.coords {
            Coordinates::Rgb(_, s) | Coordinates::Hsl(_, s) | Coordinates::Hsv(_, s) => *s = space,
            _ => {}
        }
        self
    }

    /// The kind of this color.
    pub fn kind(&self) -> ColorKind {
        self.coords.kind()
    }

    /// The coordinate values in field order.
    pub fn values(&self) -> Vec<f64> {
        self.coords.values()
    }

    /// The working space, for RGB-family colors.
    pub fn rgb_space(&self) -> Option<RgbSpace> {
        match self.coords {
            Coordinates::Rgb(_, s) | Coordinates::Hsl(_, s) | Coordinates::Hsv(_, s) => Some(s),
            _ => None,
        }
    }

    /// The XYZ white point of this color's illuminant under its observer, or under the overrides
    /// given.
    pub fn illuminant_xyz<R: ReferenceData + ?Sized>(
        &self,
        reference: &R,
        observer: Option<Observer>,
        illuminant: Option<Illuminant>,
    ) -> Result<[f64; 3]> {
        reference.white_point(
            observer.unwrap_or(self.observer),
            illuminant.unwrap_or(self.illuminant),
        )
    }

    /// Adapts an XYZ color, in place, to another illuminant: the coordinates are carried onto the
    /// target white point and the color is retagged with it, so later conversions use the new
    /// white. Other kinds are rejected, since their numbers are not tristimulus values.
    ///
    /// # Example
    /// ```
    /// # use tristimulus::colors::ColorValue;
    /// # use tristimulus::consts::AdaptationMethod;
    /// # use tristimulus::illuminants::Illuminant;
    /// # use tristimulus::reference::StandardReference;
    /// let mut white = ColorValue::xyz(0.95047, 1.0, 1.08883).with_illuminant(Illuminant::D65);
    /// white
    ///     .apply_adaptation(Illuminant::D50, &StandardReference, AdaptationMethod::Bradford)
    ///     .unwrap();
    /// assert_eq!(white.illuminant, Illuminant::D50);
    /// assert!((white.values()[2] - 0.82521).abs() <= 1e-6);
    /// ```
    pub fn apply_adaptation<R: ReferenceData + ?Sized>(
        &mut self,
        target: Illuminant,
        reference: &R,
        method: AdaptationMethod,
    ) -> Result<()> {
        let kind = self.kind();
        let xyz = match &mut self.coords {
            Coordinates::Xyz(xyz) => xyz,
            _ => {
                return Err(ColorError::invalid_argument(
                    "color",
                    format!("only xyz colors can be adapted, not {}", kind),
                ))
            }
        };
        let source_white = reference.white_point(self.observer, self.illuminant)?;
        let target_white = reference.white_point(self.observer, target)?;
        let mut adapted = *xyz;
        adapted.apply_adaptation(source_white, target_white, method)?;
        *xyz = adapted;
        self.illuminant = target;
        Ok(())
    }

    /// Checks that every coordinate is a finite number, naming the first one that is not.
    pub fn validate(&self) -> Result<()> {
        let kind = self.kind();
        for (field, value) in kind.field_names().into_iter().zip(self.values()) {
            if !value.is_finite() {
                return Err(ColorError::InvalidValue {
                    kind: kind.to_string(),
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::conversion::{convert, ConversionOptions};
    use crate::reference::StandardReference;

    #[test]
    fn test_kind_names() {
        for kind in COLOR_KINDS.iter() {
            assert_eq!(kind.name().parse::<ColorKind>().unwrap(), *kind);
        }
        assert_eq!("LCH".parse::<ColorKind>().unwrap(), ColorKind::LCHab);
        assert_eq!(" XyY ".parse::<ColorKind>().unwrap(), ColorKind::XyY);
        assert!("ciexyz".parse::<ColorKind>().is_err());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ColorKind::XyY.field_names(), vec!["x", "y", "Y"]);
        let spectral = ColorKind::Spectral.field_names();
        assert_eq!(spectral.len(), SPECTRAL_SAMPLES);
        assert_eq!(spectral[0], "spec_340nm");
        assert_eq!(spectral[SPECTRAL_SAMPLES - 1], "spec_830nm");
    }

    #[test]
    fn test_values_round_trip() {
        for kind in COLOR_KINDS.iter() {
            let n = kind.field_names().len();
            let values: Vec<f64> = (0..n).map(|i| i as f64 * 0.25).collect();
            let coords = Coordinates::from_values(*kind, &values, RgbSpace::AdobeRgb).unwrap();
            assert_eq!(coords.kind(), *kind);
            assert_eq!(coords.values(), values);
        }
        assert!(Coordinates::from_values(ColorKind::Cmyk, &[0.0; 3], RgbSpace::Srgb).is_err());
    }

    #[test]
    fn test_validation_names_the_field() {
        assert!(ColorValue::lab(50.0, 1.0, 2.0).validate().is_ok());
        assert_eq!(
            ColorValue::xyz(0.1, f64::NAN, 0.3).validate(),
            Err(ColorError::InvalidValue {
                kind: "xyz".to_string(),
                field: "y".to_string(),
                value: "NaN".to_string(),
            })
        );
        match ColorValue::rgb(1.0, 2.0, f64::INFINITY).validate() {
            Err(ColorError::InvalidValue { field, value, .. }) => {
                assert_eq!(field, "b");
                assert_eq!(value, "inf");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_metadata() {
        let hsv = ColorValue::hsv(10.0, 0.5, 0.5)
            .with_rgb_space(RgbSpace::ProPhoto)
            .with_observer(Observer::Ten);
        assert_eq!(hsv.rgb_space(), Some(RgbSpace::ProPhoto));
        assert_eq!(hsv.illuminant, Illuminant::D50);
        let lab = ColorValue::lab(1.0, 2.0, 3.0).with_rgb_space(RgbSpace::ProPhoto);
        assert_eq!(lab.rgb_space(), None);
        let reference = StandardReference;
        assert_eq!(
            hsv.illuminant_xyz(&reference, None, None).unwrap(),
            [0.96720, 1.0, 0.81427]
        );
        assert_eq!(
            hsv.illuminant_xyz(&reference, Some(Observer::Two), Some(Illuminant::D65))
                .unwrap(),
            [0.95047, 1.0, 1.08883]
        );
    }

    #[test]
    fn test_adaptation_retags_the_color() {
        let reference = StandardReference;
        let mut white = ColorValue::xyz(0.95047, 1.0, 1.08883).with_illuminant(Illuminant::D65);
        white
            .apply_adaptation(Illuminant::D50, &reference, AdaptationMethod::Bradford)
            .unwrap();
        assert_eq!(white.illuminant, Illuminant::D50);
        let lab = convert(
            &white,
            ColorKind::Lab,
            &reference,
            &ConversionOptions::default(),
        )
        .unwrap();
        assert_eq!(lab.illuminant, Illuminant::D50);
        for (actual, expected) in lab.values().iter().zip(&[100.0, 0.0, 0.0]) {
            assert!((actual - expected).abs() <= 1e-6, "{:?}", lab.values());
        }
    }

    #[test]
    fn test_adaptation_rejects_other_kinds() {
        let mut lab = ColorValue::lab(50.0, 10.0, 10.0);
        match lab.apply_adaptation(
            Illuminant::D65,
            &StandardReference,
            AdaptationMethod::Bradford,
        ) {
            Err(ColorError::InvalidArgument { argument, .. }) => assert_eq!(argument, "color"),
            other => panic!("unexpected {:?}", other),
        }
        // nothing was touched
        assert_eq!(lab, ColorValue::lab(50.0, 10.0, 10.0));
    }

    #[test]
    fn test_polar_helpers() {
        let (c, h) = to_polar(-1.0, -1e-300);
        assert!(h >= 0.0 && h < 360.0);
        assert_eq!(c, 1.0);
        let (a, b) = from_polar(2.0, 90.0);
        assert!(a.abs() <= 1e-12);
        assert!((b - 2.0).abs() <= 1e-12);
    }
}
