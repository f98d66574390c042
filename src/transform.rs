//! The individual steps a conversion is made of. A [`Transform`] names one edge of the conversion
//! graph; before anything is computed it is resolved into a [`Step`], which holds every piece of
//! reference data the edge needs (white points, adaptation matrices, working spaces, spectra). Only
//! once every step of a chain has resolved does any arithmetic happen, so a conversion either fails
//! up front or not at all.

use rulinalg::matrix::Matrix;

use crate::colors::{
    CIELABColor, CIELCHColor, CIELCHuvColor, CIELUVColor, CIExyYColor, CMYColor, CMYKColor,
    ColorKind, ColorValue, Coordinates, HSLColor, HSVColor, RGBColor, XYZColor,
};
use crate::consts::AdaptationMethod;
use crate::conversion::ConversionOptions;
use crate::error::{ColorError, Result};
use crate::illuminants::{Illuminant, Observer};
use crate::reference::ReferenceData;
use crate::rgb_spaces::{RgbSpace, RgbSpaceDef};
use crate::spectral_tables::{MatchingFunctions, Spectrum};

/// One edge of the conversion graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Transform {
    SpectralToXyz,
    XyzToXyy,
    XyyToXyz,
    XyzToLab,
    LabToXyz,
    LabToLchab,
    LchabToLab,
    XyzToLuv,
    LuvToXyz,
    LuvToLchuv,
    LchuvToLuv,
    XyzToRgb,
    RgbToXyz,
    RgbToHsl,
    HslToRgb,
    RgbToHsv,
    HsvToRgb,
    RgbToCmy,
    CmyToRgb,
    CmyToCmyk,
    CmykToCmy,
}

impl Transform {
    /// The kinds this transform goes from and to.
    pub fn endpoints(self) -> (ColorKind, ColorKind) {
        use self::ColorKind::*;
        match self {
            Transform::SpectralToXyz => (Spectral, Xyz),
            Transform::XyzToXyy => (Xyz, XyY),
            Transform::XyyToXyz => (XyY, Xyz),
            Transform::XyzToLab => (Xyz, Lab),
            Transform::LabToXyz => (Lab, Xyz),
            Transform::LabToLchab => (Lab, LCHab),
            Transform::LchabToLab => (LCHab, Lab),
            Transform::XyzToLuv => (Xyz, Luv),
            Transform::LuvToXyz => (Luv, Xyz),
            Transform::LuvToLchuv => (Luv, LCHuv),
            Transform::LchuvToLuv => (LCHuv, Luv),
            Transform::XyzToRgb => (Xyz, Rgb),
            Transform::RgbToXyz => (Rgb, Xyz),
            Transform::RgbToHsl => (Rgb, Hsl),
            Transform::HslToRgb => (Hsl, Rgb),
            Transform::RgbToHsv => (Rgb, Hsv),
            Transform::HsvToRgb => (Hsv, Rgb),
            Transform::RgbToCmy => (Rgb, Cmy),
            Transform::CmyToRgb => (Cmy, Rgb),
            Transform::CmyToCmyk => (Cmy, Cmyk),
            Transform::CmykToCmy => (Cmyk, Cmy),
        }
    }

    /// Looks up everything this transform needs, given the metadata the color will have when it
    /// reaches this step, and updates that metadata to what the step will produce.
    pub fn resolve<'r, R: ReferenceData + ?Sized>(
        self,
        tags: &mut Tags,
        reference: &'r R,
        options: &ConversionOptions,
    ) -> Result<Step<'r>> {
        let observer = tags.observer;
        let adaptation = |source: Illuminant, target: Illuminant| {
            adaptation_between(reference, observer, source, target, options.adaptation)
        };
        let step = match self {
            Transform::SpectralToXyz => {
                let illuminant = options.illuminant.unwrap_or(tags.illuminant);
                let spd = reference.illuminant_spd(illuminant)?;
                let cmf = reference.matching_functions(observer)?;
                tags.illuminant = illuminant;
                Step::SpectralToXyz {
                    spd,
                    cmf,
                    illuminant,
                }
            }
            Transform::XyzToXyy | Transform::XyzToLab | Transform::XyzToLuv => {
                let illuminant = options.illuminant.unwrap_or(tags.illuminant);
                let into_white = ToWhite {
                    adaptation: adaptation(tags.illuminant, illuminant)?,
                    white: reference.white_point(observer, illuminant)?,
                    illuminant,
                };
                tags.illuminant = illuminant;
                match self {
                    Transform::XyzToXyy => Step::XyzToXyy(into_white),
                    Transform::XyzToLab => Step::XyzToLab(into_white),
                    _ => Step::XyzToLuv(into_white),
                }
            }
            Transform::XyyToXyz => Step::XyyToXyz,
            Transform::LabToXyz => Step::LabToXyz {
                white: reference.white_point(observer, tags.illuminant)?,
            },
            Transform::LuvToXyz => Step::LuvToXyz {
                white: reference.white_point(observer, tags.illuminant)?,
            },
            Transform::XyzToRgb => {
                let def = reference.rgb_space(options.rgb_space.unwrap_or_default())?;
                let step = Step::XyzToRgb {
                    adaptation: adaptation(tags.illuminant, def.illuminant)?,
                    def,
                };
                tags.illuminant = def.illuminant;
                tags.rgb_space = Some(def.space);
                step
            }
            Transform::RgbToXyz => {
                let def = reference.rgb_space(tags.rgb_space.unwrap_or_default())?;
                let illuminant = options.illuminant.unwrap_or(def.illuminant);
                let step = Step::RgbToXyz {
                    def,
                    adaptation: adaptation(def.illuminant, illuminant)?,
                    illuminant,
                };
                tags.illuminant = illuminant;
                tags.rgb_space = None;
                step
            }
            Transform::CmyToRgb => {
                let space = options.rgb_space.unwrap_or_default();
                reference.rgb_space(space)?;
                tags.rgb_space = Some(space);
                Step::CmyToRgb { space }
            }
            Transform::RgbToCmy => {
                tags.rgb_space = None;
                Step::Direct(self)
            }
            other => Step::Direct(other),
        };
        Ok(step)
    }
}

/// The metadata a color carries through a chain of steps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tags {
    /// Current illuminant.
    pub illuminant: Illuminant,
    /// Observer, fixed for the whole chain.
    pub observer: Observer,
    /// Working space, while the color is in the RGB family.
    pub rgb_space: Option<RgbSpace>,
}

impl Tags {
    /// The metadata of a color as it stands.
    pub fn of(color: &ColorValue) -> Tags {
        Tags {
            illuminant: color.illuminant,
            observer: color.observer,
            rgb_space: color.rgb_space(),
        }
    }
}

fn adaptation_between<R: ReferenceData + ?Sized>(
    reference: &R,
    observer: Observer,
    source: Illuminant,
    target: Illuminant,
    method: AdaptationMethod,
) -> Result<Option<Matrix<f64>>> {
    if source == target {
        return Ok(None);
    }
    let source_white = reference.white_point(observer, source)?;
    let target_white = reference.white_point(observer, target)?;
    Ok(Some(method.adaptation_matrix(source_white, target_white)?))
}

fn adapt(xyz: XYZColor, adaptation: &Option<Matrix<f64>>) -> XYZColor {
    match adaptation {
        Some(m) => xyz.transform(m),
        None => xyz,
    }
}

/// Adapt-then-normalize data for the steps that leave XYZ for a white-relative space.
#[derive(Debug, Clone)]
pub struct ToWhite {
    adaptation: Option<Matrix<f64>>,
    white: [f64; 3],
    illuminant: Illuminant,
}

/// A transform with its reference data resolved, ready to run.
#[derive(Debug, Clone)]
pub enum Step<'r> {
    /// Integrate a spectrum.
    SpectralToXyz {
        /// The illuminant's spectral power distribution.
        spd: Spectrum,
        /// The observer's color matching functions.
        cmf: &'r MatchingFunctions,
        /// The illuminant integrated under.
        illuminant: Illuminant,
    },
    /// XYZ to xyY.
    XyzToXyy(ToWhite),
    /// XYZ to CIELAB.
    XyzToLab(ToWhite),
    /// XYZ to CIELUV.
    XyzToLuv(ToWhite),
    /// xyY to XYZ.
    XyyToXyz,
    /// CIELAB to XYZ.
    LabToXyz {
        /// The color's white point.
        white: [f64; 3],
    },
    /// CIELUV to XYZ.
    LuvToXyz {
        /// The color's white point.
        white: [f64; 3],
    },
    /// XYZ to RGB, adapting to the space's white first.
    XyzToRgb {
        /// Adaptation onto the space's white, if the color is relative to another.
        adaptation: Option<Matrix<f64>>,
        /// The target space.
        def: &'r RgbSpaceDef,
    },
    /// RGB to XYZ, adapting away from the space's white afterwards if asked.
    RgbToXyz {
        /// The source space.
        def: &'r RgbSpaceDef,
        /// Adaptation onto the requested illuminant.
        adaptation: Option<Matrix<f64>>,
        /// The illuminant of the result.
        illuminant: Illuminant,
    },
    /// CMY to RGB in a chosen working space.
    CmyToRgb {
        /// The space the result is tagged with.
        space: RgbSpace,
    },
    /// A step that needs no reference data.
    Direct(Transform),
}

impl<'r> Step<'r> {
    /// The transform this step runs.
    pub fn transform(&self) -> Transform {
        match self {
            Step::SpectralToXyz { .. } => Transform::SpectralToXyz,
            Step::XyzToXyy(_) => Transform::XyzToXyy,
            Step::XyzToLab(_) => Transform::XyzToLab,
            Step::XyzToLuv(_) => Transform::XyzToLuv,
            Step::XyyToXyz => Transform::XyyToXyz,
            Step::LabToXyz { .. } => Transform::LabToXyz,
            Step::LuvToXyz { .. } => Transform::LuvToXyz,
            Step::XyzToRgb { .. } => Transform::XyzToRgb,
            Step::RgbToXyz { .. } => Transform::RgbToXyz,
            Step::CmyToRgb { .. } => Transform::CmyToRgb,
            Step::Direct(t) => *t,
        }
    }

    /// The illuminant of the step's output, when the step changes it.
    fn output_illuminant(&self) -> Option<Illuminant> {
        match self {
            Step::SpectralToXyz { illuminant, .. } | Step::RgbToXyz { illuminant, .. } => {
                Some(*illuminant)
            }
            Step::XyzToXyy(w) | Step::XyzToLab(w) | Step::XyzToLuv(w) => Some(w.illuminant),
            Step::XyzToRgb { def, .. } => Some(def.illuminant),
            _ => None,
        }
    }

    /// Runs the step. Metadata the step does not change is carried over untouched.
    pub fn apply(&self, color: ColorValue) -> Result<ColorValue> {
        let ColorValue {
            coords,
            illuminant,
            observer,
        } = color;
        let coords = match (self, coords) {
            (Step::SpectralToXyz { spd, cmf, .. }, Coordinates::Spectral(c)) => {
                Coordinates::Xyz(c.to_xyz(spd, cmf)?)
            }
            (Step::XyzToXyy(w), Coordinates::Xyz(c)) => {
                Coordinates::XyY(CIExyYColor::from_xyz(adapt(c, &w.adaptation), w.white))
            }
            (Step::XyzToLab(w), Coordinates::Xyz(c)) => {
                Coordinates::Lab(CIELABColor::from_xyz(adapt(c, &w.adaptation), w.white))
            }
            (Step::XyzToLuv(w), Coordinates::Xyz(c)) => {
                Coordinates::Luv(CIELUVColor::from_xyz(adapt(c, &w.adaptation), w.white))
            }
            (Step::XyyToXyz, Coordinates::XyY(c)) => Coordinates::Xyz(c.to_xyz()),
            (Step::LabToXyz { white }, Coordinates::Lab(c)) => Coordinates::Xyz(c.to_xyz(*white)),
            (Step::LuvToXyz { white }, Coordinates::Luv(c)) => Coordinates::Xyz(c.to_xyz(*white)),
            (Step::XyzToRgb { adaptation, def }, Coordinates::Xyz(c)) => {
                Coordinates::Rgb(RGBColor::from_xyz(adapt(c, adaptation), def), def.space)
            }
            (Step::RgbToXyz { def, adaptation, .. }, Coordinates::Rgb(c, _)) => {
                Coordinates::Xyz(adapt(c.to_xyz(def), adaptation))
            }
            (Step::CmyToRgb { space }, Coordinates::Cmy(c)) => Coordinates::Rgb(c.to_rgb(), *space),
            (Step::Direct(Transform::LabToLchab), Coordinates::Lab(c)) => {
                Coordinates::LCHab(CIELCHColor::from_lab(c))
            }
            (Step::Direct(Transform::LchabToLab), Coordinates::LCHab(c)) => {
                Coordinates::Lab(c.to_lab())
            }
            (Step::Direct(Transform::LuvToLchuv), Coordinates::Luv(c)) => {
                Coordinates::LCHuv(CIELCHuvColor::from_luv(c))
            }
            (Step::Direct(Transform::LchuvToLuv), Coordinates::LCHuv(c)) => {
                Coordinates::Luv(c.to_luv())
            }
            (Step::Direct(Transform::RgbToHsl), Coordinates::Rgb(c, space)) => {
                Coordinates::Hsl(HSLColor::from_rgb(c), space)
            }
            (Step::Direct(Transform::HslToRgb), Coordinates::Hsl(c, space)) => {
                Coordinates::Rgb(c.to_rgb(), space)
            }
            (Step::Direct(Transform::RgbToHsv), Coordinates::Rgb(c, space)) => {
                Coordinates::Hsv(HSVColor::from_rgb(c), space)
            }
            (Step::Direct(Transform::HsvToRgb), Coordinates::Hsv(c, space)) => {
                Coordinates::Rgb(c.to_rgb(), space)
            }
            (Step::Direct(Transform::RgbToCmy), Coordinates::Rgb(c, _)) => {
                Coordinates::Cmy(CMYColor::from_rgb(c))
            }
            (Step::Direct(Transform::CmyToCmyk), Coordinates::Cmy(c)) => {
                Coordinates::Cmyk(CMYKColor::from_cmy(c))
            }
            (Step::Direct(Transform::CmykToCmy), Coordinates::Cmyk(c)) => {
                Coordinates::Cmy(c.to_cmy())
            }
            (step, coords) => {
                return Err(ColorError::UnsupportedConversion {
                    from: coords.kind().to_string(),
                    to: step.transform().endpoints().1.to_string(),
                })
            }
        };
        Ok(ColorValue {
            coords,
            illuminant: self.output_illuminant().unwrap_or(illuminant),
            observer,
        })
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::reference::StandardReference;

    fn run(transform: Transform, color: ColorValue, options: &ConversionOptions) -> ColorValue {
        let mut tags = Tags::of(&color);
        let step = transform
            .resolve(&mut tags, &StandardReference, options)
            .unwrap();
        let out = step.apply(color).unwrap();
        assert_eq!(out.kind(), transform.endpoints().1);
        assert_eq!(Tags::of(&out).illuminant, tags.illuminant);
        out
    }

    #[test]
    fn test_rgb_to_xyz_is_tagged_native() {
        let white = run(
            Transform::RgbToXyz,
            ColorValue::rgb(255.0, 255.0, 255.0),
            &ConversionOptions::default(),
        );
        assert_eq!(white.illuminant, Illuminant::D65);
        let v = white.values();
        assert!((v[0] - 0.95047).abs() <= 1e-12);
        assert!((v[2] - 1.08883).abs() <= 1e-12);
    }

    #[test]
    fn test_rgb_to_xyz_adapts_on_request() {
        let options = ConversionOptions::default().with_illuminant(Illuminant::D50);
        let white = run(
            Transform::RgbToXyz,
            ColorValue::rgb(255.0, 255.0, 255.0),
            &options,
        );
        assert_eq!(white.illuminant, Illuminant::D50);
        let v = white.values();
        assert!((v[0] - 0.96422).abs() <= 1e-10);
        assert!((v[2] - 0.82521).abs() <= 1e-10);
    }

    #[test]
    fn test_xyz_to_lab_adapts_to_requested_white() {
        // D65 white, viewed under D50, is still white
        let d65_white = ColorValue::xyz(0.95047, 1.0, 1.08883).with_illuminant(Illuminant::D65);
        let options = ConversionOptions::default().with_illuminant(Illuminant::D50);
        let lab = run(Transform::XyzToLab, d65_white, &options);
        assert_eq!(lab.illuminant, Illuminant::D50);
        let v = lab.values();
        assert!((v[0] - 100.0).abs() <= 1e-8);
        assert!(v[1].abs() <= 1e-8);
        assert!(v[2].abs() <= 1e-8);
    }

    #[test]
    fn test_spectral_override_selects_spd() {
        let spectral = ColorValue::spectral(crate::colors::SpectralColor::flat(1.0));
        let options = ConversionOptions::default().with_illuminant(Illuminant::A);
        let xyz = run(Transform::SpectralToXyz, spectral, &options);
        assert_eq!(xyz.illuminant, Illuminant::A);
        let v = xyz.values();
        assert!((v[0] - 1.09850).abs() <= 2e-3);
        assert!((v[1] - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn test_rgb_family_keeps_space() {
        let rgb = ColorValue::rgb(200.0, 100.0, 50.0).with_rgb_space(RgbSpace::AdobeRgb);
        let hsl = run(Transform::RgbToHsl, rgb, &ConversionOptions::default());
        assert_eq!(hsl.rgb_space(), Some(RgbSpace::AdobeRgb));
        let cmy = ColorValue::cmy(0.2, 0.4, 0.6);
        let options = ConversionOptions::default().with_rgb_space(RgbSpace::Bt2020);
        let rgb = run(Transform::CmyToRgb, cmy, &options);
        assert_eq!(rgb.rgb_space(), Some(RgbSpace::Bt2020));
    }

    #[test]
    fn test_mismatched_step_is_an_error() {
        let mut tags = Tags::of(&ColorValue::lab(1.0, 2.0, 3.0));
        let step = Transform::LabToLchab
            .resolve(&mut tags, &StandardReference, &ConversionOptions::default())
            .unwrap();
        assert_eq!(
            step.apply(ColorValue::xyz(0.1, 0.2, 0.3)),
            Err(ColorError::UnsupportedConversion {
                from: "xyz".to_string(),
                to: "lchab".to_string(),
            })
        );
    }
}
