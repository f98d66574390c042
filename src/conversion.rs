//! The conversion graph. Every pair of kinds has a fixed chain of [`Transform`]s between them,
//! computed once: RGB-family kinds talk to each other through RGB, the cylindrical CIE spaces talk
//! to their rectangular forms directly, and everything else meets in XYZ. Nothing converts into a
//! spectrum, so those pairs have no chain at all.
//!
//! A conversion first resolves every step of its chain against the reference data, so a missing
//! white point or working space is reported before any arithmetic is done.

use std::collections::HashMap;

use crate::colors::{ColorKind, ColorValue, COLOR_KINDS};
use crate::consts::AdaptationMethod;
use crate::error::{ColorError, Result};
use crate::illuminants::{Illuminant, Observer};
use crate::reference::ReferenceData;
use crate::rgb_spaces::RgbSpace;
use crate::transform::{Tags, Transform};

/// Per-call overrides for a conversion. Everything is optional: with the defaults, a conversion
/// uses the color's own illuminant and observer, sRGB as the target working space, and Bradford
/// adaptation.
///
/// # Example
/// ```
/// # use tristimulus::conversion::ConversionOptions;
/// # use tristimulus::consts::AdaptationMethod;
/// # use tristimulus::illuminants::Illuminant;
/// let options = ConversionOptions::default()
///     .with_illuminant(Illuminant::D65)
///     .with_adaptation(AdaptationMethod::VonKries);
/// assert_eq!(options.illuminant, Some(Illuminant::D65));
/// assert_eq!(options.rgb_space, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// The illuminant to integrate spectra under, to adapt RGB→XYZ output to, and to adapt XYZ to
    /// before going to Lab, Luv or xyY.
    pub illuminant: Option<Illuminant>,
    /// Replaces the color's observer for every lookup.
    pub observer: Option<Observer>,
    /// The working space to encode into when producing RGB, HSL or HSV from a kind that has none.
    pub rgb_space: Option<RgbSpace>,
    /// The chromatic adaptation transform.
    pub adaptation: AdaptationMethod,
}

impl ConversionOptions {
    /// Sets the target illuminant.
    pub fn with_illuminant(mut self, illuminant: Illuminant) -> ConversionOptions {
        self.illuminant = Some(illuminant);
        self
    }

    /// Sets the observer override.
    pub fn with_observer(mut self, observer: Observer) -> ConversionOptions {
        self.observer = Some(observer);
        self
    }

    /// Sets the target working space.
    pub fn with_rgb_space(mut self, space: RgbSpace) -> ConversionOptions {
        self.rgb_space = Some(space);
        self
    }

    /// Sets the adaptation method.
    pub fn with_adaptation(mut self, adaptation: AdaptationMethod) -> ConversionOptions {
        self.adaptation = adaptation;
        self
    }
}

fn is_rgb_family(kind: ColorKind) -> bool {
    match kind {
        ColorKind::Rgb | ColorKind::Hsl | ColorKind::Hsv | ColorKind::Cmy | ColorKind::Cmyk => true,
        _ => false,
    }
}

fn to_xyz(from: ColorKind) -> Vec<Transform> {
    use self::Transform::*;
    match from {
        ColorKind::Spectral => vec![SpectralToXyz],
        ColorKind::Xyz => vec![],
        ColorKind::XyY => vec![XyyToXyz],
        ColorKind::Lab => vec![LabToXyz],
        ColorKind::LCHab => vec![LchabToLab, LabToXyz],
        ColorKind::Luv => vec![LuvToXyz],
        ColorKind::LCHuv => vec![LchuvToLuv, LuvToXyz],
        rgb_family => {
            let mut path = to_rgb(rgb_family);
            path.push(RgbToXyz);
            path
        }
    }
}

fn from_xyz(to: ColorKind) -> Vec<Transform> {
    use self::Transform::*;
    match to {
        ColorKind::Xyz => vec![],
        ColorKind::XyY => vec![XyzToXyy],
        ColorKind::Lab => vec![XyzToLab],
        ColorKind::LCHab => vec![XyzToLab, LabToLchab],
        ColorKind::Luv => vec![XyzToLuv],
        ColorKind::LCHuv => vec![XyzToLuv, LuvToLchuv],
        rgb_family => {
            let mut path = vec![XyzToRgb];
            path.extend(from_rgb(rgb_family));
            path
        }
    }
}

fn to_rgb(from: ColorKind) -> Vec<Transform> {
    use self::Transform::*;
    match from {
        ColorKind::Hsl => vec![HslToRgb],
        ColorKind::Hsv => vec![HsvToRgb],
        ColorKind::Cmy => vec![CmyToRgb],
        ColorKind::Cmyk => vec![CmykToCmy, CmyToRgb],
        _ => vec![],
    }
}

fn from_rgb(to: ColorKind) -> Vec<Transform> {
    use self::Transform::*;
    match to {
        ColorKind::Hsl => vec![RgbToHsl],
        ColorKind::Hsv => vec![RgbToHsv],
        ColorKind::Cmy => vec![RgbToCmy],
        ColorKind::Cmyk => vec![RgbToCmy, CmyToCmyk],
        _ => vec![],
    }
}

fn build_path(from: ColorKind, to: ColorKind) -> Vec<Transform> {
    use self::ColorKind::*;
    match (from, to) {
        _ if from == to => vec![],
        (Cmy, Cmyk) => vec![Transform::CmyToCmyk],
        (Cmyk, Cmy) => vec![Transform::CmykToCmy],
        (Lab, LCHab) => vec![Transform::LabToLchab],
        (LCHab, Lab) => vec![Transform::LchabToLab],
        (Luv, LCHuv) => vec![Transform::LuvToLchuv],
        (LCHuv, Luv) => vec![Transform::LchuvToLuv],
        _ if is_rgb_family(from) && is_rgb_family(to) => {
            let mut path = to_rgb(from);
            path.extend(from_rgb(to));
            path
        }
        _ => {
            let mut path = to_xyz(from);
            path.extend(from_xyz(to));
            path
        }
    }
}

lazy_static! {
    static ref CONVERSION_PATHS: HashMap<(ColorKind, ColorKind), Vec<Transform>> = {
        let mut paths = HashMap::new();
        for &from in COLOR_KINDS.iter() {
            for &to in COLOR_KINDS.iter() {
                if to == ColorKind::Spectral && from != ColorKind::Spectral {
                    continue;
                }
                paths.insert((from, to), build_path(from, to));
            }
        }
        paths
    };
}

/// The chain of transforms that takes one kind to another.
///
/// # Example
/// ```
/// # use tristimulus::colors::ColorKind;
/// # use tristimulus::conversion::conversion_path;
/// # use tristimulus::transform::Transform;
/// let path = conversion_path(ColorKind::Hsl, ColorKind::Lab).unwrap();
/// assert_eq!(path, &[Transform::HslToRgb, Transform::RgbToXyz, Transform::XyzToLab][..]);
/// assert!(conversion_path(ColorKind::Lab, ColorKind::Spectral).is_err());
/// ```
pub fn conversion_path(from: ColorKind, to: ColorKind) -> Result<&'static [Transform]> {
    CONVERSION_PATHS
        .get(&(from, to))
        .map(Vec::as_slice)
        .ok_or_else(|| ColorError::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        })
}

/// A converted color together with every value it passed through on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTrace {
    /// The final value.
    pub result: ColorValue,
    /// The output of each step, in order. The last entry is the result itself.
    pub intermediates: Vec<(Transform, ColorValue)>,
}

/// Converts a color to another kind. The color is checked for non-finite coordinates and every
/// step of the chain is resolved against `reference` before anything is computed.
pub fn convert<R: ReferenceData + ?Sized>(
    color: &ColorValue,
    target: ColorKind,
    reference: &R,
    options: &ConversionOptions,
) -> Result<ColorValue> {
    run(color, target, reference, options, |_, _| {})
}

/// Like [`convert`], but also records the intermediate values.
pub fn convert_traced<R: ReferenceData + ?Sized>(
    color: &ColorValue,
    target: ColorKind,
    reference: &R,
    options: &ConversionOptions,
) -> Result<ConversionTrace> {
    let mut intermediates = Vec::new();
    let result = run(color, target, reference, options, |transform, value| {
        intermediates.push((transform, value.clone()))
    })?;
    Ok(ConversionTrace {
        result,
        intermediates,
    })
}

fn run<R, F>(
    color: &ColorValue,
    target: ColorKind,
    reference: &R,
    options: &ConversionOptions,
    mut visit: F,
) -> Result<ColorValue>
where
    R: ReferenceData + ?Sized,
    F: FnMut(Transform, &ColorValue),
{
    color.validate()?;
    let path = conversion_path(color.kind(), target)?;
    tracing::debug!(
        from = %color.kind(),
        to = %target,
        steps = path.len(),
        "Converting color"
    );

    let mut value = color.clone();
    if let Some(observer) = options.observer {
        value.observer = observer;
    }

    let mut tags = Tags::of(&value);
    let steps = path
        .iter()
        .map(|transform| transform.resolve(&mut tags, reference, options))
        .collect::<Result<Vec<_>>>()?;

    for step in &steps {
        let next = step.apply(value.clone())?;
        tracing::trace!(
            step = ?step.transform(),
            input = ?value.values(),
            output = ?next.values(),
            "Applied conversion step"
        );
        visit(step.transform(), &next);
        value = next;
    }
    Ok(value)
}
