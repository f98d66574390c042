//! The caller-facing entry points. A [`Converter`] bundles a reference data provider with the
//! conversion graph and the Delta E formulas; the free functions here use the bundled tables.

use rayon::prelude::*;

use crate::colors::{CIELABColor, ColorKind, ColorValue, Coordinates};
use crate::conversion::{self, ConversionOptions, ConversionTrace};
use crate::delta_e::{delta_e_many, DeltaEMode};
use crate::error::{ColorError, Result};
use crate::reference::{ReferenceData, StandardReference};

/// Converts and compares colors against one set of reference data.
///
/// # Example
/// ```
/// # use tristimulus::colors::{ColorKind, ColorValue};
/// # use tristimulus::conversion::ConversionOptions;
/// # use tristimulus::converter::Converter;
/// # use tristimulus::delta_e::DeltaEMode;
/// let converter = Converter::new();
/// let options = ConversionOptions::default();
/// let red = ColorValue::rgb(255.0, 0.0, 0.0);
/// let hsv = converter.convert(&red, ColorKind::Hsv, &options).unwrap();
/// assert_eq!(hsv.values(), vec![0.0, 1.0, 1.0]);
/// let de = converter.delta_e(&red, &hsv, &DeltaEMode::default(), &options).unwrap();
/// assert!(de < 1e-9);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Converter<R: ReferenceData = StandardReference> {
    reference: R,
}

impl Converter<StandardReference> {
    /// A converter over the bundled tables.
    pub fn new() -> Converter<StandardReference> {
        Converter {
            reference: StandardReference,
        }
    }
}

impl<R: ReferenceData> Converter<R> {
    /// A converter over caller-supplied tables.
    pub fn with_reference(reference: R) -> Converter<R> {
        Converter { reference }
    }

    /// The reference data in use.
    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// Converts a color to another kind.
    pub fn convert(
        &self,
        color: &ColorValue,
        target: ColorKind,
        options: &ConversionOptions,
    ) -> Result<ColorValue> {
        conversion::convert(color, target, &self.reference, options)
    }

    /// Converts a color, keeping every intermediate value.
    pub fn convert_traced(
        &self,
        color: &ColorValue,
        target: ColorKind,
        options: &ConversionOptions,
    ) -> Result<ConversionTrace> {
        conversion::convert_traced(color, target, &self.reference, options)
    }

    /// Converts a color to a kind given by name. A name that is not a kind has no conversion path,
    /// and is reported as such.
    pub fn convert_named(
        &self,
        color: &ColorValue,
        target: &str,
        options: &ConversionOptions,
    ) -> Result<ColorValue> {
        let kind = target
            .parse::<ColorKind>()
            .map_err(|_| ColorError::UnsupportedConversion {
                from: color.kind().to_string(),
                to: target.to_string(),
            })?;
        self.convert(color, kind, options)
    }

    fn to_lab(&self, color: &ColorValue, options: &ConversionOptions) -> Result<CIELABColor> {
        match self.convert(color, ColorKind::Lab, options)?.coords {
            Coordinates::Lab(lab) => Ok(lab),
            other => Err(ColorError::UnsupportedConversion {
                from: other.kind().to_string(),
                to: ColorKind::Lab.to_string(),
            }),
        }
    }

    /// The difference between two colors of any kinds. Both are taken to CIELAB first; `reference`
    /// is the standard the asymmetric formulas weight by.
    pub fn delta_e(
        &self,
        reference: &ColorValue,
        sample: &ColorValue,
        mode: &DeltaEMode,
        options: &ConversionOptions,
    ) -> Result<f64> {
        let reference = self.to_lab(reference, options)?;
        let sample = self.to_lab(sample, options)?;
        Ok(mode.delta_e(&reference, &sample))
    }

    /// The difference between a reference color and each candidate, in candidate order. The
    /// candidates must all be of one kind.
    pub fn delta_e_batch(
        &self,
        reference: &ColorValue,
        candidates: &[ColorValue],
        mode: &DeltaEMode,
        options: &ConversionOptions,
    ) -> Result<Vec<f64>> {
        if let Some(first) = candidates.first() {
            if let Some(odd) = candidates.iter().find(|c| c.kind() != first.kind()) {
                return Err(ColorError::invalid_argument(
                    "candidates",
                    format!(
                        "all candidates must be of one kind, found {} and {}",
                        first.kind(),
                        odd.kind()
                    ),
                ));
            }
        }
        let reference = self.to_lab(reference, options)?;
        let samples = candidates
            .par_iter()
            .map(|candidate| self.to_lab(candidate, options))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(candidates = samples.len(), mode = %mode, "Computing delta E batch");
        Ok(delta_e_many(&reference, &samples, mode))
    }
}

/// Converts a color using the bundled tables.
pub fn convert(
    color: &ColorValue,
    target: ColorKind,
    options: &ConversionOptions,
) -> Result<ColorValue> {
    Converter::new().convert(color, target, options)
}

/// The difference between two colors, using the bundled tables.
pub fn delta_e(
    reference: &ColorValue,
    sample: &ColorValue,
    mode: &DeltaEMode,
    options: &ConversionOptions,
) -> Result<f64> {
    Converter::new().delta_e(reference, sample, mode, options)
}

/// The difference between a reference color and each candidate, using the bundled tables.
pub fn delta_e_batch(
    reference: &ColorValue,
    candidates: &[ColorValue],
    mode: &DeltaEMode,
    options: &ConversionOptions,
) -> Result<Vec<f64>> {
    Converter::new().delta_e_batch(reference, candidates, mode, options)
}
