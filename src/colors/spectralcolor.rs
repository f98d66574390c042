//! Spectral colors: a reflectance (or transmittance) measured at every standard wavelength. This is
//! the most complete description of a surface there is, and every other representation can be
//! derived from it once an illuminant and an observer are chosen. The reverse is not true, as many
//! spectra produce the same tristimulus values, so nothing converts *to* a spectral color.

use crate::colors::XYZColor;
use crate::error::{ColorError, Result};
use crate::spectral_tables::{MatchingFunctions, Spectrum, SPECTRAL_SAMPLES};

/// A reflectance spectrum sampled every 10 nm from 340 nm to 830 nm. A perfect white reflector has
/// every sample equal to 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpectralColor {
    /// The samples, in order of increasing wavelength.
    pub samples: Spectrum,
}

impl SpectralColor {
    /// Wraps a full set of samples.
    pub fn new(samples: Spectrum) -> SpectralColor {
        SpectralColor { samples }
    }

    /// A spectrally flat color: a neutral gray, or a perfect white reflector at 1.
    pub fn flat(reflectance: f64) -> SpectralColor {
        SpectralColor {
            samples: [reflectance; SPECTRAL_SAMPLES],
        }
    }

    /// Integrates the spectrum under an illuminant and an observer. The result is normalized so
    /// that a perfect reflector has Y = 1, matching the white point convention used everywhere
    /// else.
    pub fn to_xyz(&self, spd: &Spectrum, cmf: &MatchingFunctions) -> Result<XYZColor> {
        let mut xyz = [0.0; 3];
        let mut norm = 0.0;
        for i in 0..SPECTRAL_SAMPLES {
            let lit = self.samples[i] * spd[i];
            xyz[0] += lit * cmf.x[i];
            xyz[1] += lit * cmf.y[i];
            xyz[2] += lit * cmf.z[i];
            norm += spd[i] * cmf.y[i];
        }
        if norm == 0.0 {
            return Err(ColorError::invalid_argument(
                "illuminant",
                "spectral power distribution has no luminance",
            ));
        }
        Ok(XYZColor {
            x: xyz[0] / norm,
            y: xyz[1] / norm,
            z: xyz[2] / norm,
        })
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::illuminants::{Illuminant, Observer};
    use crate::spectral_tables::read_cie_spectral_data;

    #[test]
    fn test_perfect_reflector_is_white() {
        let tables = read_cie_spectral_data().unwrap();
        let spd = tables.illuminant_spd(Illuminant::D65).unwrap();
        let cmf = tables.matching_functions(Observer::Two);
        let white = SpectralColor::flat(1.0).to_xyz(&spd, cmf).unwrap();
        assert!((white.y - 1.0).abs() <= 1e-12);
        assert!((white.x - 0.95047).abs() <= 2e-3);
        assert!((white.z - 1.08883).abs() <= 2e-3);
        // gray is exactly proportional
        let gray = SpectralColor::flat(0.5).to_xyz(&spd, cmf).unwrap();
        assert!((gray.y - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn test_dark_illuminant_is_an_error() {
        let tables = read_cie_spectral_data().unwrap();
        let cmf = tables.matching_functions(Observer::Two);
        let dark = [0.0; SPECTRAL_SAMPLES];
        assert!(SpectralColor::flat(1.0).to_xyz(&dark, cmf).is_err());
    }
}
