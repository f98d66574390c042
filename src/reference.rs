//! This module defines where conversions get their reference data from: white points, RGB working
//! spaces, observer color matching functions, and illuminant spectra. The conversion code only ever
//! talks to the [`ReferenceData`] trait, so a caller with their own measured tables can plug them
//! in; [`StandardReference`] serves the tables bundled with the library. Every lookup names the
//! missing key when it fails rather than falling back to some default.

use std::collections::HashMap;

use crate::error::{ColorError, Result};
use crate::illuminants::{Illuminant, Observer};
use crate::rgb_spaces::{RgbSpace, RgbSpaceDef};
use crate::spectral_tables::{read_cie_spectral_data, MatchingFunctions, SpectralTables, Spectrum};

/// A read-only provider of the reference tables that conversions consume. Implementations must be
/// shareable between threads, as batch distance computations run in parallel.
pub trait ReferenceData: Sync {
    /// The XYZ white point (Y = 1) of an illuminant under an observer.
    fn white_point(&self, observer: Observer, illuminant: Illuminant) -> Result<[f64; 3]>;

    /// The definition of an RGB working space.
    fn rgb_space(&self, space: RgbSpace) -> Result<&RgbSpaceDef>;

    /// The color matching functions of an observer.
    fn matching_functions(&self, observer: Observer) -> Result<&MatchingFunctions>;

    /// The relative spectral power distribution of an illuminant.
    fn illuminant_spd(&self, illuminant: Illuminant) -> Result<Spectrum>;
}

lazy_static! {
    static ref SPECTRAL_TABLES: Result<SpectralTables> = read_cie_spectral_data();
    static ref RGB_SPACE_DEFS: HashMap<RgbSpace, Result<RgbSpaceDef>> = hashmap! {
        RgbSpace::Srgb => RgbSpace::Srgb.definition(),
        RgbSpace::AdobeRgb => RgbSpace::AdobeRgb.definition(),
        RgbSpace::AppleRgb => RgbSpace::AppleRgb.definition(),
        RgbSpace::Bt2020 => RgbSpace::Bt2020.definition(),
        RgbSpace::ProPhoto => RgbSpace::ProPhoto.definition(),
    };
}

/// The tables that ship with the library: ASTM white points, the five built-in RGB spaces, and the
/// CIE 1931/1964 observers sampled from 340 to 830 nm. Everything is built on first use and never
/// changes afterwards.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardReference;

impl StandardReference {
    fn spectral_tables(&self) -> Result<&'static SpectralTables> {
        SPECTRAL_TABLES.as_ref().map_err(Clone::clone)
    }
}

impl ReferenceData for StandardReference {
    fn white_point(&self, observer: Observer, illuminant: Illuminant) -> Result<[f64; 3]> {
        Ok(illuminant.white_point(observer))
    }

    fn rgb_space(&self, space: RgbSpace) -> Result<&RgbSpaceDef> {
        match RGB_SPACE_DEFS.get(&space) {
            Some(Ok(def)) => Ok(def),
            Some(Err(e)) => Err(e.clone()),
            None => Err(ColorError::not_found("RGB working space", space)),
        }
    }

    fn matching_functions(&self, observer: Observer) -> Result<&MatchingFunctions> {
        Ok(self.spectral_tables()?.matching_functions(observer))
    }

    fn illuminant_spd(&self, illuminant: Illuminant) -> Result<Spectrum> {
        self.spectral_tables()?.illuminant_spd(illuminant)
    }
}
