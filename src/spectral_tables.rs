//! This file reads the bundled CIE spectral data: the standard observer color matching functions
//! and the daylight basis functions, sampled every 10 nm from 340 nm to 830 nm. Illuminant spectral
//! power distributions are rebuilt from that data when needed: the D series from the daylight
//! basis, A from Planck's law, and E as a flat spectrum. The CSV is compiled into the library, so
//! the only way for it to be unreadable is a broken build; even then, lookups return an error
//! rather than panic.

use crate::error::{ColorError, Result};
use crate::illuminants::{Illuminant, Observer};

/// The number of samples in every spectral table and in a `SpectralColor`.
pub const SPECTRAL_SAMPLES: usize = 50;

/// The wavelength of the first sample, in nanometers.
pub const FIRST_WAVELENGTH: u16 = 340;

/// The spacing between samples, in nanometers.
pub const WAVELENGTH_STEP: u16 = 10;

/// A spectral quantity sampled at each of the standard wavelengths.
pub type Spectrum = [f64; SPECTRAL_SAMPLES];

static CIE_SPECTRAL_CSV: &str = include_str!("../data/cie_spectral.csv");

#[derive(Debug, Deserialize)]
struct Record {
    wavelength: u16,
    x2: f64,
    y2: f64,
    z2: f64,
    x10: f64,
    y10: f64,
    z10: f64,
    s0: f64,
    s1: f64,
    s2: f64,
}

/// The three color matching functions of one standard observer.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingFunctions {
    /// x̄(λ)
    pub x: Spectrum,
    /// ȳ(λ)
    pub y: Spectrum,
    /// z̄(λ)
    pub z: Spectrum,
}

/// Everything read out of the bundled table.
#[derive(Debug, Clone)]
pub struct SpectralTables {
    /// The sampled wavelengths, in nanometers.
    pub wavelengths: [u16; SPECTRAL_SAMPLES],
    /// CIE 1931 2° observer.
    pub observer_2: MatchingFunctions,
    /// CIE 1964 10° observer.
    pub observer_10: MatchingFunctions,
    /// The mean daylight component S0 and the two characteristic vectors S1 and S2.
    pub daylight_basis: [Spectrum; 3],
}

/// Parses the bundled CIE table. Called once by the standard reference.
pub fn read_cie_spectral_data() -> Result<SpectralTables> {
    let broken = |reason: String| ColorError::not_found("CIE spectral table", reason);
    let empty = [0.0; SPECTRAL_SAMPLES];
    let mut tables = SpectralTables {
        wavelengths: [0; SPECTRAL_SAMPLES],
        observer_2: MatchingFunctions {
            x: empty,
            y: empty,
            z: empty,
        },
        observer_10: MatchingFunctions {
            x: empty,
            y: empty,
            z: empty,
        },
        daylight_basis: [empty; 3],
    };
    let mut reader = csv::Reader::from_reader(CIE_SPECTRAL_CSV.as_bytes());
    let mut count = 0;
    for (i, result) in reader.deserialize().enumerate() {
        let record: Record = result.map_err(|e| broken(e.to_string()))?;
        let expected = FIRST_WAVELENGTH + WAVELENGTH_STEP * i as u16;
        if i >= SPECTRAL_SAMPLES || record.wavelength != expected {
            return Err(broken(format!("unexpected row for {} nm", record.wavelength)));
        }
        tables.wavelengths[i] = record.wavelength;
        tables.observer_2.x[i] = record.x2;
        tables.observer_2.y[i] = record.y2;
        tables.observer_2.z[i] = record.z2;
        tables.observer_10.x[i] = record.x10;
        tables.observer_10.y[i] = record.y10;
        tables.observer_10.z[i] = record.z10;
        tables.daylight_basis[0][i] = record.s0;
        tables.daylight_basis[1][i] = record.s1;
        tables.daylight_basis[2][i] = record.s2;
        count += 1;
    }
    if count != SPECTRAL_SAMPLES {
        return Err(broken(format!("{} rows instead of {}", count, SPECTRAL_SAMPLES)));
    }
    Ok(tables)
}

impl SpectralTables {
    /// The color matching functions for an observer.
    pub fn matching_functions(&self, observer: Observer) -> &MatchingFunctions {
        match observer {
            Observer::Two => &self.observer_2,
            Observer::Ten => &self.observer_10,
        }
    }

    /// Rebuilds the relative spectral power distribution of an illuminant, normalized to 100 at
    /// 560 nm. Only illuminants with a defining formula are available.
    pub fn illuminant_spd(&self, illuminant: Illuminant) -> Result<Spectrum> {
        // nominal CCTs were fixed before c2 was revised from 1.4380e-2 to 1.4388e-2
        let revised = |nominal: f64| nominal * 1.4388 / 1.4380;
        match illuminant {
            Illuminant::D50 => Ok(self.daylight(revised(5000.0))),
            Illuminant::D55 => Ok(self.daylight(revised(5500.0))),
            Illuminant::D65 => Ok(self.daylight(revised(6500.0))),
            Illuminant::D75 => Ok(self.daylight(revised(7500.0))),
            Illuminant::A => Ok(self.planckian(2856.0)),
            Illuminant::E => Ok([100.0; SPECTRAL_SAMPLES]),
            other => Err(ColorError::not_found(
                "illuminant spectral power distribution",
                other,
            )),
        }
    }

    /// CIE daylight at a correlated color temperature, from the S0/S1/S2 basis with M1 and M2
    /// rounded to three decimals as the standard prescribes.
    fn daylight(&self, cct: f64) -> Spectrum {
        let t = cct;
        let x_d = if t <= 7000.0 {
            -4.6070e9 / t.powi(3) + 2.9678e6 / t.powi(2) + 0.09911e3 / t + 0.244063
        } else {
            -2.0064e9 / t.powi(3) + 1.9018e6 / t.powi(2) + 0.24748e3 / t + 0.237040
        };
        let y_d = -3.0 * x_d * x_d + 2.870 * x_d - 0.275;
        let m = 0.0241 + 0.2562 * x_d - 0.7341 * y_d;
        let round3 = |v: f64| (v * 1000.0).round() / 1000.0;
        let m1 = round3((-1.3515 - 1.7703 * x_d + 5.9114 * y_d) / m);
        let m2 = round3((0.0300 - 31.4424 * x_d + 30.0717 * y_d) / m);
        let [s0, s1, s2] = &self.daylight_basis;
        let mut spd = [0.0; SPECTRAL_SAMPLES];
        for i in 0..SPECTRAL_SAMPLES {
            spd[i] = s0[i] + m1 * s1[i] + m2 * s2[i];
        }
        spd
    }

    /// A blackbody radiator at the given temperature, with the c2 value that defines illuminant A.
    fn planckian(&self, temperature: f64) -> Spectrum {
        let c2 = 1.435e7;
        let mut spd = [0.0; SPECTRAL_SAMPLES];
        for (i, &wavelength) in self.wavelengths.iter().enumerate() {
            let lambda = f64::from(wavelength);
            spd[i] = 100.0
                * (560.0 / lambda).powi(5)
                * ((c2 / (temperature * 560.0)).exp() - 1.0)
                / ((c2 / (temperature * lambda)).exp() - 1.0);
        }
        spd
    }
}
