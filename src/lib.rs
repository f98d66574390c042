//! Tristimulus is a library for converting colors between the representations colorimetry works
//! in, and for measuring how different two colors look. It covers reflectance spectra, CIE XYZ and
//! xyY, CIELAB and CIELUV with their cylindrical forms, RGB in several working spaces, and the
//! RGB-derived HSL, HSV, CMY and CMYK. Any of these converts to any other (except back into a
//! spectrum), with chromatic adaptation between illuminants handled along the way. Differences are
//! measured with CIE1976, CIE1994, CIEDE2000 or CMC l:c, one pair at a time or one reference
//! against many candidates.
//!
//! Every color carries the illuminant and standard observer its numbers are relative to, and every
//! conversion checks its input and the reference data it needs before doing any arithmetic, so a
//! conversion either succeeds or fails with an error naming what was wrong.
//!
//! # Example
//! ```
//! use tristimulus::prelude::*;
//!
//! let options = ConversionOptions::default();
//! let white = ColorValue::rgb(255.0, 255.0, 255.0);
//! let lab = convert(&white, ColorKind::Lab, &options).unwrap();
//! assert!((lab.values()[0] - 100.0).abs() < 1e-6);
//!
//! let orange = from_hex("#e8731c").unwrap();
//! let de = delta_e(&white, &orange, &DeltaEMode::default(), &options).unwrap();
//! assert!(de > 10.0);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate serde_derive;

pub mod bound;
pub mod colors;
pub mod consts;
pub mod conversion;
pub mod converter;
pub mod coord;
pub mod delta_e;
pub mod error;
pub mod hex;
pub mod illuminants;
pub mod prelude;
pub mod record;
pub mod reference;
pub mod rgb_spaces;
pub mod spectral_tables;
pub mod transform;

pub use crate::converter::{convert, delta_e, delta_e_batch, Converter};
pub use crate::error::{ColorError, Result};
