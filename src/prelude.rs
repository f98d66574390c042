//! This module brings the most common functionality under a single namespace, to prevent excessive
//! imports: the color value and its tags, the conversion options, the caller-facing functions, and
//! the Delta E modes. The per-representation coordinate structs in [`colors`](crate::colors) are
//! not included, and neither is the lower-level conversion machinery.

pub use crate::bound::Bound;
pub use crate::colors::{ColorKind, ColorValue, Coordinates};
pub use crate::consts::AdaptationMethod;
pub use crate::conversion::ConversionOptions;
pub use crate::converter::{convert, delta_e, delta_e_batch, Converter};
pub use crate::delta_e::{Cie1994Params, Cie2000Params, CmcParams, DeltaEMode};
pub use crate::error::{ColorError, Result};
pub use crate::hex::{from_hex, to_hex};
pub use crate::illuminants::{Illuminant, Observer};
pub use crate::record::ColorRecord;
pub use crate::reference::{ReferenceData, StandardReference};
pub use crate::rgb_spaces::RgbSpace;
