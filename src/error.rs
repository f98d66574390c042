//! The single error type used throughout the crate. Every variant names the offending field, value
//! or kind so that a failed conversion can be diagnosed from the message alone. Nothing here is
//! transient: a `ColorError` is always an input or configuration problem, surfaced immediately.

use thiserror::Error;

/// Everything that can go wrong when validating, converting or comparing colors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The observer angle is not one of 2° or 10°.
    #[error("invalid observer angle {0:?}: expected 2° or 10°")]
    InvalidObserver(String),

    /// The illuminant is not known, or has no white point for the active observer.
    #[error("invalid illuminant {illuminant:?} for the {observer} observer")]
    InvalidIlluminant {
        /// The illuminant that was requested.
        illuminant: String,
        /// The observer angle it was requested for.
        observer: String,
    },

    /// A required coordinate was never set.
    #[error("missing value: {kind} color has no `{field}`")]
    MissingValue {
        /// The kind of the color being validated.
        kind: String,
        /// The coordinate that is absent.
        field: String,
    },

    /// A coordinate is present but is not a usable number.
    #[error("invalid value {value:?} for `{field}` of {kind} color")]
    InvalidValue {
        /// The kind of the color being validated.
        kind: String,
        /// The offending coordinate.
        field: String,
        /// What the coordinate actually held.
        value: String,
    },

    /// No conversion path exists between the two kinds.
    #[error("unsupported conversion from {from} to {to}")]
    UnsupportedConversion {
        /// Source kind.
        from: String,
        /// Requested target kind.
        to: String,
    },

    /// The requested Delta E formula does not exist.
    #[error("invalid delta-E mode {0:?}: expected cie1976, cie1994, cie2000 or cmc")]
    InvalidDeltaEMode(String),

    /// An argument was of the wrong shape, such as a malformed hex string.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// The argument that was rejected.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A reference table has no entry for the requested key.
    #[error("{table} not found for {key:?}")]
    ReferenceNotFound {
        /// Which table was consulted.
        table: String,
        /// The missing key.
        key: String,
    },

    /// A matrix derived from reference data could not be inverted.
    #[error("matrix error: {0}")]
    Matrix(String),
}

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

impl ColorError {
    pub(crate) fn not_found(table: &str, key: impl ToString) -> ColorError {
        ColorError::ReferenceNotFound {
            table: table.to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid_argument(argument: &str, reason: impl ToString) -> ColorError {
        ColorError::InvalidArgument {
            argument: argument.to_string(),
            reason: reason.to_string(),
        }
    }
}
