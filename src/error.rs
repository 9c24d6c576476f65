// SPDX-License-Identifier: CC0-1.0

use exact_fraction::{Fraction, ZeroDenominator};
use num_bigint::BigInt;

/// Reasons a reconstruction can fail.
///
/// Every error aborts the whole reconstruction; there are no partial results.
#[derive(Debug)]
pub enum Error {
    /// A fraction was built with a zero denominator
    ZeroDenominator,
    /// A digit string contains a character that is not a digit in its base
    InvalidDigit {
        /// The offending character
        digit: char,
        /// The declared base
        base: u32,
    },
    /// A declared base is not an integer between 2 and 36
    InvalidBase(String),
    /// A share identifier is not a base-10 integer
    InvalidShareId(String),
    /// The threshold is zero
    InvalidThreshold,
    /// Fewer decoded shares than the threshold requires
    InsufficientShares {
        /// The threshold
        required: usize,
        /// The number of shares provided
        available: usize,
    },
    /// Two selected shares have the same x-coordinate
    DuplicateCoordinate(BigInt),
    /// The interpolated value at zero is not a whole number
    NonIntegerResult(Fraction),
    /// The share data is not valid JSON or does not match the input format
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ZeroDenominator => write!(f, "denominator cannot be zero"),
            Self::InvalidDigit { digit, base } => {
                write!(f, "invalid digit '{digit}' for base {base}")
            }
            Self::InvalidBase(base) => write!(f, "invalid base: {base:?} (expected 2 to 36)"),
            Self::InvalidShareId(id) => write!(f, "invalid share identifier: {id:?}"),
            Self::InvalidThreshold => write!(f, "threshold must be at least 1"),
            Self::InsufficientShares {
                required,
                available,
            } => write!(
                f,
                "insufficient shares (need {required}, got {available})"
            ),
            Self::DuplicateCoordinate(x) => write!(f, "duplicate x-coordinate: {x}"),
            Self::NonIntegerResult(value) => {
                write!(f, "result is not a whole number: {value}")
            }
            Self::Json(err) => write!(f, "invalid share data: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ZeroDenominator> for Error {
    fn from(_: ZeroDenominator) -> Self {
        Self::ZeroDenominator
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
