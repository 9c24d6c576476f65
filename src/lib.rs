// SPDX-License-Identifier: CC0-1.0

//! # Shamir Reconstruct
//!
//! Recovers a Shamir shared secret from a threshold of shares using exact
//! Lagrange interpolation over arbitrary-precision rationals.
//!
//! ## Overview
//!
//! Each share is a point `(x, y)` on a polynomial whose constant term is the
//! secret. The x-coordinate is the share's identifier and the y-coordinate is
//! a digit string written in a base between 2 and 36. Reconstruction is a
//! single pass:
//!
//! 1. **Decode**: every share is turned into an integer point
//! 2. **Select**: points are sorted by x and the first `k` (the threshold) are kept
//! 3. **Interpolate**: the Lagrange polynomial through the selected points is
//!    evaluated at zero using exact fractions
//! 4. **Finalize**: the value must be a whole number, which is the secret
//!
//! No floating point is involved at any step, so shares and intermediate
//! products may be arbitrarily large.
//!
//! ## Usage
//!
//! ```rust
//! use shamir_reconstruct::{ShareData, ShareRecord, reconstruct, reconstruct_json};
//!
//! let json = r#"{
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }"#;
//! assert_eq!(reconstruct_json(json).unwrap().to_string(), "3");
//!
//! let data = ShareData::new(2, 2)
//!     .with_share(1, ShareRecord::new(16, "ff"))
//!     .with_share(2, ShareRecord::new(10, "256"));
//! assert_eq!(reconstruct(&data).unwrap().to_string(), "254");
//! ```
//!
//! ## Limitations
//!
//! Only the first `k` shares by ascending x-coordinate are used. Shares
//! beyond the threshold are never checked against the others, so corrupted
//! extra shares go unnoticed.

// Coding conventions
#![deny(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

pub use exact_fraction::{self, Fraction};
pub use num_bigint;

mod error;
mod interpolate;
mod share;

use log::info;
use num_bigint::BigInt;

pub use error::Error;
pub use interpolate::{finalize, interpolate_at_zero, select_points};
pub use share::{
    MAX_BASE, MIN_BASE, Point, ShareConfig, ShareData, ShareRecord, decode_in_base, parse_base,
};

/// Recovers the secret from a set of shares.
pub fn reconstruct(data: &ShareData) -> Result<BigInt, Error> {
    let points = data.points()?;
    let selected = select_points(points, data.config.k)?;
    let value = interpolate_at_zero(&selected)?;
    let secret = finalize(value)?;

    info!(
        "Reconstructed secret from {} of {} shares",
        data.config.k,
        data.shares.len()
    );
    Ok(secret)
}

/// Parses shares in the JSON input format and recovers the secret.
pub fn reconstruct_json(json: &str) -> Result<BigInt, Error> {
    reconstruct(&ShareData::from_json(json)?)
}
