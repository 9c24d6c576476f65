// SPDX-License-Identifier: CC0-1.0

use log::trace;
use num_bigint::BigInt;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::str::FromStr;

use super::decode::{decode_in_base, parse_base};
use crate::Error;

/// A single encoded share: a digit string and the base it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareRecord {
    /// Declared base, a string-encoded integer between 2 and 36
    pub base: String,
    /// The y-coordinate written in `base`
    pub value: String,
}

impl ShareRecord {
    /// Creates a record for `value` written in `base`.
    pub fn new(base: u32, value: impl Into<String>) -> Self {
        ShareRecord {
            base: base.to_string(),
            value: value.into(),
        }
    }

    /// Decodes the y-coordinate carried by this record.
    pub fn decode(&self) -> Result<BigInt, Error> {
        decode_in_base(&self.value, parse_base(&self.base)?)
    }
}

/// Share count and reconstruction threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ShareConfig {
    /// Total number of shares issued. Informational only, zero when absent.
    #[serde(default)]
    pub n: usize,
    /// Number of shares used for reconstruction.
    pub k: usize,
}

/// A decoded share.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// x-coordinate, the share identifier
    pub x: BigInt,
    /// y-coordinate, the decoded share value
    pub y: BigInt,
}

impl Point {
    /// Creates a point.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// A complete reconstruction input.
///
/// The JSON form keeps the configuration under the reserved `"keys"` entry
/// and every other entry is a share keyed by its base-10 x-coordinate:
///
/// ```json
/// {
///     "keys": { "n": 4, "k": 3 },
///     "1": { "base": "10", "value": "4" },
///     "2": { "base": "2", "value": "111" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareData {
    /// Share count and threshold
    #[serde(rename = "keys")]
    pub config: ShareConfig,
    /// Shares keyed by identifier
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareRecord>,
}

impl ShareData {
    /// Creates an input with no shares.
    pub fn new(n: usize, k: usize) -> Self {
        ShareData {
            config: ShareConfig { n, k },
            shares: BTreeMap::new(),
        }
    }

    /// Adds a share, replacing any share with the same identifier.
    pub fn with_share(mut self, id: impl ToString, record: ShareRecord) -> Self {
        self.shares.insert(id.to_string(), record);
        self
    }

    /// Parses the JSON input format.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses the JSON input format from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Decodes every share into a point, in identifier order.
    pub fn points(&self) -> Result<Vec<Point>, Error> {
        self.shares
            .iter()
            .map(|(id, record)| {
                let x = parse_share_id(id)?;
                let y = record.decode()?;
                trace!("decoded share {id}: ({x}, {y})");
                Ok(Point { x, y })
            })
            .collect()
    }
}

// An optional '-' followed by ASCII digits, nothing else
fn parse_share_id(id: &str) -> Result<BigInt, Error> {
    let digits = id.strip_prefix('-').unwrap_or(id);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidShareId(id.to_string()));
    }
    BigInt::from_str(id).map_err(|_| Error::InvalidShareId(id.to_string()))
}
