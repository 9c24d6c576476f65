// SPDX-License-Identifier: CC0-1.0

use num_bigint::BigInt;
use num_traits::Zero;

use crate::Error;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base (`0-9` followed by `a-z`).
pub const MAX_BASE: u32 = 36;

/// Parses a string-encoded base and checks it lies in `MIN_BASE..=MAX_BASE`.
pub fn parse_base(base: &str) -> Result<u32, Error> {
    base.trim()
        .parse::<u32>()
        .ok()
        .filter(|b| (MIN_BASE..=MAX_BASE).contains(b))
        .ok_or_else(|| Error::InvalidBase(base.to_string()))
}

/// Decodes a digit string written in `base` into an integer.
///
/// Digits are read most significant first. `0-9` map to 0..=9 and `a-z`
/// (in either case) map to 10..=35. Any other character, or a digit not
/// smaller than `base`, is rejected. An empty string decodes to zero.
pub fn decode_in_base(digits: &str, base: u32) -> Result<BigInt, Error> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase(base.to_string()));
    }

    let radix = BigInt::from(base);
    let mut result = BigInt::zero();
    for c in digits.chars() {
        let digit = c
            .to_digit(MAX_BASE)
            .filter(|&d| d < base)
            .ok_or(Error::InvalidDigit { digit: c, base })?;
        result = result * &radix + digit;
    }
    Ok(result)
}
