// SPDX-License-Identifier: CC0-1.0

//! # Exact Fraction
//!
//! Arbitrary-precision rational numbers for exact interpolation.
//!
//! A [`Fraction`] is always stored in canonical form: the denominator is
//! strictly positive and shares no common factor with the numerator. Every
//! arithmetic operation produces a fresh, reduced value, so two fractions are
//! equal exactly when their stored numerators and denominators are equal.
//!
//! ```rust
//! use exact_fraction::Fraction;
//!
//! let half = Fraction::new(1, 2).unwrap();
//! let third = Fraction::new(-2, -6).unwrap();
//!
//! assert_eq!((&half + &third).to_string(), "5/6");
//! assert_eq!((&half * &third).to_string(), "1/6");
//! assert!(Fraction::new(1, 0).is_err());
//! ```

// Coding conventions
#![deny(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

pub use num_bigint::BigInt;

use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg};

/// Error returned when a fraction is built with a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroDenominator;

impl fmt::Display for ZeroDenominator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "denominator cannot be zero")
    }
}

impl std::error::Error for ZeroDenominator {}

/// Greatest common divisor of the absolute values of `a` and `b`.
///
/// Uses the iterative Euclidean algorithm. `gcd(x, 0) == |x|` and
/// `gcd(0, 0) == 0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// An exact rational number in lowest terms with a positive denominator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// Builds the reduced fraction `numer / denom`.
    ///
    /// A negative denominator moves its sign onto the numerator.
    ///
    /// # Errors
    /// Returns [`ZeroDenominator`] if `denom` is zero.
    pub fn new(
        numer: impl Into<BigInt>,
        denom: impl Into<BigInt>,
    ) -> Result<Self, ZeroDenominator> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(ZeroDenominator);
        }
        Ok(Self::reduced(numer.into(), denom))
    }

    /// The fraction `n / 1`.
    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Fraction {
            numer: n.into(),
            denom: BigInt::one(),
        }
    }

    /// The fraction `0 / 1`.
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// The fraction `1 / 1`.
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    /// Returns the numerator. Carries the sign of the fraction.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Returns the denominator. Always strictly positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Returns true if the fraction is a whole number.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns the whole number this fraction equals, if any.
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.denom.is_one() {
            return Some(self.numer.clone());
        }
        if (&self.numer % &self.denom).is_zero() {
            return Some(&self.numer / &self.denom);
        }
        None
    }

    /// Lossy floating point approximation, for diagnostics only.
    pub fn to_f64(&self) -> Option<f64> {
        Some(self.numer.to_f64()? / self.denom.to_f64()?)
    }

    // `denom` must be non-zero.
    fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let common_factor = gcd(&numer, &denom);
        if !common_factor.is_one() {
            numer = &numer / &common_factor;
            denom = &denom / &common_factor;
        }
        Fraction { numer, denom }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        // Scale to lcm(a.den, b.den) instead of a.den * b.den
        let g = gcd(&self.denom, &rhs.denom);
        let lhs_scale = &rhs.denom / &g;
        let rhs_scale = &self.denom / &g;
        let common = &rhs_scale * &rhs.denom;
        let numer = &self.numer * &lhs_scale + &rhs.numer * &rhs_scale;
        Fraction::reduced(numer, common)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::reduced(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, f| &acc + &f)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, f| &acc + f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    fn assert_canonical(f: &Fraction) {
        assert!(f.denom().is_positive(), "non-positive denominator in {f}");
        assert!(
            gcd(f.numer(), f.denom()).is_one(),
            "{f} is not in lowest terms"
        );
    }

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(&BigInt::from(12), &BigInt::from(18)), BigInt::from(6));
        assert_eq!(gcd(&BigInt::from(-12), &BigInt::from(18)), BigInt::from(6));
        assert_eq!(gcd(&BigInt::from(12), &BigInt::from(-18)), BigInt::from(6));
        assert_eq!(gcd(&BigInt::from(17), &BigInt::from(5)), BigInt::from(1));
        assert_eq!(gcd(&BigInt::from(-7), &BigInt::from(0)), BigInt::from(7));
        assert_eq!(gcd(&BigInt::from(0), &BigInt::from(9)), BigInt::from(9));
        assert_eq!(gcd(&BigInt::from(0), &BigInt::from(0)), BigInt::from(0));
    }

    #[test]
    fn test_new_reduces_and_normalizes_sign() {
        let f = frac(6, -8);
        assert_eq!(f.numer(), &BigInt::from(-3));
        assert_eq!(f.denom(), &BigInt::from(4));

        let f = frac(-6, -8);
        assert_eq!(f.numer(), &BigInt::from(3));
        assert_eq!(f.denom(), &BigInt::from(4));

        let f = frac(0, -5);
        assert_eq!(f.numer(), &BigInt::from(0));
        assert_eq!(f.denom(), &BigInt::from(1));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Fraction::new(1, 0), Err(ZeroDenominator));
        assert_eq!(Fraction::new(0, 0), Err(ZeroDenominator));
        assert_eq!(Fraction::new(-5, 0), Err(ZeroDenominator));
        assert_eq!(ZeroDenominator.to_string(), "denominator cannot be zero");
    }

    #[test]
    fn test_add_and_mul() {
        assert_eq!(&frac(1, 2) + &frac(1, 3), frac(5, 6));
        assert_eq!(&frac(1, 6) + &frac(1, 10), frac(4, 15));
        assert_eq!(&frac(1, 2) + &frac(-1, 2), Fraction::zero());
        assert_eq!(&frac(2, 3) * &frac(9, 4), frac(3, 2));
        assert_eq!(&frac(-2, 3) * &frac(3, -2), Fraction::one());
        assert_eq!(frac(1, 4) + frac(3, 4), Fraction::one());
        assert_eq!(frac(5, 7) * Fraction::zero(), Fraction::zero());
        assert_eq!(-frac(5, 7), frac(-5, 7));
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(frac(12, 4).to_integer(), Some(BigInt::from(3)));
        assert!(frac(12, 4).is_integer());
        assert_eq!(frac(18, 5).to_integer(), None);
        assert!(!frac(18, 5).is_integer());
        assert_eq!(Fraction::from(-9).to_integer(), Some(BigInt::from(-9)));
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(3, 1).to_string(), "3");
        assert_eq!(frac(-18, 5).to_string(), "-18/5");
        assert_eq!(Fraction::default().to_string(), "0");
    }

    #[test]
    fn test_sum() {
        let parts = vec![frac(1, 2), frac(1, 4), frac(1, 8), frac(1, 8)];
        let total: Fraction = parts.iter().sum();
        assert_eq!(total, Fraction::one());
        let total: Fraction = parts.into_iter().sum();
        assert_eq!(total, Fraction::one());
    }

    #[test]
    fn test_large_values_stay_exact() {
        let big = BigInt::parse_bytes(b"123456789012345678901234567890123456789", 10).unwrap();
        let a = Fraction::new(big.clone(), 3).unwrap();
        let b = Fraction::new(big.clone(), 6).unwrap();
        assert_eq!(&a + &b, Fraction::new(big.clone(), 2).unwrap());
        let product = &a * &Fraction::from_integer(3);
        assert_eq!(product.to_integer(), Some(big));
    }

    #[test]
    fn test_random_fractions_are_canonical() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let n: i64 = rng.random_range(-10_000..=10_000);
            let mut d: i64 = rng.random_range(-10_000..=10_000);
            if d == 0 {
                d = 1;
            }
            assert_canonical(&frac(n, d));
        }
    }

    #[test]
    fn test_random_arithmetic_matches_float() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let (an, bn): (i64, i64) = (
                rng.random_range(-1_000..=1_000),
                rng.random_range(-1_000..=1_000),
            );
            let (ad, bd): (i64, i64) = (
                rng.random_range(1..=1_000),
                rng.random_range(-1_000..=-1),
            );
            let (a, b) = (frac(an, ad), frac(bn, bd));

            let sum = &a + &b;
            let product = &a * &b;
            assert_canonical(&sum);
            assert_canonical(&product);

            let expected_sum = an as f64 / ad as f64 + bn as f64 / bd as f64;
            let expected_product = (an as f64 / ad as f64) * (bn as f64 / bd as f64);
            assert!((sum.to_f64().unwrap() - expected_sum).abs() < 1e-9);
            assert!((product.to_f64().unwrap() - expected_product).abs() < 1e-9);
        }
    }
}
