// SPDX-License-Identifier: CC0-1.0

use exact_fraction::Fraction;
use itertools::Itertools;
use log::{debug, info};
use num_bigint::BigInt;
use num_traits::One;

use crate::Error;
use crate::share::Point;

/// Selects the points used for reconstruction.
///
/// Points are sorted by ascending x-coordinate and only the first `k` are
/// kept. Any points beyond the threshold are discarded without being checked
/// against the others.
///
/// # Errors
/// - `InvalidThreshold` if `k` is zero
/// - `InsufficientShares` if fewer than `k` points are given
/// - `DuplicateCoordinate` if two selected points share an x-coordinate
pub fn select_points(mut points: Vec<Point>, k: usize) -> Result<Vec<Point>, Error> {
    if k == 0 {
        return Err(Error::InvalidThreshold);
    }
    if points.len() < k {
        return Err(Error::InsufficientShares {
            required: k,
            available: points.len(),
        });
    }

    points.sort_by(|a, b| a.x.cmp(&b.x));
    if points.len() > k {
        info!(
            "Using {k} of {} shares, the rest are not verified",
            points.len()
        );
    }
    points.truncate(k);

    if let Some((a, _)) = points.iter().tuple_windows().find(|(a, b)| a.x == b.x) {
        return Err(Error::DuplicateCoordinate(a.x.clone()));
    }

    debug!(
        "Selected shares at x = [{}]",
        points.iter().map(|p| &p.x).join(", ")
    );
    Ok(points)
}

/// Evaluates the Lagrange interpolating polynomial through `points` at zero.
///
/// The value is computed exactly as `sum(y_i * l_i(0))` where
/// `l_i(0) = prod_{j != i} (0 - x_j) / (x_i - x_j)`, accumulated in the
/// order the points are given.
pub fn interpolate_at_zero(points: &[Point]) -> Result<Fraction, Error> {
    let mut sum = Fraction::zero();

    for (i, point) in points.iter().enumerate() {
        let mut numer = BigInt::one();
        let mut denom = BigInt::one();
        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numer *= -&other.x;
            denom *= &point.x - &other.x;
        }

        let basis = Fraction::new(numer, denom)?;
        let term = &Fraction::from_integer(point.y.clone()) * &basis;
        debug!("Term for x = {}: {term}", point.x);
        sum = &sum + &term;
    }

    Ok(sum)
}

/// Converts the interpolated value into the secret.
///
/// Fails with `NonIntegerResult` unless the value is a whole number.
pub fn finalize(value: Fraction) -> Result<BigInt, Error> {
    match value.to_integer() {
        Some(secret) => Ok(secret),
        None => Err(Error::NonIntegerResult(value)),
    }
}
