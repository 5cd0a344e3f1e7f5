//! Constant term reduction.
use num_bigint::BigInt;
use num_traits::One;

use crate::errors::Error;

/// Returns the constant term of the monic polynomial with the given roots.
///
/// The constant term is defined as:
/// ```text
///     c = \prod_{i=0}^n (-r_i)
/// ```
/// The order of the roots does not affect the result.
pub fn reduce(roots: &[BigInt]) -> Result<BigInt, Error> {
    if roots.is_empty() {
        return Err(Error::NoRoots);
    }

    let mut constant_term = BigInt::one();
    for root in roots {
        constant_term *= -root;
    }

    Ok(constant_term)
}
