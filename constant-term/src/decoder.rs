//! Base-N numeral decoding.
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::errors::DecodeError;

/// The smallest supported base.
pub const MIN_BASE: u32 = 2;
/// The largest supported base, digits `0-9` followed by `A-Z`.
pub const MAX_BASE: u32 = 36;

/// Decodes a numeral string given in the given base into an integer.
///
/// Letters are case-insensitive, i.e. `a` and `A` both have the value 10.
/// A single leading `+` or `-` sign is accepted. The result is computed with
/// unbounded precision, so the length of the numeral is not limited.
pub fn decode(base: i64, digits: &str) -> Result<BigInt, DecodeError> {
    let base = u32::try_from(base)
        .ok()
        .filter(|base| (MIN_BASE..=MAX_BASE).contains(base))
        .ok_or(DecodeError::InvalidBase { base })?;

    let (sign, offset) = match digits.chars().next() {
        Some('-') => (Sign::Minus, 1),
        Some('+') => (Sign::Plus, 1),
        _ => (Sign::Plus, 0),
    };
    let magnitude = &digits[offset..];
    if magnitude.is_empty() {
        return Err(DecodeError::EmptyValue);
    }

    let mut acc = BigUint::zero();
    for (position, digit) in magnitude.chars().enumerate() {
        let value = digit_value(digit, base).ok_or(DecodeError::InvalidDigit {
            digit,
            position: position + offset,
            base,
        })?;
        acc *= base;
        acc += value;
    }

    Ok(BigInt::from_biguint(sign, acc))
}

/// Returns the value of the given digit if it is valid in the given base.
fn digit_value(digit: char, base: u32) -> Option<u32> {
    // Only ASCII digits and letters are accepted, `to_digit` already
    // restricts itself to those.
    digit.to_digit(base)
}
