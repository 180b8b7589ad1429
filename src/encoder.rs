//! Encoding of magnitudes into positional-notation strings.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::alphabet::{self, SYMBOLS};
use crate::error::EncodeError;
use crate::magnitude::Magnitude;

/// Encode a magnitude as a positional string in the given base.
///
/// The output is most-significant digit first, has no leading-zero padding,
/// and draws only on the first `base` alphabet symbols. Zero encodes as the
/// single symbol `"0"` in every base.
///
/// Arithmetic stays in the representation of the input: native division for
/// [`Magnitude::Native`], arbitrary-precision division for
/// [`Magnitude::Big`]. Only each remainder, always below 62, is narrowed
/// for the symbol lookup.
///
/// # Errors
/// Returns [`EncodeError::BaseOutOfRange`] if `base` is not in `[2, 62]`.
///
/// # Example
/// ```
/// use radix62::encode;
///
/// assert_eq!(encode(255u64, 16).unwrap(), "ff");
/// assert_eq!(encode(255u64, 2).unwrap(), "11111111");
/// assert_eq!(encode(0u64, 36).unwrap(), "0");
/// ```
pub fn encode(value: impl Into<Magnitude>, base: u32) -> Result<String, EncodeError> {
    if !alphabet::base_in_range(base) {
        return Err(EncodeError::BaseOutOfRange { base });
    }
    Ok(match value.into() {
        Magnitude::Native(native) => encode_native(native, base),
        Magnitude::Big(big) => encode_big(&big, base),
    })
}

/// Encode a magnitude in base 62.
///
/// Infallible: the base is fixed and magnitudes are non-negative by
/// construction.
///
/// # Example
/// ```
/// use radix62::encode62;
///
/// assert_eq!(encode62(12345u64), "3d7");
/// assert_eq!(encode62(62u64), "10");
/// ```
#[must_use]
pub fn encode62(value: impl Into<Magnitude>) -> String {
    match value.into() {
        Magnitude::Native(native) => encode_native(native, alphabet::MAX_BASE),
        Magnitude::Big(big) => encode_big(&big, alphabet::MAX_BASE),
    }
}

/// Digit loop over native arithmetic. `base` is already validated.
fn encode_native(mut value: u64, base: u32) -> String {
    if value == 0 {
        return char::from(SYMBOLS[0]).to_string();
    }
    let base = u64::from(base);
    // 64 digits covers the base 2 worst case for u64
    let mut digits = Vec::with_capacity(64);
    while value > 0 {
        digits.push(SYMBOLS[(value % base) as usize]);
        value /= base;
    }
    digits.iter().rev().map(|&symbol| char::from(symbol)).collect()
}

/// Digit loop over arbitrary-precision arithmetic. `base` is already
/// validated.
fn encode_big(value: &BigUint, base: u32) -> String {
    if value.is_zero() {
        return char::from(SYMBOLS[0]).to_string();
    }
    let big_base = BigUint::from(base);
    let mut value = value.clone();
    // bit count covers the base 2 worst case
    let mut digits = Vec::with_capacity(value.bits() as usize);
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&big_base);
        // remainder < base <= 62, the narrowing cannot fail
        digits.push(SYMBOLS[remainder.to_usize().unwrap_or(0)]);
        value = quotient;
    }
    digits.iter().rev().map(|&symbol| char::from(symbol)).collect()
}
