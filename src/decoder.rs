//! Decoding of positional-notation strings back into magnitudes.

use num_bigint::BigUint;

use crate::alphabet;
use crate::error::DecodeError;
use crate::magnitude::Magnitude;

/// Decode a positional string in the given base.
///
/// The input is scanned left to right, most-significant digit first. The
/// accumulator runs on checked native arithmetic while the value fits
/// `u64` and is promoted losslessly to arbitrary precision on the first
/// overflow, so the returned tag always reflects the actual magnitude:
/// [`Magnitude::Native`] whenever the value fits, [`Magnitude::Big`]
/// otherwise.
///
/// The empty string decodes to zero. Leading zero symbols are accepted and
/// contribute nothing.
///
/// # Errors
/// Returns [`DecodeError::BaseOutOfRange`] if `base` is not in `[2, 62]`,
/// and [`DecodeError::InvalidSymbol`] on the first character that is not a
/// digit of `base` (outside the alphabet, or a digit value at or above the
/// base).
///
/// # Example
/// ```
/// use radix62::{decode, Magnitude};
///
/// assert_eq!(decode("ff", 16).unwrap(), Magnitude::Native(255));
/// assert_eq!(decode("10", 36).unwrap(), Magnitude::Native(36));
/// assert_eq!(decode("", 8).unwrap(), Magnitude::Native(0));
/// assert!(decode("f", 15).is_err());
/// ```
pub fn decode(input: &str, base: u32) -> Result<Magnitude, DecodeError> {
    if !alphabet::base_in_range(base) {
        return Err(DecodeError::BaseOutOfRange { base });
    }

    let mut native: u64 = 0;
    let mut promoted: Option<BigUint> = None;

    for symbol in input.chars() {
        let digit = match alphabet::digit_value(symbol) {
            Some(digit) if u32::from(digit) < base => digit,
            _ => return Err(DecodeError::InvalidSymbol { symbol, base }),
        };

        match promoted {
            None => {
                match native
                    .checked_mul(u64::from(base))
                    .and_then(|shifted| shifted.checked_add(u64::from(digit)))
                {
                    Some(next) => native = next,
                    // Once the accumulator leaves the native range it never
                    // shrinks back: every further digit multiplies by
                    // base >= 2 first.
                    None => promoted = Some(BigUint::from(native) * base + u32::from(digit)),
                }
            }
            Some(ref mut big) => {
                *big *= base;
                *big += u32::from(digit);
            }
        }
    }

    Ok(match promoted {
        Some(big) => Magnitude::Big(big),
        None => Magnitude::Native(native),
    })
}

/// Decode a base 62 string.
///
/// # Errors
/// Returns [`DecodeError::InvalidSymbol`] on the first character outside
/// the 62-symbol alphabet.
///
/// # Example
/// ```
/// use radix62::{decode62, Magnitude};
///
/// assert_eq!(decode62("3d7").unwrap(), Magnitude::Native(12345));
/// assert_eq!(decode62("A").unwrap(), Magnitude::Native(36));
/// ```
pub fn decode62(input: &str) -> Result<Magnitude, DecodeError> {
    decode(input, alphabet::MAX_BASE)
}
