//! `radix62` - Positional-notation codec for bases 2 to 62
//!
//! Converts non-negative integers, including magnitudes beyond the 64-bit
//! range, to and from positional strings over a fixed 62-symbol alphabet.
//! A pure, stateless codec: no I/O, no shared mutable state, safe to call
//! from any number of threads without coordination.
//!
//! # Alphabet
//!
//! One fixed ordering serves every base; the first `base` symbols are the
//! digit set for that base:
//!
//! | Symbols | Digit values |
//! |---------|--------------|
//! | `0`-`9` | 0-9 |
//! | `a`-`z` | 10-35 |
//! | `A`-`Z` | 36-61 |
//!
//! Decoding is case-sensitive: `"a"` is 10, `"A"` is 36.
//!
//! # Example
//! ```
//! use radix62::{decode62, encode62, Magnitude};
//!
//! let code = encode62(12345u64);
//! assert_eq!(code, "3d7");
//! assert_eq!(decode62(&code).unwrap(), Magnitude::Native(12345));
//! ```
//!
//! Any base in `[2, 62]` works the same way:
//! ```
//! use radix62::{decode, encode};
//!
//! assert_eq!(encode(255u64, 16).unwrap(), "ff");
//! assert_eq!(decode("10", 36).unwrap().as_u64(), Some(36));
//! ```
//!
//! # Precision
//!
//! Magnitudes are an explicit sum over the two representations:
//! [`Magnitude::Native`] for values inside the `u64` range and
//! [`Magnitude::Big`] for anything larger. [`encode`] accepts either
//! variant (plus plain integers via `From`/`TryFrom`); [`decode`] returns
//! `Native` whenever the value fits and `Big` otherwise, so the precision
//! class is visible in the type rather than discovered by probing.
//!
//! ```
//! use num_bigint::BigUint;
//! use radix62::{decode62, encode62, Magnitude};
//!
//! let big: BigUint = "123456789012345678901234567890".parse().unwrap();
//! let code = encode62(big.clone());
//! let decoded = decode62(&code).unwrap();
//! assert!(matches!(decoded, Magnitude::Big(_)));
//! assert_eq!(decoded, Magnitude::Big(big));
//! ```
//!
//! # Conventions
//!
//! - Zero encodes as the single symbol `"0"` in every base.
//! - The empty string decodes to zero.
//! - Encoded output never carries leading zero padding; decoding accepts
//!   leading zeros and ignores them.
//! - Negative values are unrepresentable: signed integers convert into
//!   [`Magnitude`] through `TryFrom` and reject negatives.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod alphabet;
mod decoder;
mod encoder;
mod error;
mod magnitude;

#[cfg(test)]
mod tests;

// Re-export public API
pub use alphabet::{ALPHABET, MAX_BASE, MIN_BASE};
pub use decoder::{decode, decode62};
pub use encoder::{encode, encode62};
pub use error::{DecodeError, EncodeError, NegativeValueError};
pub use magnitude::Magnitude;
