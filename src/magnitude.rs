//! Tagged magnitude representation: native `u64` or arbitrary precision.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::NegativeValueError;

/// A non-negative integer magnitude.
///
/// Values inside the native 64-bit range use `Native`; anything larger is
/// carried as an arbitrary-precision `Big`. The tag is part of the decode
/// contract: [`decode`](crate::decode) returns `Native` whenever the value
/// fits and `Big` otherwise, so callers read the precision class off the
/// type instead of probing the value.
///
/// Equality compares mathematical value, so `Native(5)` equals a `Big`
/// holding 5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Magnitude {
    /// Fits the native 64-bit range
    Native(u64),
    /// Exceeds the native 64-bit range
    Big(BigUint),
}

impl Magnitude {
    /// Whether the value is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Native(value) => *value == 0,
            Self::Big(value) => value.is_zero(),
        }
    }

    /// The value as `u64`, if it fits the native range.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Native(value) => Some(*value),
            Self::Big(value) => value.to_u64(),
        }
    }

    /// The value as an owned `BigUint`, regardless of tag.
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        match self {
            Self::Native(value) => BigUint::from(*value),
            Self::Big(value) => value.clone(),
        }
    }

    /// Canonicalize the tag: a `Big` that fits `u64` becomes `Native`.
    ///
    /// Decode output is already canonical; this is for magnitudes callers
    /// built from a [`BigUint`] themselves.
    #[must_use]
    pub fn narrowed(self) -> Self {
        match self {
            Self::Big(value) => match value.to_u64() {
                Some(native) => Self::Native(native),
                None => Self::Big(value),
            },
            native => native,
        }
    }
}

impl Default for Magnitude {
    #[inline]
    fn default() -> Self {
        Self::Native(0)
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => a == b,
            (Self::Big(a), Self::Big(b)) => a == b,
            (Self::Native(native), Self::Big(big)) | (Self::Big(big), Self::Native(native)) => {
                big.to_u64() == Some(*native)
            }
        }
    }
}

impl Eq for Magnitude {}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(value) => fmt::Display::fmt(value, f),
            Self::Big(value) => fmt::Display::fmt(value, f),
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($int:ty),*) => {$(
        impl From<$int> for Magnitude {
            #[inline]
            fn from(value: $int) -> Self {
                Self::Native(u64::from(value))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Magnitude {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Native(value as u64)
    }
}

impl From<u128> for Magnitude {
    fn from(value: u128) -> Self {
        match u64::try_from(value) {
            Ok(native) => Self::Native(native),
            Err(_) => Self::Big(BigUint::from(value)),
        }
    }
}

impl From<BigUint> for Magnitude {
    #[inline]
    fn from(value: BigUint) -> Self {
        Self::Big(value)
    }
}

macro_rules! impl_try_from_signed {
    ($($int:ty),*) => {$(
        impl TryFrom<$int> for Magnitude {
            type Error = NegativeValueError;

            fn try_from(value: $int) -> Result<Self, Self::Error> {
                if value < 0 {
                    return Err(NegativeValueError { value: value as i128 });
                }
                Ok(Self::Native(value as u64))
            }
        }
    )*};
}

impl_try_from_signed!(i8, i16, i32, i64, isize);

impl TryFrom<i128> for Magnitude {
    type Error = NegativeValueError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        match u128::try_from(value) {
            Ok(unsigned) => Ok(Self::from(unsigned)),
            Err(_) => Err(NegativeValueError { value }),
        }
    }
}
