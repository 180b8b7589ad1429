use num_bigint::BigUint;
use proptest::prelude::*;

use crate::{decode, encode, encode62, DecodeError, Magnitude, ALPHABET};

proptest! {
    /// Property: decode(encode(v, b), b) == v for every native magnitude,
    /// and the result stays tagged native
    #[test]
    fn prop_roundtrip_native(value in any::<u64>(), base in 2u32..=62) {
        let encoded = encode(value, base).unwrap();
        let decoded = decode(&encoded, base).unwrap();
        prop_assert_eq!(&decoded, &Magnitude::Native(value));
        prop_assert!(matches!(decoded, Magnitude::Native(_)));
    }

    /// Property: round-tripping preserves arbitrary-precision values
    /// exactly, and the tag reflects the native boundary
    #[test]
    fn prop_roundtrip_big(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        base in 2u32..=62,
    ) {
        let value = BigUint::from_bytes_be(&bytes);
        let encoded = encode(Magnitude::Big(value.clone()), base).unwrap();
        let decoded = decode(&encoded, base).unwrap();
        prop_assert_eq!(decoded.to_biguint(), value.clone());
        prop_assert_eq!(
            matches!(decoded, Magnitude::Big(_)),
            value > BigUint::from(u64::MAX)
        );
    }

    /// Property: output draws only on the first `base` alphabet symbols
    #[test]
    fn prop_output_symbols_stay_within_base(value in any::<u64>(), base in 2u32..=62) {
        let encoded = encode(value, base).unwrap();
        let valid = &ALPHABET[..base as usize];
        for symbol in encoded.chars() {
            prop_assert!(
                valid.contains(symbol),
                "symbol {:?} is outside base {}", symbol, base
            );
        }
    }

    /// Property: positive values never encode with a leading zero
    #[test]
    fn prop_no_leading_zero_padding(value in 1u64.., base in 2u32..=62) {
        let encoded = encode(value, base).unwrap();
        prop_assert!(!encoded.starts_with('0'));
        prop_assert!(!encoded.is_empty());
    }

    /// Property: output length is exactly ceil(log_base(value + 1)),
    /// checked by bracketing between adjacent powers of the base
    #[test]
    fn prop_output_length_matches_log(value in 1u64.., base in 2u32..=62) {
        let encoded = encode(value, base).unwrap();
        let len = encoded.len() as u32;
        let big_base = BigUint::from(base);
        let value = BigUint::from(value);
        prop_assert!(big_base.pow(len - 1) <= value);
        prop_assert!(value < big_base.pow(len));
    }

    /// Property: any symbol whose digit value is at or above the base is
    /// rejected and named in the error
    #[test]
    fn prop_digit_at_or_above_base_rejected(
        (base, index) in (2u32..62).prop_flat_map(|base| (Just(base), base..62)),
    ) {
        let symbol = ALPHABET.as_bytes()[index as usize] as char;
        prop_assert_eq!(
            decode(&symbol.to_string(), base),
            Err(DecodeError::InvalidSymbol { symbol, base })
        );
    }

    /// Property: the fixed base 62 helper agrees with the general form
    #[test]
    fn prop_encode62_matches_general_encode(value in any::<u64>()) {
        prop_assert_eq!(encode62(value), encode(value, 62).unwrap());
    }
}
