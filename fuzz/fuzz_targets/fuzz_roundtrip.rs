#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use radix62::{decode, encode, Magnitude};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte selects the base, the rest is a big-endian magnitude
    let base = 2 + u32::from(data[0]) % 61;
    let value = BigUint::from_bytes_be(&data[1..]);

    let encoded = encode(Magnitude::Big(value.clone()), base).unwrap();
    let decoded = decode(&encoded, base).unwrap();

    // Exact value round-trip, with the tag reflecting the native boundary
    assert_eq!(decoded.to_biguint(), value);
    assert_eq!(
        matches!(decoded, Magnitude::Big(_)),
        value > BigUint::from(u64::MAX)
    );
});
