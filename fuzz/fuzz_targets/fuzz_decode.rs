#![no_main]

use libfuzzer_sys::fuzz_target;
use radix62::{decode, encode};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte selects the base, including out-of-range values
    let base = u32::from(data[0]);
    let Ok(input) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    // Decoding arbitrary input must never panic
    let Ok(magnitude) = decode(input, base) else {
        return;
    };

    // Anything that decoded re-encodes to the canonical spelling of the
    // same value: the input with leading zeros stripped
    let encoded = encode(magnitude, base).unwrap();
    let mut canonical = input.trim_start_matches('0');
    if canonical.is_empty() {
        canonical = "0";
    }
    assert_eq!(encoded, canonical, "re-encode mismatch for {input:?} in base {base}");
});
