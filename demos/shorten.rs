//! Minimal URL-shortener shape: sequential ids become short codes.
//!
//! The codec owns none of the storage or id allocation; it only maps the
//! counter value to its short spelling and back.

use std::collections::HashMap;

use radix62::{decode62, encode62};

fn main() {
    let urls = [
        "https://example.com/a/very/long/path",
        "https://example.com/another/long/path?q=1",
        "https://example.com/yet/another",
    ];

    let mut store: HashMap<u64, &str> = HashMap::new();

    for (id, url) in (1u64..).zip(urls) {
        let code = encode62(id);
        store.insert(id, url);
        println!("{url} -> /{code}");
    }

    // A code coming back in resolves to the stored id
    let id = decode62("3").unwrap().as_u64().unwrap();
    println!("/3 -> {}", store[&id]);
}
