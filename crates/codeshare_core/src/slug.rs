//! Snippet identifier generation.
//!
//! Ids combine a random base-36 fragment with the current Unix epoch
//! milliseconds in base 36, joined by `_`. The timestamp keeps ids roughly
//! sortable; the random fragment keeps two calls within the same millisecond
//! distinct with overwhelming probability. This is a display-friendly slug,
//! not a cryptographic identifier.

use crate::constants::SNIPPET_ID_RANDOM_LEN;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encode a value in lowercase base 36.
///
/// # Returns
/// The base-36 digits of `value`, `"0"` for zero.
pub fn encode_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Digits come from a fixed ASCII table, so this cannot fail.
    String::from_utf8(digits).unwrap_or_default()
}

fn random_fragment(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36_DIGITS[rng.gen_range(0..36)] as char)
        .collect()
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Generate a new snippet identifier.
///
/// # Returns
/// A non-empty string of the form `<random>_<timestamp>`, using only
/// `[0-9a-z_]`, safe for use as a URL path segment.
pub fn generate_snippet_id() -> String {
    format!(
        "{}_{}",
        random_fragment(SNIPPET_ID_RANDOM_LEN),
        encode_base36(epoch_millis())
    )
}

/// Check whether a caller-supplied id could have come from the generator.
///
/// The server uses this to reject path segments that would not survive a
/// round trip through a URL.
///
/// # Returns
/// `true` when `id` is non-empty and uses only `[0-9a-z_-]`.
pub fn is_valid_snippet_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}
