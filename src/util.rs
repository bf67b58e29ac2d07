//! Internal utilities.

use std::fmt::Write;

/// Encode bytes as lowercase hex without separators.
pub(crate) fn encode_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for byte in data {
        // Writing to a String cannot fail
        let _ = write!(out, "{:02x}", byte);
    }
    out
}
