/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! FIX-style checksum calculation.
//!
//! The checksum is the sum of the unsigned byte values of every character
//! from the start of the message up to, but not including, the checksum tag,
//! modulo 256, rendered on the wire as a 3-digit zero-padded decimal string.

use arrayvec::ArrayString;
use std::fmt::Write;

/// Sums every byte of `data` modulo 256.
///
/// # Arguments
/// * `data` - The message bytes to checksum (everything before `10=`)
#[inline]
#[must_use]
pub fn checksum_of(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Renders a checksum value in its wire form.
///
/// # Arguments
/// * `value` - The checksum value (0-255)
///
/// # Returns
/// The 3-character zero-padded decimal representation (e.g. "057").
#[must_use]
pub fn format_checksum(value: u8) -> ArrayString<3> {
    let mut text = ArrayString::new();
    // Writing at most three digits into a three-byte buffer cannot fail.
    let _ = write!(text, "{value:03}");
    text
}

/// Parses a wire-form checksum back to its value.
///
/// # Arguments
/// * `text` - The declared checksum string
///
/// # Returns
/// `Some(value)` if `text` is exactly three ASCII digits encoding a value
/// in 0-255, `None` otherwise. Unpadded forms such as "57" are rejected.
#[must_use]
pub fn parse_checksum(text: &str) -> Option<u8> {
    let digits = text.as_bytes();
    if digits.len() != 3 || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let value = u16::from(digits[0] - b'0') * 100
        + u16::from(digits[1] - b'0') * 10
        + u16::from(digits[2] - b'0');
    u8::try_from(value).ok()
}
