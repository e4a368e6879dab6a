use heapless::Vec;

use crate::constants::{char_map, symbol_map, DOT_MASK, HEX_MAP};

/// Failure mode of [`parse_decimal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecimalError {
    /// Something other than digits remained after removing the point.
    NonNumeric,
    /// The digit string does not fit in a u64.
    Overflow,
}

/// Decomposes a plain decimal string like `"3.14"` into its point-free
/// magnitude and the count of digits right of the point: `(314, Some(2))`.
/// Strings without a point yield `None` for the position.
pub fn parse_decimal(repr: &str) -> Result<(u64, Option<u8>), DecimalError> {
    let point = repr.find('.');
    let mut magnitude: u64 = 0;
    let mut digits = 0usize;
    for c in repr.chars() {
        if c == '.' {
            continue;
        }
        let d = c.to_digit(10).ok_or(DecimalError::NonNumeric)? as u64;
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(d))
            .ok_or(DecimalError::Overflow)?;
        digits += 1;
    }
    let dp = point.map(|idx| (digits - idx) as u8);
    Ok((magnitude, dp))
}

/// Segment pattern for one character: decimal digits through `HEX_MAP`,
/// then `char_map`, then `symbol_map` by code point, then the raw code
/// point itself.
pub fn glyph(c: char) -> u8 {
    if let Some(d) = c.to_digit(10) {
        return HEX_MAP[d as usize];
    }
    char_map(c)
        .or_else(|| symbol_map(c as u32))
        .unwrap_or(c as u32 as u8)
}

/// Appends the segment encoding of `text` to `buf`. A `.` with a preceding
/// element merges into it as the decimal-point bit instead of taking a
/// digit position of its own; a leading `.` becomes a lone point on a blank
/// digit. Returns false when the buffer ran out of room; once an element
/// has been dropped, later point merges are suppressed as well since their
/// target was never stored.
pub fn encode_into<const N: usize>(text: &str, buf: &mut Vec<u8, N>) -> bool {
    let mut fit = true;
    for c in text.chars() {
        if c == '.' && !buf.is_empty() {
            if fit {
                if let Some(last) = buf.last_mut() {
                    *last |= DOT_MASK;
                }
            }
            continue;
        }
        if buf.push(glyph(c)).is_err() {
            fit = false;
        }
    }
    fit
}

/// Encodes `text` into a fresh buffer, silently truncating past capacity.
pub fn encode_text<const N: usize>(text: &str) -> Vec<u8, N> {
    let mut buf = Vec::new();
    encode_into(text, &mut buf);
    buf
}
