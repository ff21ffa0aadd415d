//! Hex triplet parsing and formatting.
//!
//! Input is `rrggbb` with an optional leading `#`, case-insensitive. Output is
//! always `#rrggbb` in lowercase.

use core::fmt::Write;

use crate::types::{Channel, ColorError, Rgb};

/// A formatted `#rrggbb` string. Fixed capacity, no allocation.
pub type HexString = heapless::String<7>;

/// Number of hex digits in a color, excluding the `#`.
const DIGITS: usize = 6;

/// Parses a hex color into its 8-bit channels.
///
/// # Errors
/// * `InvalidLength` - Not exactly six digits after the optional `#`
/// * `InvalidDigit` - A character outside `[0-9a-fA-F]`
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    if digits.len() != DIGITS {
        return Err(ColorError::InvalidLength {
            found: digits.len(),
        });
    }

    let byte_at = |index: usize| -> Result<u8, ColorError> {
        let hi = nibble(digits[index]).ok_or(ColorError::InvalidDigit { index })?;
        let lo = nibble(digits[index + 1])
            .ok_or(ColorError::InvalidDigit { index: index + 1 })?;
        Ok(hi << 4 | lo)
    };

    Ok(Rgb::new(byte_at(0)?, byte_at(2)?, byte_at(4)?))
}

/// Formats integer channels as `#rrggbb`.
///
/// # Errors
/// * `ChannelOutOfRange` - Any channel outside 0-255 (first offender reported)
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> Result<HexString, ColorError> {
    let mut channels = [0u8; 3];
    for ((slot, channel), value) in channels
        .iter_mut()
        .zip(Channel::ALL)
        .zip([red, green, blue])
    {
        *slot = u8::try_from(value)
            .map_err(|_| ColorError::ChannelOutOfRange { channel, value })?;
    }

    let [r, g, b] = channels;
    Ok(format_hex(Rgb::new(r, g, b)))
}

/// Formats an 8-bit color as `#rrggbb`.
pub fn format_hex(rgb: Rgb) -> HexString {
    let mut hex = HexString::new();
    // Seven bytes always fit.
    let _ = write!(hex, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue);
    hex
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
