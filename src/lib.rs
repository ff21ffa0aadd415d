#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb`**: An 8-bit sRGB color (`palette::Srgb<u8>`), the currency of every public operation
//! - **`Hls`**: Hue/lightness/saturation form, with hue measured in turns (`0.0..1.0`)
//! - **`Harmony`**: A scheme described by hue offsets (`Complementary`, `Triadic`, ...)
//! - **`NamedColor`**: One entry of the static reference name table
//! - **`ColorError`**: Malformed hex input or out-of-range channel values
//!
//! Hex strings are accepted as `rrggbb` or `#rrggbb` in any case and always
//! formatted as lowercase `#rrggbb`. Nothing in the crate allocates.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod types;
pub mod hex;
pub mod colors;
pub mod harmony;
pub mod similarity;
pub mod names;

pub use types::{Channel, ColorError, Rgb};
pub use hex::{HexString, format_hex, hex_to_rgb, rgb_to_hex};
pub use colors::{Hls, hls_to_rgb, normalize, quantize, rgb_to_hls, rotate_hue};
pub use harmony::{
    Harmony, Scheme, analogous, complementary, split_complementary, tetradic, triadic,
};
pub use similarity::{correlation, similarity};
pub use names::{Match, NamedColor, color_name, lookup, named_colors, nearest};

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_round_trip_through_hex() {
        assert_eq!(hex_to_rgb(&format_hex(RED)), Ok(RED));
        assert_eq!(hex_to_rgb(&format_hex(GREEN)), Ok(GREEN));
        assert_eq!(hex_to_rgb(&format_hex(BLUE)), Ok(BLUE));
    }
}
