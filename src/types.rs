//! Core color types and the crate error.

use palette::Srgb;

/// An 8-bit sRGB color, each channel in 0-255.
pub type Rgb = Srgb<u8>;

/// One channel of an RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red channel.
    Red,

    /// Green channel.
    Green,

    /// Blue channel.
    Blue,
}

impl Channel {
    /// Channels in `#rrggbb` order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Channel::Red => f.write_str("red"),
            Channel::Green => f.write_str("green"),
            Channel::Blue => f.write_str("blue"),
        }
    }
}

/// Errors from parsing or formatting colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Hex color does not have exactly six digits after the optional `#`.
    InvalidLength {
        /// Number of bytes found after stripping the `#`.
        found: usize,
    },

    /// A byte that is not a hex digit.
    InvalidDigit {
        /// Byte offset into the digits (after the `#`).
        index: usize,
    },

    /// A channel value outside 0-255.
    ChannelOutOfRange {
        /// The offending channel.
        channel: Channel,
        /// The rejected value.
        value: i32,
    },

    /// A hue rotation angle that is NaN or infinite.
    NonFiniteAngle,
}

impl ColorError {
    /// Returns `true` for malformed hex input.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidLength { .. } | ColorError::InvalidDigit { .. }
        )
    }

    /// Returns `true` for out-of-range numeric input: channel values or angles.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            ColorError::ChannelOutOfRange { .. } | ColorError::NonFiniteAngle
        )
    }
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::InvalidLength { found } => {
                write!(f, "hex color must have 6 digits, found {}", found)
            }
            ColorError::InvalidDigit { index } => {
                write!(f, "invalid hex digit at position {}", index)
            }
            ColorError::ChannelOutOfRange { channel, value } => {
                write!(
                    f,
                    "{} channel out of range: {} (expected 0-255)",
                    channel, value
                )
            }
            ColorError::NonFiniteAngle => f.write_str("hue angle must be finite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}
