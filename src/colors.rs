//! Color space conversion helpers.
//!
//! Provides the RGB ↔ HLS (Hue, Lightness, Saturation) transform that every
//! harmony scheme is built on. Conversions go through `palette::Hsl`; this
//! module rescales the hue from degrees to turns so that the whole color wheel
//! is `[0.0, 1.0)` and a full rotation is `1.0`.
//!
//! Quantizing back to 8-bit channels rounds half to even.

use palette::{FromColor, Hsl, Srgb, encoding};

use crate::types::Rgb;

type HslF64 = Hsl<encoding::Srgb, f64>;

/// A color in cylindrical hue/lightness/saturation form.
///
/// All components are in `[0.0, 1.0]`. Hue is cyclical: `0.0` and `1.0` are
/// the same point on the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hls {
    /// Position on the color wheel, in turns.
    pub hue: f64,

    /// 0.0 is black, 1.0 is white.
    pub lightness: f64,

    /// 0.0 is gray.
    pub saturation: f64,
}

impl Hls {
    /// Creates an HLS color. The hue is wrapped into `[0.0, 1.0)`.
    #[inline]
    pub fn new(hue: f64, lightness: f64, saturation: f64) -> Self {
        Self {
            hue: wrap_turns(hue),
            lightness,
            saturation,
        }
    }

    /// Rotates the hue by `degrees`, keeping lightness and saturation.
    ///
    /// Negative angles rotate backwards; any multiple of 360 is a no-op.
    #[inline]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.hue + degrees / 360.0, self.lightness, self.saturation)
    }
}

/// Converts normalized RGB to HLS.
pub fn rgb_to_hls(rgb: Srgb<f64>) -> Hls {
    let hsl = HslF64::from_color(rgb);
    Hls::new(
        hsl.hue.into_positive_degrees() / 360.0,
        hsl.lightness,
        hsl.saturation,
    )
}

/// Converts HLS back to normalized RGB.
pub fn hls_to_rgb(hls: Hls) -> Srgb<f64> {
    let hsl = HslF64::new(hls.hue * 360.0, hls.saturation, hls.lightness);
    Srgb::from_color(hsl)
}

/// Scales 8-bit channels into `[0.0, 1.0]`.
#[inline]
pub fn normalize(rgb: Rgb) -> Srgb<f64> {
    Srgb::new(
        f64::from(rgb.red) / 255.0,
        f64::from(rgb.green) / 255.0,
        f64::from(rgb.blue) / 255.0,
    )
}

/// Scales normalized channels back to 8 bits, rounding half to even.
///
/// Only exact halves round to even. A channel that comes out of the HLS round
/// trip a hair above or below `n + 0.5` rounds by that noise instead, so such
/// channels can differ by one from another implementation of the same math.
#[inline]
pub fn quantize(rgb: Srgb<f64>) -> Rgb {
    Rgb::new(
        to_channel(rgb.red),
        to_channel(rgb.green),
        to_channel(rgb.blue),
    )
}

/// Rotates an 8-bit color around the hue wheel by `degrees`.
///
/// `degrees` must be finite.
pub fn rotate_hue(rgb: Rgb, degrees: f64) -> Rgb {
    let hls = rgb_to_hls(normalize(rgb));
    quantize(hls_to_rgb(hls.rotate(degrees)))
}

#[inline]
fn to_channel(value: f64) -> u8 {
    // Float-to-int casts saturate, so drift past 0.0/1.0 cannot wrap.
    libm::rint(value * 255.0) as u8
}

/// Floored modulo 1.0.
fn wrap_turns(turns: f64) -> f64 {
    let wrapped = turns % 1.0;
    let wrapped = if wrapped < 0.0 { wrapped + 1.0 } else { wrapped };
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_turns_is_floored() {
        assert_eq!(wrap_turns(0.25), 0.25);
        assert_eq!(wrap_turns(1.25), 0.25);
        assert_eq!(wrap_turns(-0.25), 0.75);
        assert_eq!(wrap_turns(1.0), 0.0);
        assert_eq!(wrap_turns(-1.0), 0.0);
    }

    #[test]
    fn wrap_turns_never_returns_one() {
        assert!(wrap_turns(-1e-20) < 1.0);
    }

    #[test]
    fn to_channel_rounds_to_nearest() {
        assert_eq!(to_channel(0.5), 128);
        assert_eq!(to_channel(0.2), 51);
        assert_eq!(to_channel(0.0), 0);
        assert_eq!(to_channel(1.0), 255);
    }

    #[test]
    fn to_channel_saturates() {
        assert_eq!(to_channel(-0.1), 0);
        assert_eq!(to_channel(1.1), 255);
    }
}
