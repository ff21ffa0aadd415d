//! Color harmony schemes.
//!
//! Every scheme is a set of fixed hue rotations applied to a base color.
//! Lightness and saturation are never touched, so all colors in a scheme share
//! the base color's tone.

use heapless::Vec;

use crate::colors::{Hls, hls_to_rgb, normalize, quantize, rgb_to_hls};
use crate::hex::hex_to_rgb;
use crate::types::{ColorError, Rgb};

/// Largest number of colors any scheme produces.
pub const MAX_SCHEME_COLORS: usize = 3;

/// Colors produced by [`Harmony::apply`], in offset order.
pub type Scheme = Vec<Rgb, MAX_SCHEME_COLORS>;

/// A harmony scheme, described by its hue offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Harmony {
    /// Opposite side of the wheel: +180°.
    Complementary,

    /// The two neighbours of the complement: +150°, +210°.
    SplitComplementary,

    /// Either side of the base by the given angle in degrees: −d, +d.
    Analogous(f64),

    /// Three evenly spaced colors: +120°, +240°.
    Triadic,

    /// Four-color rectangle: +60°, +180°, +240°.
    Tetradic,
}

impl Harmony {
    /// Hue offsets in degrees, in output order.
    pub fn offsets(&self) -> Vec<f64, MAX_SCHEME_COLORS> {
        match *self {
            Harmony::Complementary => [180.0].into_iter().collect(),
            Harmony::SplitComplementary => [150.0, 210.0].into_iter().collect(),
            Harmony::Analogous(angle) => [-angle, angle].into_iter().collect(),
            Harmony::Triadic => [120.0, 240.0].into_iter().collect(),
            Harmony::Tetradic => [60.0, 180.0, 240.0].into_iter().collect(),
        }
    }

    /// Number of colors this scheme produces (the base color is not included).
    pub fn color_count(&self) -> usize {
        match self {
            Harmony::Complementary => 1,
            Harmony::SplitComplementary | Harmony::Analogous(_) | Harmony::Triadic => 2,
            Harmony::Tetradic => 3,
        }
    }

    /// Applies the scheme to an 8-bit base color.
    ///
    /// An `Analogous` angle must be finite; [`Harmony::generate`] checks this,
    /// `apply` does not.
    pub fn apply(&self, base: Rgb) -> Scheme {
        let hls = rgb_to_hls(normalize(base));
        self.offsets()
            .iter()
            .map(|&degrees| rotated(hls, degrees))
            .collect()
    }

    /// Parses `hex` and applies the scheme to it.
    ///
    /// # Errors
    /// Returns the parse error if `hex` is not a valid color, or
    /// [`ColorError::NonFiniteAngle`] for an `Analogous` angle that is NaN or
    /// infinite.
    pub fn generate(&self, hex: &str) -> Result<Scheme, ColorError> {
        let base = hex_to_rgb(hex)?;
        if let Harmony::Analogous(angle) = *self {
            check_angle(angle)?;
        }
        Ok(self.apply(base))
    }
}

/// Returns the complementary color (+180°).
///
/// # Errors
/// Returns the parse error if `hex` is not a valid color.
pub fn complementary(hex: &str) -> Result<Rgb, ColorError> {
    let [color] = rotations(hex_to_rgb(hex)?, [180.0]);
    Ok(color)
}

/// Returns the split-complementary pair, ordered [+150°, +210°].
///
/// # Errors
/// Returns the parse error if `hex` is not a valid color.
pub fn split_complementary(hex: &str) -> Result<[Rgb; 2], ColorError> {
    Ok(rotations(hex_to_rgb(hex)?, [150.0, 210.0]))
}

/// Returns the analogous pair at `angle` degrees either side, ordered [−angle, +angle].
///
/// # Errors
/// Returns the parse error if `hex` is not a valid color, or
/// [`ColorError::NonFiniteAngle`] if `angle` is NaN or infinite.
pub fn analogous(hex: &str, angle: f64) -> Result<[Rgb; 2], ColorError> {
    let base = hex_to_rgb(hex)?;
    check_angle(angle)?;
    Ok(rotations(base, [-angle, angle]))
}

/// Returns the triadic pair, ordered [+120°, +240°].
///
/// # Errors
/// Returns the parse error if `hex` is not a valid color.
pub fn triadic(hex: &str) -> Result<[Rgb; 2], ColorError> {
    Ok(rotations(hex_to_rgb(hex)?, [120.0, 240.0]))
}

/// Returns the tetradic triple, ordered [+60°, +180°, +240°].
///
/// # Errors
/// Returns the parse error if `hex` is not a valid color.
pub fn tetradic(hex: &str) -> Result<[Rgb; 3], ColorError> {
    Ok(rotations(hex_to_rgb(hex)?, [60.0, 180.0, 240.0]))
}

fn rotations<const N: usize>(base: Rgb, offsets: [f64; N]) -> [Rgb; N] {
    let hls = rgb_to_hls(normalize(base));
    offsets.map(|degrees| rotated(hls, degrees))
}

fn check_angle(angle: f64) -> Result<(), ColorError> {
    if angle.is_finite() {
        Ok(())
    } else {
        Err(ColorError::NonFiniteAngle)
    }
}

#[inline]
fn rotated(hls: Hls, degrees: f64) -> Rgb {
    quantize(hls_to_rgb(hls.rotate(degrees)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_count_matches_offsets() {
        for harmony in [
            Harmony::Complementary,
            Harmony::SplitComplementary,
            Harmony::Analogous(30.0),
            Harmony::Triadic,
            Harmony::Tetradic,
        ] {
            assert_eq!(harmony.color_count(), harmony.offsets().len());
        }
    }

    #[test]
    fn analogous_offsets_are_symmetric() {
        assert_eq!(Harmony::Analogous(25.0).offsets().as_slice(), &[-25.0, 25.0]);
    }

    #[test]
    fn enum_and_free_functions_agree() {
        let base = "#d2691e";
        let scheme = Harmony::Tetradic.generate(base).unwrap();
        assert_eq!(scheme.as_slice(), &tetradic(base).unwrap());

        let scheme = Harmony::Analogous(45.0).generate(base).unwrap();
        assert_eq!(scheme.as_slice(), &analogous(base, 45.0).unwrap());
    }

    #[test]
    fn finite_angles_pass_the_check() {
        assert_eq!(check_angle(-720.5), Ok(()));
        assert_eq!(check_angle(f64::NEG_INFINITY), Err(ColorError::NonFiniteAngle));
    }
}
