//! Pearson correlation between two colors.
//!
//! Each color's normalized red, green and blue values are treated as a
//! three-element sample. The score runs from -1.0 to 1.0 and is invariant to
//! scaling a color's channels, so brighter or darker versions of the same hue
//! score close to 1.0.

use crate::colors::normalize;
use crate::hex::hex_to_rgb;
use crate::types::{ColorError, Rgb};

/// Pearson correlation of two hex colors.
///
/// # Errors
/// Returns the parse error of the first invalid argument.
pub fn similarity(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(correlation(hex_to_rgb(a)?, hex_to_rgb(b)?))
}

/// Pearson correlation of two 8-bit colors.
///
/// Returns 0.0 if either color is achromatic: with all channels equal the
/// sample has no variance and the coefficient is undefined.
pub fn correlation(a: Rgb, b: Rgb) -> f64 {
    if is_achromatic(a) || is_achromatic(b) {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a = channels(a);
    let b = channels(b);
    let mean_a = mean(&a);
    let mean_b = mean(&b);

    let mut covariance = 0.0;
    let mut variance_a = 0.0;
    let mut variance_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        covariance += dx * dy;
        variance_a += dx * dx;
        variance_b += dy * dy;
    }

    let denominator = libm::sqrt(variance_a / 3.0) * libm::sqrt(variance_b / 3.0);
    if denominator == 0.0 {
        return 0.0;
    }

    (covariance / 3.0 / denominator).clamp(-1.0, 1.0)
}

/// Exact ordering key for correlation against one fixed query color.
///
/// Pearson's r is a ratio of integer sums over the 8-bit channels. Against a
/// fixed query the query's own variance is a common factor, so candidates
/// order by `sign(cov) * cov² / var`, compared by cross-multiplication.
/// Equal keys mean exactly equal correlations, which float scores cannot
/// promise.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rank {
    numerator: i128,
    denominator: i128,
}

impl Rank {
    /// Key of `candidate` for `query`. Achromatic on either side ranks as 0.
    pub(crate) fn of(query: Rgb, candidate: Rgb) -> Self {
        let x = [query.red, query.green, query.blue].map(i64::from);
        let y = [candidate.red, candidate.green, candidate.blue].map(i64::from);

        let sum_x: i64 = x.iter().sum();
        let sum_y: i64 = y.iter().sum();
        let sum_xy: i64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
        let sum_yy: i64 = y.iter().map(|b| b * b).sum();

        // Both scaled by 3 to stay integral.
        let covariance = 3 * sum_xy - sum_x * sum_y;
        let variance = 3 * sum_yy - sum_y * sum_y;

        if covariance == 0 || variance == 0 {
            return Rank {
                numerator: 0,
                denominator: 1,
            };
        }

        let covariance = i128::from(covariance);
        Rank {
            numerator: covariance.signum() * covariance * covariance,
            denominator: i128::from(variance),
        }
    }

    /// Strictly higher correlation than `other`.
    pub(crate) fn beats(&self, other: &Rank) -> bool {
        self.numerator * other.denominator > other.numerator * self.denominator
    }
}

/// All three channels equal (black, white and every gray).
#[inline]
pub fn is_achromatic(rgb: Rgb) -> bool {
    rgb.red == rgb.green && rgb.green == rgb.blue
}

#[inline]
fn channels(rgb: Rgb) -> [f64; 3] {
    let rgb = normalize(rgb);
    [rgb.red, rgb.green, rgb.blue]
}

#[inline]
fn mean(sample: &[f64; 3]) -> f64 {
    sample.iter().sum::<f64>() / 3.0
}
