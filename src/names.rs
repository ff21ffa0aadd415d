//! Nearest color name lookup.
//!
//! A fixed table of 716 named reference colors, stored sorted by hex code.
//! Exact table hits are resolved by binary search. Anything else is scored
//! against every entry with [`correlation`] and the best entry wins. Ties are
//! decided on exact integer sums, not float scores, and the entry with the
//! lowest hex code is kept.

mod table;

use crate::hex::{HexString, format_hex, hex_to_rgb};
use crate::similarity::{Rank, correlation};
use crate::types::{ColorError, Rgb};

use table::COLOR_NAMES;

/// A named reference color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    code: u32,
    name: &'static str,
}

impl NamedColor {
    /// Creates an entry from a packed `0xRRGGBB` code.
    pub const fn new(code: u32, name: &'static str) -> Self {
        Self { code, name }
    }

    /// The human-readable name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Packed `0xRRGGBB` code.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// The entry as an 8-bit color.
    pub fn rgb(&self) -> Rgb {
        Rgb::new(
            (self.code >> 16) as u8,
            (self.code >> 8) as u8,
            self.code as u8,
        )
    }

    /// Canonical `#rrggbb` form.
    pub fn hex(&self) -> HexString {
        format_hex(self.rgb())
    }
}

/// Best table entry for a color, with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// The winning entry.
    pub color: &'static NamedColor,

    /// Correlation with the query, or 1.0 for an exact hit.
    pub score: f64,
}

/// The full reference table, ascending by hex code.
pub fn named_colors() -> &'static [NamedColor] {
    &COLOR_NAMES
}

/// Finds the entry whose color is exactly `rgb`.
pub fn lookup(rgb: Rgb) -> Option<&'static NamedColor> {
    let code = pack(rgb);
    COLOR_NAMES
        .binary_search_by_key(&code, NamedColor::code)
        .ok()
        .map(|index| &COLOR_NAMES[index])
}

/// Finds the closest named color.
pub fn nearest(rgb: Rgb) -> Match {
    if let Some(color) = lookup(rgb) {
        return Match { color, score: 1.0 };
    }

    // Ranked exactly so that equal correlations tie regardless of float noise.
    let mut best = &COLOR_NAMES[0];
    let mut best_rank = Rank::of(rgb, best.rgb());
    for color in &COLOR_NAMES[1..] {
        let rank = Rank::of(rgb, color.rgb());
        if rank.beats(&best_rank) {
            best = color;
            best_rank = rank;
        }
    }
    Match {
        color: best,
        score: correlation(rgb, best.rgb()),
    }
}

/// Returns the name of the closest named color to `hex`.
///
/// # Errors
/// Returns the parse error if `hex` is not a valid color.
pub fn color_name(hex: &str) -> Result<&'static str, ColorError> {
    Ok(nearest(hex_to_rgb(hex)?).color.name())
}

#[inline]
fn pack(rgb: Rgb) -> u32 {
    u32::from(rgb.red) << 16 | u32::from(rgb.green) << 8 | u32::from(rgb.blue)
}
