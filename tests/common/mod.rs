//! Shared test infrastructure for color-harmony integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use color_harmony::{Hls, Rgb, normalize, rgb_to_hls};

// ============================================================================
// Fixtures
// ============================================================================

/// Chromatic colors whose rotations land away from rounding ties.
pub const CHROMATIC: [&str; 3] = ["#d2691e", "#b22222", "#7fffd4"];

/// Wider sample used for property checks that tolerate ±1 rounding.
pub const SAMPLE: [&str; 8] = [
    "#d2691e", "#b22222", "#7fffd4", "#3a7bd5", "#2e8b57", "#6a5acd", "#1e90ff", "#ffa500",
];

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors channel-wise with an integer tolerance
pub fn rgb_close(a: Rgb, b: Rgb, tolerance: u8) -> bool {
    a.red.abs_diff(b.red) <= tolerance
        && a.green.abs_diff(b.green) <= tolerance
        && a.blue.abs_diff(b.blue) <= tolerance
}

/// HLS form of an 8-bit color
pub fn hls_of(rgb: Rgb) -> Hls {
    rgb_to_hls(normalize(rgb))
}

/// Shortest distance between two hues on the wheel, in turns
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 1.0;
    d.min(1.0 - d)
}

/// Hue of `color` measured forward from `base`, in degrees
pub fn hue_offset_degrees(base: Rgb, color: Rgb) -> f64 {
    let turns = (hls_of(color).hue - hls_of(base).hue).rem_euclid(1.0);
    turns * 360.0
}

/// Assert that `color` keeps `base`'s lightness and saturation
pub fn assert_tone_preserved(base: Rgb, color: Rgb) {
    const EPSILON: f64 = 0.02;
    let b = hls_of(base);
    let c = hls_of(color);
    assert!(
        (b.lightness - c.lightness).abs() < EPSILON,
        "lightness drifted: {:?} -> {:?}",
        base,
        color
    );
    assert!(
        (b.saturation - c.saturation).abs() < EPSILON,
        "saturation drifted: {:?} -> {:?}",
        base,
        color
    );
}
