//! Integration tests for colors module

mod common;
use common::*;

use color_harmony::colors::{self, Hls};
use color_harmony::{BLACK, BLUE, GREEN, RED, Rgb, Srgb, WHITE};

fn hls_equal(a: Hls, b: Hls) -> bool {
    const EPSILON: f64 = 1e-9;
    hue_distance(a.hue, b.hue) < EPSILON
        && (a.lightness - b.lightness).abs() < EPSILON
        && (a.saturation - b.saturation).abs() < EPSILON
}

#[test]
fn rgb_to_hls_places_primaries_on_the_wheel() {
    assert!(hls_equal(hls_of(RED), Hls::new(0.0, 0.5, 1.0)));
    assert!(hls_equal(hls_of(GREEN), Hls::new(1.0 / 3.0, 0.5, 1.0)));
    assert!(hls_equal(hls_of(BLUE), Hls::new(2.0 / 3.0, 0.5, 1.0)));
}

#[test]
fn rgb_to_hls_handles_achromatic_colors() {
    let black = hls_of(BLACK);
    assert_eq!(black.lightness, 0.0);
    assert_eq!(black.saturation, 0.0);

    let white = hls_of(WHITE);
    assert_eq!(white.lightness, 1.0);
    assert_eq!(white.saturation, 0.0);

    let gray = colors::rgb_to_hls(Srgb::new(0.5, 0.5, 0.5));
    assert!((gray.lightness - 0.5).abs() < 1e-12);
    assert_eq!(gray.saturation, 0.0);
    assert_eq!(gray.hue, 0.0);
}

#[test]
fn rgb_to_hls_uses_lightness_dependent_saturation() {
    // Dark half: (max - min) / (max + min)
    let dark = colors::rgb_to_hls(Srgb::new(0.4, 0.2, 0.2));
    assert!((dark.lightness - 0.3).abs() < 1e-12);
    assert!((dark.saturation - 1.0 / 3.0).abs() < 1e-12);

    // Light half: (max - min) / (2 - max - min)
    let light = colors::rgb_to_hls(Srgb::new(1.0, 0.6, 0.6));
    assert!((light.lightness - 0.8).abs() < 1e-12);
    assert!((light.saturation - 1.0).abs() < 1e-12);
}

#[test]
fn hls_to_rgb_inverts_rgb_to_hls() {
    let rgb = Srgb::new(0.25, 0.5, 0.75);
    let back = colors::hls_to_rgb(colors::rgb_to_hls(rgb));
    assert!((back.red - rgb.red).abs() < 1e-12);
    assert!((back.green - rgb.green).abs() < 1e-12);
    assert!((back.blue - rgb.blue).abs() < 1e-12);
}

#[test]
fn hls_round_trip_is_within_one_step() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(15) {
                let rgb = Rgb::new(r, g, b);
                let back = colors::quantize(colors::hls_to_rgb(hls_of(rgb)));
                assert!(rgb_close(rgb, back, 1), "{:?} came back as {:?}", rgb, back);
            }
        }
    }
}

#[test]
fn hls_round_trip_covers_channel_extremes() {
    for rgb in [Rgb::new(255, 254, 0), Rgb::new(1, 0, 0), Rgb::new(0, 1, 255)] {
        let back = colors::quantize(colors::hls_to_rgb(hls_of(rgb)));
        assert!(rgb_close(rgb, back, 1), "{:?} came back as {:?}", rgb, back);
    }
}

#[test]
fn hue_wraps_around_one_turn() {
    let hls = Hls::new(1.25, 0.5, 1.0);
    assert!((hls.hue - 0.25).abs() < 1e-12);

    let hls = Hls::new(-0.25, 0.5, 1.0);
    assert!((hls.hue - 0.75).abs() < 1e-12);
}

#[test]
fn rotate_keeps_lightness_and_saturation() {
    let hls = Hls::new(0.1, 0.3, 0.7).rotate(200.0);
    assert_eq!(hls.lightness, 0.3);
    assert_eq!(hls.saturation, 0.7);
    assert!(hue_distance(hls.hue, 0.1 + 200.0 / 360.0) < 1e-12);
}

#[test]
fn rotate_by_full_turn_is_identity() {
    let hls = Hls::new(0.4, 0.5, 0.5);
    assert!(hls_equal(hls, hls.rotate(360.0)));
    assert!(hls_equal(hls, hls.rotate(-720.0)));
}

#[test]
fn rotate_hue_moves_primaries() {
    assert_eq!(colors::rotate_hue(RED, 120.0), GREEN);
    assert_eq!(colors::rotate_hue(RED, -120.0), BLUE);
    assert_eq!(colors::rotate_hue(RED, 0.0), RED);
}

#[test]
fn rotate_hue_leaves_grays_alone() {
    let gray = Rgb::new(128, 128, 128);
    assert_eq!(colors::rotate_hue(gray, 90.0), gray);
}

#[test]
fn normalize_and_quantize_are_inverse() {
    for hex in SAMPLE {
        let rgb = color_harmony::hex_to_rgb(hex).unwrap();
        assert_eq!(colors::quantize(colors::normalize(rgb)), rgb);
    }
}
