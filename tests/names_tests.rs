//! Integration tests for similarity scoring and color naming

mod common;
use common::*;

use color_harmony::{
    ColorError, Rgb, color_name, correlation, hex_to_rgb, lookup, named_colors, nearest,
    similarity,
};

// ============================================================================
// Similarity
// ============================================================================

#[test]
fn identical_colors_correlate_perfectly() {
    assert_eq!(similarity("#ff0000", "#ff0000"), Ok(1.0));
    for hex in SAMPLE {
        assert_eq!(similarity(hex, hex), Ok(1.0), "{}", hex);
    }
}

#[test]
fn similarity_is_symmetric() {
    for a in SAMPLE {
        for b in SAMPLE {
            let ab = similarity(a, b).unwrap();
            let ba = similarity(b, a).unwrap();
            assert!((ab - ba).abs() < 1e-12, "{} / {}", a, b);
        }
    }
}

#[test]
fn similarity_stays_in_range() {
    for a in SAMPLE {
        for b in SAMPLE {
            let score = similarity(a, b).unwrap();
            assert!((-1.0..=1.0).contains(&score), "{} / {}: {}", a, b, score);
        }
    }
}

#[test]
fn similarity_ignores_brightness_scaling() {
    // Same channel proportions at half intensity.
    let score = correlation(Rgb::new(200, 100, 50), Rgb::new(100, 50, 25));
    assert!((score - 1.0).abs() < 1e-12, "score: {}", score);
}

#[test]
fn similarity_of_grays_is_zero() {
    assert_eq!(similarity("#808080", "#ff0000"), Ok(0.0));
    assert_eq!(similarity("#ff0000", "#000000"), Ok(0.0));
    assert_eq!(similarity("#ffffff", "#ffffff"), Ok(0.0));
}

#[test]
fn similarity_rejects_malformed_hex() {
    assert_eq!(
        similarity("#ff0000", "#ff00"),
        Err(ColorError::InvalidLength { found: 4 })
    );
    assert!(similarity("nothex", "#ff0000").is_err());
}

// ============================================================================
// Name table
// ============================================================================

#[test]
fn table_has_every_reference_color() {
    assert_eq!(named_colors().len(), 716);
}

#[test]
fn table_starts_and_ends_at_extremes() {
    let table = named_colors();
    assert_eq!(table[0].name(), "black");
    assert_eq!(table[table.len() - 1].name(), "white");
}

#[test]
fn table_hex_round_trips() {
    for color in named_colors() {
        assert_eq!(hex_to_rgb(&color.hex()), Ok(color.rgb()), "{}", color.name());
    }
}

#[test]
fn lookup_finds_exact_entries() {
    assert_eq!(lookup(Rgb::new(0x2e, 0x8b, 0x57)).map(|c| c.name()), Some("sea green"));
    assert_eq!(lookup(Rgb::new(0xd2, 0x69, 0x1e)).map(|c| c.name()), Some("cocoa brown"));
    assert!(lookup(Rgb::new(0x12, 0x34, 0x57)).is_none());
}

// ============================================================================
// Nearest name
// ============================================================================

#[test]
fn black_and_white_are_named() {
    assert_eq!(color_name("#000000"), Ok("black"));
    assert_eq!(color_name("#ffffff"), Ok("white"));
}

#[test]
fn exact_entries_get_their_own_name() {
    assert_eq!(color_name("#ff0000"), Ok("red"));
    assert_eq!(color_name("#0000FF"), Ok("blue"));
    assert_eq!(color_name("40e0d0"), Ok("turquoise"));
    assert_eq!(color_name("#536878"), Ok("payne's grey"));
}

#[test]
fn every_table_entry_names_itself() {
    for color in named_colors() {
        assert_eq!(color_name(&color.hex()), Ok(color.name()));
    }
}

#[test]
fn off_table_colors_pick_highest_correlation() {
    assert_eq!(color_name("#40e0d1"), Ok("celadon green"));
    assert_eq!(color_name("#9b30ff"), Ok("blue-violet"));
}

#[test]
fn exact_ties_go_to_lowest_hex_code() {
    // Nine entries share navy blue's shape (0,0,k) and tie exactly for this
    // query; eight share pakistan green's for the second.
    assert_eq!(color_name("#6162fa"), Ok("navy blue"));
    assert_eq!(color_name("#2c9e2a"), Ok("pakistan green"));
}

#[test]
fn tied_entries_all_score_like_the_winner() {
    let rgb = hex_to_rgb("#6162fa").unwrap();
    let best = nearest(rgb);
    let navy = Rgb::new(0x00, 0x00, 0x80);
    assert_eq!(best.color.rgb(), navy);
    for color in named_colors() {
        let score = correlation(rgb, color.rgb());
        assert!(score <= best.score + 1e-12, "{}", color.name());
        if (score - best.score).abs() < 1e-12 {
            assert!(color.code() >= best.color.code(), "{}", color.name());
        }
    }
}

#[test]
fn nearest_reports_winning_score() {
    let rgb = hex_to_rgb("#9b30ff").unwrap();
    let best = nearest(rgb);
    assert_eq!(best.color.name(), "blue-violet");
    for color in named_colors() {
        assert!(correlation(rgb, color.rgb()) <= best.score);
    }
}

#[test]
fn nearest_exact_hit_scores_one() {
    let best = nearest(Rgb::new(255, 0, 0));
    assert_eq!(best.color.name(), "red");
    assert_eq!(best.score, 1.0);
}

#[test]
fn off_table_grays_fall_back_to_first_entry() {
    // Every score is 0.0 for a gray, so the lowest hex code wins the tie.
    assert_eq!(color_name("#7f7f7f"), Ok("black"));
    assert_eq!(nearest(Rgb::new(0x7f, 0x7f, 0x7f)).score, 0.0);
}

#[test]
fn color_name_rejects_malformed_hex() {
    assert_eq!(
        color_name("#abcdefg"),
        Err(ColorError::InvalidLength { found: 7 })
    );
}
