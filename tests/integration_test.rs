//! Integration tests for the complete palette analysis workflow
//!
//! These tests exercise the public API end to end:
//! - Color literal parsing and batch isolation of bad literals
//! - RGB → LAB conversion and CIEDE2000 properties
//! - Cache extraction against checked-in fixture files
//! - Distribution statistics and the composite randomness score

use palette_audit::{
    analyze_palette, classify, describe, load_cache_colors, parse_samples, samples_from_cache,
    AnalysisError, Classification, ColorSample, RandomnessScorer, Rgb,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::Path;

// ============================================================================
// Color literal parsing
// ============================================================================

#[test]
fn test_literal_forms_agree() {
    let expected = Rgb::new(255, 0, 0);
    for literal in ["255,0,0", "255 0 0", "ff0000", "#FF0000"] {
        let rgb: Rgb = literal.parse().unwrap();
        assert_eq!(rgb, expected, "literal {:?}", literal);
    }
}

#[test]
fn test_malformed_literals_rejected() {
    for literal in ["256,0,0", "1,2", "zz0000", "#ff00", ""] {
        let err = literal.parse::<Rgb>().unwrap_err();
        assert!(
            matches!(err, AnalysisError::MalformedColorLiteral { .. }),
            "literal {:?}",
            literal
        );
    }
}

#[test]
fn test_batch_isolation() {
    let (samples, errors) = parse_samples(["#abcdef", "not-a-color", "1 2 3"]);
    assert_eq!(samples.len(), 2);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_recoverable());
}

// ============================================================================
// Conversion and perceptual difference
// ============================================================================

#[test]
fn test_lab_endpoints() {
    let report = analyze_palette(
        &[
            ColorSample::from_literal("000000").unwrap(),
            ColorSample::from_literal("ffffff").unwrap(),
        ],
        Rgb::new(0, 0, 0),
    );
    let black = &report.colors[0];
    let white = &report.colors[1];
    assert!(black.lab.l.abs() < 0.5);
    assert!((white.lab.l - 100.0).abs() < 0.5);
    assert!(white.lab.a.abs() < 0.5);
    assert!(white.lab.b.abs() < 0.5);
    // ΔE against the background is zero for the background itself
    assert_eq!(black.delta_e_bg, 0.0);
    assert!(white.delta_e_bg > 90.0);
}

#[test]
fn test_delta_e_symmetric_via_swapped_backgrounds() {
    let x = ColorSample::from_literal("#c96a6a").unwrap();
    let y = Rgb::new(89, 201, 180);
    let forward = analyze_palette(&[x.clone()], y).colors[0].delta_e_bg;
    let backward = analyze_palette(
        &[ColorSample::new("swap", y)],
        x.rgb,
    )
    .colors[0]
        .delta_e_bg;
    assert!((forward - backward).abs() < 1e-5);
}

// ============================================================================
// Cache extraction
// ============================================================================

#[test]
fn test_cache_fixture_loads() {
    let colors = load_cache_colors(Path::new("tests/fixtures/semhl_cache.lua")).unwrap();
    assert_eq!(colors.len(), 10);
    assert_eq!(colors["parse_header"], "#D785C1");
    assert_eq!(colors["report_error"], "#E06C9F");
}

#[test]
fn test_cache_block_not_found() {
    let err = load_cache_colors(Path::new("tests/fixtures/no_colors.lua")).unwrap_err();
    assert!(matches!(err, AnalysisError::CacheBlockNotFound { .. }));
}

#[test]
fn test_cache_block_empty() {
    let err = load_cache_colors(Path::new("tests/fixtures/empty_block.lua")).unwrap_err();
    assert!(matches!(err, AnalysisError::CacheBlockEmpty { .. }));
}

#[test]
fn test_cache_file_missing() {
    let err = load_cache_colors(Path::new("tests/fixtures/does_not_exist.lua")).unwrap_err();
    assert!(matches!(err, AnalysisError::CacheFileMissing { .. }));
}

#[test]
fn test_cache_nested_braces_and_duplicates() {
    let colors = load_cache_colors(Path::new("tests/fixtures/nested_block.lua")).unwrap();
    assert_eq!(colors.len(), 2);
    // Last write wins for the duplicated key
    assert_eq!(colors["alpha"], "#A0B0C0");
    assert_eq!(colors["beta"], "#405060");
    // Entries after the block closed are never consumed
    assert!(!colors.contains_key("ignored"));
}

#[test]
fn test_samples_from_cache_ordered_by_rgb() {
    let samples = samples_from_cache(Path::new("tests/fixtures/semhl_cache.lua")).unwrap();
    assert_eq!(samples.len(), 10);
    let rgbs: Vec<Rgb> = samples.iter().map(|sample| sample.rgb).collect();
    let mut sorted = rgbs.clone();
    sorted.sort();
    assert_eq!(rgbs, sorted);
}

#[test]
fn test_cache_pipeline_end_to_end() {
    let samples = samples_from_cache(Path::new("tests/fixtures/semhl_cache.lua")).unwrap();
    let report = analyze_palette(&samples, Rgb::new(30, 30, 30));
    assert_eq!(report.colors.len(), 10);
    let channels = report.channels.unwrap();
    // Ten hand-picked mid-tone colors: every channel has real spread
    assert!(channels.l.stats.std_dev > 1.0);
    assert!(channels.delta_e.stats.min > 10.0);
    assert!(report.randomness.total > 0.0);
}

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn test_describe_constant() {
    let stats = describe(&[5.0, 5.0, 5.0, 5.0]).unwrap();
    assert_eq!(
        (stats.min, stats.max, stats.mean, stats.median, stats.std_dev),
        (5.0, 5.0, 5.0, 5.0, 0.0)
    );
}

#[test]
fn test_classify_degenerate_states() {
    assert_eq!(
        classify(&[1.0, 1.0, 1.0]).classification,
        Classification::Constant
    );
    assert_eq!(
        classify(&[1.0, 2.0]).classification,
        Classification::InsufficientData
    );
}

// ============================================================================
// Randomness scoring
// ============================================================================

fn random_batch(rng: &mut StdRng, count: usize) -> Vec<ColorSample> {
    (0..count)
        .map(|i| {
            let rgb = Rgb::new(rng.random(), rng.random(), rng.random());
            ColorSample::new(format!("random_{i}"), rgb)
        })
        .collect()
}

#[test]
fn test_uniform_random_colors_score_high() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let samples = random_batch(&mut rng, 100);
    let report = analyze_palette(&samples, Rgb::new(0, 0, 0));
    assert!(
        report.randomness.total >= 60.0,
        "expected >= 60, got {:.2} ({:?})",
        report.randomness.total,
        report.randomness
    );
}

#[test]
fn test_near_identical_colors_score_low() {
    // 100 colors all within ΔE < 2 of each other: a base color repeated,
    // with a few one-step component nudges
    let base = Rgb::new(40, 90, 160);
    let mut samples = vec![ColorSample::new("base", base); 97];
    samples.push(ColorSample::new("nudge_r1", Rgb::new(41, 90, 160)));
    samples.push(ColorSample::new("nudge_r2", Rgb::new(42, 90, 160)));
    samples.push(ColorSample::new("nudge_g1", Rgb::new(40, 91, 160)));

    let report = analyze_palette(&samples, Rgb::new(0, 0, 0));
    assert!(
        report.randomness.total < 20.0,
        "expected < 20, got {:.2} ({:?})",
        report.randomness.total,
        report.randomness
    );
}

#[test]
fn test_score_order_invariant() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut samples = random_batch(&mut rng, 64);
    let before = analyze_palette(&samples, Rgb::new(30, 30, 30)).randomness;
    samples.shuffle(&mut rng);
    let after = analyze_palette(&samples, Rgb::new(30, 30, 30)).randomness;
    assert_eq!(before, after);
}

#[test]
fn test_degenerate_batch_scores_zero() {
    let (samples, _) = parse_samples(["#102030", "#405060"]);
    let report = analyze_palette(&samples, Rgb::new(0, 0, 0));
    assert_eq!(report.randomness.total, 0.0);
    assert!(report.randomness.spacing.is_none());
    assert!(report.randomness.entropy.is_none());
}

#[test]
fn test_scorer_direct_use_matches_palette_report() {
    let mut rng = StdRng::seed_from_u64(7);
    let samples = random_batch(&mut rng, 32);
    let report = analyze_palette(&samples, Rgb::new(0, 0, 0));

    let mut channels = palette_audit::ChannelSamples::default();
    for color in &report.colors {
        channels.l.push(color.lab.l as f64);
        channels.a.push(color.lab.a as f64);
        channels.b.push(color.lab.b as f64);
        channels.delta_e.push(color.delta_e_bg as f64);
    }
    let direct = RandomnessScorer::new().score(&channels);
    assert_eq!(direct, report.randomness);
}
