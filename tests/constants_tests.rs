// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn random_ranges_are_well_ordered() {
    assert!(BOKEH_RADIUS_MIN < BOKEH_RADIUS_MAX);
    assert!(BOKEH_PULSE_AMP_MIN < BOKEH_PULSE_AMP_MAX);
    assert!(BOKEH_PULSE_SPEED_MIN < BOKEH_PULSE_SPEED_MAX);
    assert!(BOKEH_OPACITY_MIN < BOKEH_OPACITY_MAX);
    assert!(GLITTER_SIZE_MIN < GLITTER_SIZE_MAX);
    assert!(GLITTER_OPACITY_MIN < GLITTER_OPACITY_MAX);
    assert!(GLITTER_TWINKLE_SPEED_MIN < GLITTER_TWINKLE_SPEED_MAX);
    assert!(GLITTER_SPIN_MIN < GLITTER_SPIN_MAX);
    assert!(SPARKLE_SIZE_MIN < SPARKLE_SIZE_MAX);
    assert!(SPARKLE_RISE_MIN < SPARKLE_RISE_MAX);
    assert!(SPARKLE_LIFE_MIN < SPARKLE_LIFE_MAX);
    assert!(SPARKLE_OPACITY_MIN < SPARKLE_OPACITY_MAX);
    assert!(SPARKLE_TWINKLE_SPEED_MIN < SPARKLE_TWINKLE_SPEED_MAX);
    assert!(SPARKLE_SPIN_MIN < SPARKLE_SPIN_MAX);
    assert!(DUST_SIZE_MIN < DUST_SIZE_MAX);
    assert!(DUST_WOBBLE_SPEED_MIN < DUST_WOBBLE_SPEED_MAX);
    assert!(DUST_WOBBLE_AMP_MIN < DUST_WOBBLE_AMP_MAX);
    assert!(DUST_OPACITY_MIN < DUST_OPACITY_MAX);
    assert!(WAVE_AMP_MIN < WAVE_AMP_MAX);
    assert!(WAVE_FREQ_MIN < WAVE_FREQ_MAX);
    assert!(WAVE_SPEED_MIN < WAVE_SPEED_MAX);
    assert!(WAVE_OPACITY_MIN < WAVE_OPACITY_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_stay_renderable() {
    assert!(BOKEH_OPACITY_MIN > 0.0 && BOKEH_OPACITY_MAX <= 1.0);
    assert!(GLITTER_OPACITY_MIN > 0.0 && GLITTER_OPACITY_MAX <= 1.0);
    assert!(SPARKLE_OPACITY_MIN > 0.0 && SPARKLE_OPACITY_MAX <= 1.0);
    assert!(DUST_OPACITY_MAX + DUST_TWINKLE_DEPTH <= 1.0);
    assert!(WAVE_OPACITY_MAX <= 1.0);
    assert!(SPARKLE_TWINKLE_DEPTH > 0.0 && SPARKLE_TWINKLE_DEPTH < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn population_density_is_bounded() {
    assert!(BOKEH_WIDTH_DIVISOR > 0.0);
    assert!(GLITTER_WIDTH_DIVISOR > 0.0);
    assert!(SPARKLE_WIDTH_DIVISOR > 0.0);
    assert!(DUST_WIDTH_DIVISOR > 0.0);
    assert!(BOKEH_MAX_COUNT > 0);
    assert!(GLITTER_MAX_COUNT > 0);
    assert!(SPARKLE_MAX_COUNT > 0);
    assert!(DUST_MAX_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wave_baselines_are_ascending_fractions() {
    let mut prev = 0.0;
    for b in WAVE_BASELINES {
        assert!(b > prev && b < 1.0);
        prev = b;
    }
    assert!(WAVE_SAMPLE_STEP_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sparkle_lifecycle_fits_inside_its_lifetime() {
    // Fade-in and fade-out windows must never overlap, even at minimum life.
    assert!(SPARKLE_FADE_IN_FRAMES + SPARKLE_FADE_OUT_FRAMES < SPARKLE_LIFE_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frontend_timings_are_positive() {
    assert!(LIGHTBOX_FADE_MS > 0);
    assert!(HEART_BURST_MS > 0);
    assert!(SCROLL_SETTLE_MS > 0);
    assert!(FORM_RESET_MS > LIGHTBOX_FADE_MS);
    assert!(SLIDESHOW_INTERVAL_MS > 0);
    assert!(SLIDESHOW_SLIDE_COUNT > 0);
    assert!(HEADER_SCROLL_THRESHOLD > 0.0);
    assert!(REVEAL_MARGIN_PX > 0.0);
    assert!(REVEAL_VIEWPORT_FRACTION > 0.0 && REVEAL_VIEWPORT_FRACTION <= 1.0);
}
