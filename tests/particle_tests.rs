// Host-side tests for the pure animation state.
// The main crate is wasm-only, so we include the pure-Rust modules directly;
// `particles` resolves its `super::constants` against this file's root.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const W: f64 = 640.0;
const H: f64 = 480.0;

fn populated(seed: u64) -> AnimationState {
    let mut state = AnimationState::new(W, H, seed);
    state.populate();
    state
}

#[test]
fn new_state_is_empty_until_populated() {
    let state = AnimationState::new(W, H, 1);
    assert!(state.bokeh.is_empty());
    assert!(state.glitter.is_empty());
    assert!(state.sparkles.is_empty());
    assert!(state.dust.is_empty());
    assert!(state.waves.is_empty());
    assert_eq!(state.time, 0.0);
}

#[test]
fn step_on_empty_state_only_advances_time() {
    // Reduced-motion path: never populated, stepping must stay total.
    let mut state = AnimationState::new(W, H, 1);
    for _ in 0..10 {
        state.step();
    }
    assert_eq!(state.time, 10.0);
    assert!(state.glitter.is_empty());
}

#[test]
fn population_respects_caps() {
    // Wide enough that every width-derived count hits its cap.
    let mut state = AnimationState::new(10_000.0, 5_000.0, 2);
    state.populate();
    assert_eq!(state.bokeh.len(), BOKEH_MAX_COUNT);
    assert_eq!(state.glitter.len(), GLITTER_MAX_COUNT);
    assert_eq!(state.sparkles.len(), SPARKLE_MAX_COUNT);
    assert_eq!(state.dust.len(), DUST_MAX_COUNT);
    assert_eq!(state.waves.len(), WAVE_BASELINES.len());
}

#[test]
fn narrow_surface_population_is_small_but_valid() {
    let mut state = AnimationState::new(90.0, 200.0, 3);
    state.populate();
    assert!(state.bokeh.len() <= BOKEH_MAX_COUNT);
    assert!(state.glitter.len() <= GLITTER_MAX_COUNT);
    assert!(state.sparkles.len() <= SPARKLE_MAX_COUNT);
    assert!(state.dust.len() <= DUST_MAX_COUNT);
    // Waves are unconditional.
    assert_eq!(state.waves.len(), 4);
}

#[test]
fn waves_sit_at_fixed_baseline_fractions() {
    let state = populated(4);
    for (wave, fraction) in state.waves.iter().zip(WAVE_BASELINES) {
        assert!((wave.baseline - fraction * H).abs() < 1e-9);
    }
}

#[test]
fn glitter_and_dust_stay_inside_the_surface() {
    let mut state = populated(5);
    for _ in 0..2_000 {
        state.step();
        for p in &state.glitter {
            assert!(p.position.x >= 0.0 && p.position.x < W, "x={}", p.position.x);
            assert!(p.position.y >= 0.0 && p.position.y < H, "y={}", p.position.y);
        }
        for p in &state.dust {
            assert!(p.position.x >= 0.0 && p.position.x < W);
            assert!(p.position.y >= 0.0 && p.position.y < H);
        }
    }
}

#[test]
fn glitter_opacity_stays_within_its_twinkle_range() {
    let mut state = populated(6);
    for _ in 0..1_000 {
        state.step();
        for p in &state.glitter {
            assert!(p.opacity >= 0.0);
            assert!(p.opacity <= p.max_opacity + 1e-12);
        }
    }
}

#[test]
fn sparkle_never_outlives_its_max_life() {
    let mut state = populated(7);
    for _ in 0..3_000 {
        state.step();
        for s in &state.sparkles {
            assert!(s.life < s.max_life, "life={} max={}", s.life, s.max_life);
            assert!(s.opacity >= 0.0 && s.opacity <= s.max_opacity + 1e-12);
        }
    }
}

#[test]
fn sparkle_reset_respawns_at_the_bottom_edge() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut s = Sparkle::spawn(&mut rng, W, H);
    s.life = s.max_life; // force expiry on the next update
    s.update(1.0, W, H, &mut rng);
    assert_eq!(s.position.y, H);
    assert!(s.position.x >= 0.0 && s.position.x < W);
    assert_eq!(s.life, 0.0);
}

#[test]
fn bokeh_radius_oscillates_around_its_base() {
    let mut state = populated(9);
    for _ in 0..1_000 {
        state.step();
        for p in &state.bokeh {
            assert!((p.radius - p.base_radius).abs() <= p.pulse_amplitude + 1e-9);
        }
    }
}

#[test]
fn bokeh_wraps_with_its_radius_margin() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut p = BokehCircle::spawn(&mut rng, W, H);
    p.position.x = W + p.base_radius + 0.5;
    p.velocity.x = 0.1;
    p.velocity.y = 0.0;
    let y = p.position.y;
    p.update(1.0, W, H);
    assert_eq!(p.position.x, -p.base_radius);
    assert_eq!(p.position.y, y);
}

#[test]
fn wave_height_stays_within_its_amplitudes() {
    let mut rng = StdRng::seed_from_u64(11);
    let wave = LightWave::spawn(&mut rng, 300.0);
    for t in 0..500 {
        let mut x = 0.0;
        while x <= W {
            let y = wave.y_at(x, t as f64);
            // Primary plus half-amplitude secondary term.
            assert!((y - wave.baseline).abs() <= wave.amplitude * 1.5 + 1e-9);
            x += WAVE_SAMPLE_STEP_PX;
        }
    }
}

#[test]
fn resize_rebuilds_for_the_new_bounds() {
    let mut state = populated(12);
    state.resize(320.0, 240.0);
    assert_eq!(state.width, 320.0);
    assert_eq!(state.height, 240.0);
    for p in &state.glitter {
        assert!(p.position.x < 320.0);
        assert!(p.position.y < 240.0);
    }
    for (wave, fraction) in state.waves.iter().zip(WAVE_BASELINES) {
        assert!((wave.baseline - fraction * 240.0).abs() < 1e-9);
    }
}

#[test]
fn grow_height_never_shrinks() {
    let mut state = populated(13);
    let count_before = state.dust.len();
    state.grow_height(H + 500.0);
    assert_eq!(state.height, H + 500.0);
    // Growth keeps the field; only a resize rebuilds it.
    assert_eq!(state.dust.len(), count_before);
    state.grow_height(100.0);
    assert_eq!(state.height, H + 500.0);
}

#[test]
fn same_seed_reproduces_the_same_field() {
    let a = populated(42);
    let b = populated(42);
    assert_eq!(a.bokeh.len(), b.bokeh.len());
    for (x, y) in a.bokeh.iter().zip(&b.bokeh) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.base_radius, y.base_radius);
    }
    for (x, y) in a.glitter.iter().zip(&b.glitter) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.phase, y.phase);
    }
}

#[test]
fn palette_colors_are_the_only_colors_used() {
    let state = populated(14);
    let in_palette = |c: [u8; 3]| PALETTE.contains(&c);
    assert!(state.bokeh.iter().all(|p| in_palette(p.color)));
    assert!(state.glitter.iter().all(|p| in_palette(p.color)));
    assert!(state.sparkles.iter().all(|p| in_palette(p.color)));
    assert!(state.dust.iter().all(|p| in_palette(p.color)));
    assert!(state.waves.iter().all(|p| in_palette(p.color)));
}
