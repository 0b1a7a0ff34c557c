// Pure simulation state for the background canvas animation.
//
// Everything here is platform-free: positions are in canvas pixels, time is
// a frame counter, and all randomness flows through one seeded RNG owned by
// AnimationState. The web frontend steps the state once per animation frame
// and hands the result to the renderer.

use super::constants::*;
use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

#[derive(Clone, Debug)]
pub struct BokehCircle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub base_radius: f64,
    pub radius: f64,
    pub pulse_amplitude: f64,
    pub pulse_speed: f64,
    pub phase: f64,
    pub opacity: f64,
    pub color: [u8; 3],
}

impl BokehCircle {
    pub fn spawn(rng: &mut StdRng, width: f64, height: f64) -> Self {
        let base_radius = rng.gen_range(BOKEH_RADIUS_MIN..BOKEH_RADIUS_MAX);
        Self {
            position: random_point(rng, width, height),
            velocity: random_drift(rng, BOKEH_DRIFT_MAX),
            base_radius,
            radius: base_radius,
            pulse_amplitude: rng.gen_range(BOKEH_PULSE_AMP_MIN..BOKEH_PULSE_AMP_MAX),
            pulse_speed: rng.gen_range(BOKEH_PULSE_SPEED_MIN..BOKEH_PULSE_SPEED_MAX),
            phase: rng.gen_range(0.0..TAU),
            opacity: rng.gen_range(BOKEH_OPACITY_MIN..BOKEH_OPACITY_MAX),
            color: random_color(rng),
        }
    }

    pub fn update(&mut self, time: f64, width: f64, height: f64) {
        self.position += self.velocity;
        self.radius = self.base_radius
            + self.pulse_amplitude * (time * self.pulse_speed + self.phase).sin();
        // A disk slides fully off (by its base radius) before reappearing on
        // the opposite edge.
        let m = self.base_radius;
        if self.position.x < -m {
            self.position.x = width + m;
        } else if self.position.x > width + m {
            self.position.x = -m;
        }
        if self.position.y < -m {
            self.position.y = height + m;
        } else if self.position.y > height + m {
            self.position.y = -m;
        }
    }
}

#[derive(Clone, Debug)]
pub struct GlitterParticle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub rotation: f64,
    pub spin: f64,
    pub max_opacity: f64,
    pub opacity: f64,
    pub twinkle_speed: f64,
    pub phase: f64,
    pub color: [u8; 3],
}

impl GlitterParticle {
    pub fn spawn(rng: &mut StdRng, width: f64, height: f64) -> Self {
        let max_opacity = rng.gen_range(GLITTER_OPACITY_MIN..GLITTER_OPACITY_MAX);
        Self {
            position: random_point(rng, width, height),
            velocity: random_drift(rng, GLITTER_DRIFT_MAX),
            size: rng.gen_range(GLITTER_SIZE_MIN..GLITTER_SIZE_MAX),
            rotation: rng.gen_range(0.0..TAU),
            spin: rng.gen_range(GLITTER_SPIN_MIN..GLITTER_SPIN_MAX),
            max_opacity,
            opacity: 0.0,
            twinkle_speed: rng.gen_range(GLITTER_TWINKLE_SPEED_MIN..GLITTER_TWINKLE_SPEED_MAX),
            phase: rng.gen_range(0.0..TAU),
            color: random_color(rng),
        }
    }

    pub fn update(&mut self, time: f64, width: f64, height: f64) {
        self.position += self.velocity;
        self.position.x = wrap(self.position.x, width);
        self.position.y = wrap(self.position.y, height);
        self.rotation += self.spin;
        self.opacity =
            self.max_opacity * ((time * self.twinkle_speed + self.phase).sin() + 1.0) / 2.0;
    }
}

#[derive(Clone, Debug)]
pub struct Sparkle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub rotation: f64,
    pub spin: f64,
    pub life: f64,
    pub max_life: f64,
    pub max_opacity: f64,
    pub opacity: f64,
    pub twinkle_speed: f64,
    pub phase: f64,
    pub color: [u8; 3],
}

impl Sparkle {
    /// Fresh sparkle at a random x on the bottom edge, about to rise.
    pub fn spawn(rng: &mut StdRng, width: f64, height: f64) -> Self {
        Self {
            position: DVec2::new(rng.gen_range(0.0..width.max(1.0)), height),
            velocity: DVec2::new(
                rng.gen_range(-SPARKLE_DRIFT_MAX..SPARKLE_DRIFT_MAX),
                -rng.gen_range(SPARKLE_RISE_MIN..SPARKLE_RISE_MAX),
            ),
            size: rng.gen_range(SPARKLE_SIZE_MIN..SPARKLE_SIZE_MAX),
            rotation: rng.gen_range(0.0..TAU),
            spin: rng.gen_range(SPARKLE_SPIN_MIN..SPARKLE_SPIN_MAX),
            life: 0.0,
            max_life: rng.gen_range(SPARKLE_LIFE_MIN..SPARKLE_LIFE_MAX),
            max_opacity: rng.gen_range(SPARKLE_OPACITY_MIN..SPARKLE_OPACITY_MAX),
            opacity: 0.0,
            twinkle_speed: rng.gen_range(SPARKLE_TWINKLE_SPEED_MIN..SPARKLE_TWINKLE_SPEED_MAX),
            phase: rng.gen_range(0.0..TAU),
            color: random_color(rng),
        }
    }

    /// Spawn scattered over the surface with a random partial life, so an
    /// initial population doesn't rise as a single curtain.
    pub fn spawn_scattered(rng: &mut StdRng, width: f64, height: f64) -> Self {
        let mut s = Self::spawn(rng, width, height);
        s.position = random_point(rng, width, height);
        s.life = rng.gen_range(0.0..s.max_life * 0.5);
        s
    }

    fn envelope(&self) -> f64 {
        if self.life < SPARKLE_FADE_IN_FRAMES {
            self.max_opacity * self.life / SPARKLE_FADE_IN_FRAMES
        } else {
            let remaining = self.max_life - self.life;
            if remaining < SPARKLE_FADE_OUT_FRAMES {
                (self.max_opacity * remaining / SPARKLE_FADE_OUT_FRAMES).max(0.0)
            } else {
                self.max_opacity
            }
        }
    }

    pub fn update(&mut self, time: f64, width: f64, height: f64, rng: &mut StdRng) {
        self.life += 1.0;
        self.position += self.velocity;
        self.rotation += self.spin;
        let twinkle =
            SPARKLE_TWINKLE_DEPTH * self.max_opacity * (time * self.twinkle_speed + self.phase).sin();
        self.opacity = (self.envelope() + twinkle).clamp(0.0, self.max_opacity);
        // The opacity check only counts once the fade-in window has passed,
        // otherwise every sparkle would recycle on its first frame.
        let expired = self.life >= self.max_life
            || self.position.y < -self.size
            || (self.life > SPARKLE_FADE_IN_FRAMES && self.opacity <= 0.0);
        if expired {
            *self = Self::spawn(rng, width, height);
        }
    }
}

#[derive(Clone, Debug)]
pub struct DustParticle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub wobble_speed: f64,
    pub wobble_amplitude: f64,
    pub base_opacity: f64,
    pub opacity: f64,
    pub twinkle_speed: f64,
    pub phase: f64,
    pub color: [u8; 3],
}

impl DustParticle {
    pub fn spawn(rng: &mut StdRng, width: f64, height: f64) -> Self {
        let base_opacity = rng.gen_range(DUST_OPACITY_MIN..DUST_OPACITY_MAX);
        Self {
            position: random_point(rng, width, height),
            velocity: random_drift(rng, DUST_DRIFT_MAX),
            size: rng.gen_range(DUST_SIZE_MIN..DUST_SIZE_MAX),
            wobble_speed: rng.gen_range(DUST_WOBBLE_SPEED_MIN..DUST_WOBBLE_SPEED_MAX),
            wobble_amplitude: rng.gen_range(DUST_WOBBLE_AMP_MIN..DUST_WOBBLE_AMP_MAX),
            base_opacity,
            opacity: base_opacity,
            twinkle_speed: rng.gen_range(DUST_TWINKLE_SPEED_MIN..DUST_TWINKLE_SPEED_MAX),
            phase: rng.gen_range(0.0..TAU),
            color: random_color(rng),
        }
    }

    pub fn update(&mut self, time: f64, width: f64, height: f64) {
        let wobble = time * self.wobble_speed + self.phase;
        self.position.x += self.velocity.x + wobble.sin() * self.wobble_amplitude;
        self.position.y += self.velocity.y + wobble.cos() * self.wobble_amplitude;
        self.position.x = wrap(self.position.x, width);
        self.position.y = wrap(self.position.y, height);
        let twinkle = DUST_TWINKLE_DEPTH * (time * self.twinkle_speed + self.phase).sin();
        self.opacity = (self.base_opacity + twinkle).clamp(0.0, 1.0);
    }
}

/// Gradient-filled band of light near the bottom of the surface. Stateless
/// between frames; the renderer samples [`LightWave::y_at`] across the width.
#[derive(Clone, Debug)]
pub struct LightWave {
    pub baseline: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    pub opacity: f64,
    pub phase: f64,
    pub color: [u8; 3],
}

impl LightWave {
    pub fn spawn(rng: &mut StdRng, baseline: f64) -> Self {
        Self {
            baseline,
            amplitude: rng.gen_range(WAVE_AMP_MIN..WAVE_AMP_MAX),
            frequency: rng.gen_range(WAVE_FREQ_MIN..WAVE_FREQ_MAX),
            speed: rng.gen_range(WAVE_SPEED_MIN..WAVE_SPEED_MAX),
            opacity: rng.gen_range(WAVE_OPACITY_MIN..WAVE_OPACITY_MAX),
            phase: rng.gen_range(0.0..TAU),
            color: random_color(rng),
        }
    }

    pub fn y_at(&self, x: f64, time: f64) -> f64 {
        self.baseline
            + self.amplitude * (x * self.frequency + time * self.speed + self.phase).sin()
            + (self.amplitude / 2.0) * (x * self.frequency / 2.0 + time * self.speed * 0.7).sin()
    }
}

/// All mutable animation state: the frame counter, the surface bounds, and
/// the particle collections. Created empty; [`AnimationState::populate`]
/// fills it, and a viewport resize rebuilds it from scratch.
pub struct AnimationState {
    pub time: f64,
    pub width: f64,
    pub height: f64,
    pub bokeh: Vec<BokehCircle>,
    pub glitter: Vec<GlitterParticle>,
    pub sparkles: Vec<Sparkle>,
    pub dust: Vec<DustParticle>,
    pub waves: Vec<LightWave>,
    rng: StdRng,
}

impl AnimationState {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self {
            time: 0.0,
            width,
            height,
            bokeh: Vec::new(),
            glitter: Vec::new(),
            sparkles: Vec::new(),
            dust: Vec::new(),
            waves: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Rebuild every collection for the current bounds. Counts scale with
    /// surface width and are capped per kind; waves are always four, at
    /// fixed fractions of the surface height.
    pub fn populate(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;

        let n = count_for_width(w, BOKEH_WIDTH_DIVISOR, BOKEH_MAX_COUNT);
        self.bokeh = (0..n).map(|_| BokehCircle::spawn(rng, w, h)).collect();

        let n = count_for_width(w, GLITTER_WIDTH_DIVISOR, GLITTER_MAX_COUNT);
        self.glitter = (0..n).map(|_| GlitterParticle::spawn(rng, w, h)).collect();

        let n = count_for_width(w, SPARKLE_WIDTH_DIVISOR, SPARKLE_MAX_COUNT);
        self.sparkles = (0..n).map(|_| Sparkle::spawn_scattered(rng, w, h)).collect();

        let n = count_for_width(w, DUST_WIDTH_DIVISOR, DUST_MAX_COUNT);
        self.dust = (0..n).map(|_| DustParticle::spawn(rng, w, h)).collect();

        self.waves = WAVE_BASELINES
            .iter()
            .map(|f| LightWave::spawn(rng, f * h))
            .collect();
    }

    /// New bounds, fresh particles. Old particles are discarded.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Page grew under the canvas (scroll-settle re-measure). Bounds only
    /// ever grow here; existing particles keep flying.
    pub fn grow_height(&mut self, height: f64) {
        if height > self.height {
            self.height = height;
        }
    }

    /// Advance one frame: bump the counter, then update every particle.
    /// Waves carry no per-frame state.
    pub fn step(&mut self) {
        self.time += 1.0;
        let t = self.time;
        let (w, h) = (self.width, self.height);
        for p in &mut self.bokeh {
            p.update(t, w, h);
        }
        for p in &mut self.glitter {
            p.update(t, w, h);
        }
        for p in &mut self.sparkles {
            p.update(t, w, h, &mut self.rng);
        }
        for p in &mut self.dust {
            p.update(t, w, h);
        }
    }
}

fn count_for_width(width: f64, divisor: f64, cap: usize) -> usize {
    ((width / divisor) as usize).min(cap)
}

fn random_point(rng: &mut StdRng, width: f64, height: f64) -> DVec2 {
    DVec2::new(
        rng.gen_range(0.0..width.max(1.0)),
        rng.gen_range(0.0..height.max(1.0)),
    )
}

fn random_drift(rng: &mut StdRng, max: f64) -> DVec2 {
    DVec2::new(rng.gen_range(-max..max), rng.gen_range(-max..max))
}

fn random_color(rng: &mut StdRng) -> [u8; 3] {
    *PALETTE.choose(rng).unwrap_or(&PALETTE[0])
}

// Modular wrap into [0, max); keeps teleporting kinds inside the surface.
// rem_euclid can round up to `max` for tiny negative inputs, so re-check.
fn wrap(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(max);
    if wrapped < max {
        wrapped
    } else {
        0.0
    }
}
