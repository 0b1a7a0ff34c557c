// Tuning constants for the ambient background animation.
// Counts scale with surface width, capped so large screens stay cheap.

// Shared palette: gold, white, warm
pub const PALETTE: [[u8; 3]; 3] = [[212, 175, 55], [255, 255, 255], [180, 150, 100]];

// Bokeh circles
pub const BOKEH_WIDTH_DIVISOR: f64 = 160.0;
pub const BOKEH_MAX_COUNT: usize = 12;
pub const BOKEH_RADIUS_MIN: f64 = 40.0;
pub const BOKEH_RADIUS_MAX: f64 = 100.0;
pub const BOKEH_PULSE_AMP_MIN: f64 = 4.0;
pub const BOKEH_PULSE_AMP_MAX: f64 = 14.0;
pub const BOKEH_PULSE_SPEED_MIN: f64 = 0.005;
pub const BOKEH_PULSE_SPEED_MAX: f64 = 0.02;
pub const BOKEH_DRIFT_MAX: f64 = 0.2; // px/frame per axis
pub const BOKEH_OPACITY_MIN: f64 = 0.04;
pub const BOKEH_OPACITY_MAX: f64 = 0.12;

// Glitter
pub const GLITTER_WIDTH_DIVISOR: f64 = 18.0;
pub const GLITTER_MAX_COUNT: usize = 80;
pub const GLITTER_SIZE_MIN: f64 = 1.0;
pub const GLITTER_SIZE_MAX: f64 = 3.0;
pub const GLITTER_DRIFT_MAX: f64 = 0.25;
pub const GLITTER_OPACITY_MIN: f64 = 0.3;
pub const GLITTER_OPACITY_MAX: f64 = 0.8;
pub const GLITTER_TWINKLE_SPEED_MIN: f64 = 0.02;
pub const GLITTER_TWINKLE_SPEED_MAX: f64 = 0.08;
pub const GLITTER_SPIN_MIN: f64 = 0.005;
pub const GLITTER_SPIN_MAX: f64 = 0.02;

// Sparkles
pub const SPARKLE_WIDTH_DIVISOR: f64 = 30.0;
pub const SPARKLE_MAX_COUNT: usize = 50;
pub const SPARKLE_SIZE_MIN: f64 = 1.0;
pub const SPARKLE_SIZE_MAX: f64 = 2.5;
pub const SPARKLE_RISE_MIN: f64 = 0.2; // px/frame upward
pub const SPARKLE_RISE_MAX: f64 = 0.8;
pub const SPARKLE_DRIFT_MAX: f64 = 0.15;
pub const SPARKLE_LIFE_MIN: f64 = 240.0; // frames
pub const SPARKLE_LIFE_MAX: f64 = 480.0;
pub const SPARKLE_FADE_IN_FRAMES: f64 = 60.0;
pub const SPARKLE_FADE_OUT_FRAMES: f64 = 80.0;
pub const SPARKLE_OPACITY_MIN: f64 = 0.4;
pub const SPARKLE_OPACITY_MAX: f64 = 0.9;
pub const SPARKLE_TWINKLE_SPEED_MIN: f64 = 0.05;
pub const SPARKLE_TWINKLE_SPEED_MAX: f64 = 0.15;
pub const SPARKLE_TWINKLE_DEPTH: f64 = 0.15; // fraction of max opacity
pub const SPARKLE_SPIN_MIN: f64 = 0.002;
pub const SPARKLE_SPIN_MAX: f64 = 0.01;

// Dust
pub const DUST_WIDTH_DIVISOR: f64 = 24.0;
pub const DUST_MAX_COUNT: usize = 60;
pub const DUST_SIZE_MIN: f64 = 0.4;
pub const DUST_SIZE_MAX: f64 = 1.4;
pub const DUST_DRIFT_MAX: f64 = 0.12;
pub const DUST_WOBBLE_SPEED_MIN: f64 = 0.01;
pub const DUST_WOBBLE_SPEED_MAX: f64 = 0.05;
pub const DUST_WOBBLE_AMP_MIN: f64 = 0.2;
pub const DUST_WOBBLE_AMP_MAX: f64 = 0.5;
pub const DUST_OPACITY_MIN: f64 = 0.08;
pub const DUST_OPACITY_MAX: f64 = 0.28;
pub const DUST_TWINKLE_DEPTH: f64 = 0.08;
pub const DUST_TWINKLE_SPEED_MIN: f64 = 0.02;
pub const DUST_TWINKLE_SPEED_MAX: f64 = 0.06;

// Light waves near the bottom of the surface
pub const WAVE_BASELINES: [f64; 4] = [0.6, 0.7, 0.8, 0.9]; // fractions of height
pub const WAVE_AMP_MIN: f64 = 10.0;
pub const WAVE_AMP_MAX: f64 = 28.0;
pub const WAVE_FREQ_MIN: f64 = 0.002;
pub const WAVE_FREQ_MAX: f64 = 0.006;
pub const WAVE_SPEED_MIN: f64 = 0.005;
pub const WAVE_SPEED_MAX: f64 = 0.02;
pub const WAVE_OPACITY_MIN: f64 = 0.02;
pub const WAVE_OPACITY_MAX: f64 = 0.06;
pub const WAVE_SAMPLE_STEP_PX: f64 = 6.0;
