//! Canvas2D renderer for the background animation.
//!
//! Draw order is a contract: light waves, bokeh, dust, glitter, sparkles —
//! back to front, so later kinds occlude earlier ones. Drawing only reads
//! particle state; every numeric update has already happened in
//! [`crate::core::particles::AnimationState::step`].

use crate::core::constants::WAVE_SAMPLE_STEP_PX;
use crate::core::particles::{
    AnimationState, BokehCircle, DustParticle, GlitterParticle, LightWave, Sparkle,
};
use std::f64::consts::TAU;
use web_sys as web;

pub fn draw_frame(ctx: &web::CanvasRenderingContext2d, state: &AnimationState) {
    ctx.clear_rect(0.0, 0.0, state.width, state.height);
    for wave in &state.waves {
        draw_wave(ctx, wave, state.time, state.width, state.height);
    }
    for p in &state.bokeh {
        draw_bokeh(ctx, p);
    }
    for p in &state.dust {
        draw_dust(ctx, p);
    }
    for p in &state.glitter {
        draw_glitter(ctx, p);
    }
    for p in &state.sparkles {
        draw_sparkle(ctx, p);
    }
}

fn draw_wave(
    ctx: &web::CanvasRenderingContext2d,
    wave: &LightWave,
    time: f64,
    width: f64,
    height: f64,
) {
    let gradient = ctx.create_linear_gradient(0.0, wave.baseline, 0.0, height);
    let _ = gradient.add_color_stop(0.0, &rgba(wave.color, wave.opacity));
    let _ = gradient.add_color_stop(1.0, &rgba(wave.color, 0.0));
    ctx.set_fill_style_canvas_gradient(&gradient);

    ctx.begin_path();
    ctx.move_to(0.0, wave.y_at(0.0, time));
    let mut x = WAVE_SAMPLE_STEP_PX;
    while x <= width {
        ctx.line_to(x, wave.y_at(x, time));
        x += WAVE_SAMPLE_STEP_PX;
    }
    ctx.line_to(width, wave.y_at(width, time));
    ctx.line_to(width, height);
    ctx.line_to(0.0, height);
    ctx.close_path();
    ctx.fill();
}

// Soft low-opacity disk: a radial gradient fading out toward the rim.
fn draw_bokeh(ctx: &web::CanvasRenderingContext2d, p: &BokehCircle) {
    let r = p.radius.max(1.0);
    let (x, y) = (p.position.x, p.position.y);
    let gradient = match ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
        Ok(g) => g,
        Err(_) => return,
    };
    let _ = gradient.add_color_stop(0.0, &rgba(p.color, p.opacity));
    let _ = gradient.add_color_stop(0.6, &rgba(p.color, p.opacity * 0.5));
    let _ = gradient.add_color_stop(1.0, &rgba(p.color, 0.0));
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    let _ = ctx.arc(x, y, r, 0.0, TAU);
    ctx.fill();
}

fn draw_dust(ctx: &web::CanvasRenderingContext2d, p: &DustParticle) {
    ctx.set_fill_style_str(&rgba(p.color, p.opacity));
    ctx.begin_path();
    let _ = ctx.arc(p.position.x, p.position.y, p.size, 0.0, TAU);
    ctx.fill();
}

// Rotated diamond
fn draw_glitter(ctx: &web::CanvasRenderingContext2d, p: &GlitterParticle) {
    ctx.save();
    let _ = ctx.translate(p.position.x, p.position.y);
    let _ = ctx.rotate(p.rotation);
    ctx.set_fill_style_str(&rgba(p.color, p.opacity));
    ctx.begin_path();
    ctx.move_to(0.0, -p.size);
    ctx.line_to(p.size * 0.6, 0.0);
    ctx.line_to(0.0, p.size);
    ctx.line_to(-p.size * 0.6, 0.0);
    ctx.close_path();
    ctx.fill();
    ctx.restore();
}

// Rotated four-point cross
fn draw_sparkle(ctx: &web::CanvasRenderingContext2d, p: &Sparkle) {
    ctx.save();
    let _ = ctx.translate(p.position.x, p.position.y);
    let _ = ctx.rotate(p.rotation);
    ctx.set_stroke_style_str(&rgba(p.color, p.opacity));
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(-p.size, 0.0);
    ctx.line_to(p.size, 0.0);
    ctx.move_to(0.0, -p.size);
    ctx.line_to(0.0, p.size);
    ctx.stroke();
    ctx.restore();
}

fn rgba(color: [u8; 3], alpha: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color[0],
        color[1],
        color[2],
        alpha.clamp(0.0, 1.0)
    )
}
