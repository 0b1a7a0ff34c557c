#![cfg(target_arch = "wasm32")]
use crate::core::particles::AnimationState;
use crate::frame::{FrameContext, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod form;
mod frame;
mod nav;
mod overlay;
mod render;
mod slideshow;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("studio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// Every feature hangs off an optional piece of markup; pages that lack a
// collaborator simply don't get that feature.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    wire_background_animation(&document)?;

    if let Some((lightbox, modal)) = events::gallery::wire_gallery(&document) {
        if let Some(modal) = modal {
            events::keyboard::wire_global_keydown(lightbox, modal);
        }
    }

    nav::wire_nav(&document);
    nav::wire_header_scroll(&document);
    nav::wire_reveal_on_scroll(&document);
    nav::set_footer_year(&document);
    nav::wire_smooth_anchors(&document);
    form::wire_contact_form(&document);
    slideshow::wire_slideshow(&document);

    Ok(())
}

/// Background canvas: sized to the full scrollable page, populated and
/// animated only when the user has not asked for reduced motion.
fn wire_background_animation(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id("bg-canvas") else {
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w, h) = dom::size_canvas_to_page(&canvas);
    let reduced_motion = dom::prefers_reduced_motion();
    let mut state = AnimationState::new(w, h, js_sys::Date::now() as u64);
    if reduced_motion {
        log::info!("[anim] reduced motion: canvas stays blank");
    } else {
        state.populate();
        log::info!(
            "[anim] {} bokeh / {} glitter / {} sparkles / {} dust / {} waves",
            state.bokeh.len(),
            state.glitter.len(),
            state.sparkles.len(),
            state.dust.len(),
            state.waves.len()
        );
    }

    let frame_ctx = Rc::new(RefCell::new(FrameContext { state, canvas, ctx }));
    frame::wire_resize(frame_ctx.clone(), reduced_motion);
    frame::wire_scroll_growth(frame_ctx.clone());
    if !reduced_motion {
        let frame_loop = Rc::new(FrameLoop::new(frame_ctx));
        frame_loop.start();
        frame::wire_visibility(frame_loop);
    }
    Ok(())
}
