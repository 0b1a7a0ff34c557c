use crate::constants::SCROLL_SETTLE_MS;
use crate::core::particles::AnimationState;
use crate::dom;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: AnimationState,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    /// One animation tick: update every particle, then redraw. Update and
    /// draw are strictly ordered within a tick.
    pub fn frame(&mut self) {
        self.state.step();
        render::draw_frame(&self.ctx, &self.state);
    }
}

/// requestAnimationFrame loop with a stored cancellation token. The pending
/// raf id doubles as the "running" flag: `start` is a no-op while a frame is
/// scheduled, and `stop` is safe to call twice.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let raf_for_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_ctx.borrow_mut().frame();
            raf_for_tick.set(None);
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    raf_for_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));
        Self { tick, raf_id }
    }

    pub fn start(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                self.tick
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                self.raf_id.set(Some(id));
            }
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Viewport resize: re-size the canvas and rebuild the particle field.
/// Under reduced motion only the canvas is resized; nothing is populated.
pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>, reduced_motion: bool) {
    let closure = Closure::wrap(Box::new(move || {
        let mut fc = frame_ctx.borrow_mut();
        let (w, h) = dom::size_canvas_to_page(&fc.canvas);
        if reduced_motion {
            fc.state.width = w;
            fc.state.height = h;
        } else {
            fc.state.resize(w, h);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Pause the loop while the page is hidden; resume (without repopulating)
/// when it becomes visible again.
pub fn wire_visibility(frame_loop: Rc<FrameLoop>) {
    if let Some(document) = dom::window_document() {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            if doc.hidden() {
                frame_loop.stop();
            } else {
                frame_loop.start();
            }
        }) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// After scroll settles, re-measure the document and grow the canvas if the
/// page got taller (dynamic content). The surface never shrinks here.
pub fn wire_scroll_growth(frame_ctx: Rc<RefCell<FrameContext>>) {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let closure = Closure::wrap(Box::new(move || {
        if let Some(id) = pending.take() {
            dom::clear_timeout(id);
        }
        let fc = frame_ctx.clone();
        let pending_done = pending.clone();
        let id = dom::set_timeout(SCROLL_SETTLE_MS, move || {
            pending_done.set(None);
            let mut fc = fc.borrow_mut();
            let h = dom::page_height();
            if h > fc.state.height {
                fc.canvas.set_height(h as u32);
                fc.state.grow_height(h);
            }
        });
        pending.set(id);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
