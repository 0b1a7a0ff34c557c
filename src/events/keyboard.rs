use crate::core::lightbox::Lightbox;
use crate::overlay::LightboxDom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keyboard control is lightbox-only: ignored entirely while closed.
pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    lightbox: &Rc<RefCell<Lightbox>>,
    dom: &LightboxDom,
) {
    if !lightbox.borrow().is_open() {
        return;
    }
    match ev.key().as_str() {
        "Escape" => super::gallery::close_lightbox(lightbox, dom),
        "ArrowRight" => super::gallery::navigate_next(lightbox, dom),
        "ArrowLeft" => super::gallery::navigate_prev(lightbox, dom),
        _ => {}
    }
}

pub fn wire_global_keydown(lightbox: Rc<RefCell<Lightbox>>, dom: Rc<LightboxDom>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &lightbox, &dom);
            }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
