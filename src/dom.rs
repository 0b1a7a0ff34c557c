use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Click listener on a concrete element, with access to the event.
pub fn on_click(target: &web::EventTarget, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listener for an arbitrary event type on any target.
pub fn on_event(
    target: &web::EventTarget,
    event_type: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One-shot timer; the closure is dropped after it fires.
pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(handler);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .ok()
}

pub fn clear_timeout(handle: i32) {
    if let Some(window) = web::window() {
        window.clear_timeout_with_handle(handle);
    }
}

/// Repeating timer; the closure lives for the page.
pub fn set_interval(ms: i32, mut handler: impl FnMut() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok();
    closure.forget();
    id
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Full scrollable page height, never less than the viewport.
pub fn page_height() -> f64 {
    let doc_height = window_document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    doc_height.max(viewport_height())
}

/// Size the background canvas to the viewport width and the full page
/// height, so the animation covers the whole scrollable page.
pub fn size_canvas_to_page(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let w = viewport_width();
    let h = page_height();
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
    (w, h)
}

/// Read once at startup; the preference is not watched for live changes.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Suppress or restore background page scrolling (lightbox open/close).
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = window_document().and_then(|d| d.body()) {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}
