//! DOM handle for the lightbox modal. State lives in
//! [`crate::core::lightbox::Lightbox`]; this module only reflects it into
//! the markup (`active` class, displayed image, scroll lock).

use crate::constants::LIGHTBOX_FADE_MS;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct LightboxDom {
    pub root: web::Element,
    pub image: web::HtmlImageElement,
    pub close_btn: Option<web::Element>,
    pub prev_btn: Option<web::Element>,
    pub next_btn: Option<web::Element>,
}

/// Locate the lightbox markup. `None` (no modal on this page) leaves the
/// whole feature inactive.
pub fn find(document: &web::Document) -> Option<LightboxDom> {
    let root = document.get_element_by_id("lightbox")?;
    let image = root
        .query_selector(".lightbox-image")
        .ok()??
        .dyn_into::<web::HtmlImageElement>()
        .ok()?;
    // Matches the fade used by swap_image.
    let _ = image.style().set_property(
        "transition",
        &format!("opacity {}ms ease", LIGHTBOX_FADE_MS),
    );
    let close_btn = root.query_selector(".lightbox-close").ok().flatten();
    let prev_btn = root.query_selector(".lightbox-prev").ok().flatten();
    let next_btn = root.query_selector(".lightbox-next").ok().flatten();
    Some(LightboxDom {
        root,
        image,
        close_btn,
        prev_btn,
        next_btn,
    })
}

pub fn open(dom: &LightboxDom, src: &str) {
    dom.image.set_src(src);
    let _ = dom.image.style().set_property("opacity", "1");
    let _ = dom.root.class_list().add_1("active");
    dom::set_body_scroll_locked(true);
}

pub fn close(dom: &LightboxDom) {
    let _ = dom.root.class_list().remove_1("active");
    dom::set_body_scroll_locked(false);
}

/// Brief fade-out, swap the source, fade back in.
pub fn swap_image(dom: &LightboxDom, src: &str) {
    let _ = dom.image.style().set_property("opacity", "0");
    let image = dom.image.clone();
    let src = src.to_string();
    let _ = dom::set_timeout(LIGHTBOX_FADE_MS, move || {
        image.set_src(&src);
        let _ = image.style().set_property("opacity", "1");
    });
}
