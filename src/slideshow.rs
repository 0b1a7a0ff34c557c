//! About-section slideshow: on a fixed cycle, pick a random photo for the
//! scattered pieces and a distinct random set for the slide stack. The pool
//! is whatever photos the page itself carries (slides plus gallery images).

use crate::constants::{SLIDESHOW_INTERVAL_MS, SLIDESHOW_SLIDE_COUNT};
use crate::dom;
use rand::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_slideshow(document: &web::Document) {
    let Some(container) = document.get_element_by_id("aboutPhotoContainer") else {
        return;
    };

    let mut pool: Vec<String> = Vec::new();
    collect_srcs(document, ".about-photo-slide", &mut pool);
    collect_srcs(document, ".gallery-item img", &mut pool);
    if pool.is_empty() {
        return;
    }
    log::info!("[slideshow] {} photos in rotation", pool.len());

    let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
    rotate(&container, &pool, &mut rng);
    let _ = dom::set_interval(SLIDESHOW_INTERVAL_MS, move || {
        rotate(&container, &pool, &mut rng)
    });
}

fn rotate(container: &web::Element, pool: &[String], rng: &mut StdRng) {
    let Some(scattered) = pool.choose(rng) else { return };

    // The scattered pieces all show crops of one photo.
    if let Ok(pieces) = container.query_selector_all(".photo-piece") {
        for i in 0..pieces.length() {
            let piece = pieces
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok());
            if let Some(piece) = piece {
                let _ = piece
                    .style()
                    .set_property("background-image", &format!("url('{scattered}')"));
            }
        }
    }

    // Distinct slides, never repeating the scattered pick.
    let mut candidates: Vec<&String> = pool.iter().filter(|p| *p != scattered).collect();
    candidates.shuffle(rng);
    candidates.truncate(SLIDESHOW_SLIDE_COUNT);
    if let Ok(slides) = container.query_selector_all(".about-photo-slide") {
        for i in 0..slides.length() {
            let Some(src) = candidates.get(i as usize) else {
                break;
            };
            let slide = slides
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlImageElement>().ok());
            if let Some(slide) = slide {
                slide.set_src(src);
            }
        }
    }
}

fn collect_srcs(document: &web::Document, selector: &str, pool: &mut Vec<String>) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..list.length() {
        let img = list
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlImageElement>().ok());
        if let Some(img) = img {
            let src = img.src();
            if !src.is_empty() && !pool.contains(&src) {
                pool.push(src);
            }
        }
    }
}
