//! Click wiring for the gallery: item clicks open the lightbox at the
//! item's index, like buttons toggle independently (and never bubble into
//! the open handler), and the lightbox chrome navigates or closes.

use crate::constants::HEART_BURST_MS;
use crate::core::lightbox::Lightbox;
use crate::dom;
use crate::overlay::{self, LightboxDom};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire everything gallery-related. Returns the shared lightbox state and
/// the modal handle (when present) for the keyboard wiring; `None` when the
/// page has no gallery at all.
pub fn wire_gallery(
    document: &web::Document,
) -> Option<(Rc<RefCell<Lightbox>>, Option<Rc<LightboxDom>>)> {
    let items = document.query_selector_all(".gallery-item").ok()?;
    let mut entries: Vec<(web::Element, web::HtmlImageElement)> = Vec::new();
    for i in 0..items.length() {
        let Some(node) = items.item(i) else { continue };
        let Ok(item) = node.dyn_into::<web::Element>() else {
            continue;
        };
        if let Ok(Some(img_el)) = item.query_selector("img") {
            if let Ok(img) = img_el.dyn_into::<web::HtmlImageElement>() {
                entries.push((item, img));
            }
        }
    }
    if entries.is_empty() {
        return None;
    }

    // DOM order of the items defines the index order.
    let images: Vec<String> = entries.iter().map(|(_, img)| img.src()).collect();
    let lightbox = Rc::new(RefCell::new(Lightbox::new(images)));
    let modal = overlay::find(document).map(Rc::new);
    log::info!("[lightbox] {} gallery images", lightbox.borrow().len());

    for (index, (item, _)) in entries.iter().enumerate() {
        let lb = lightbox.clone();
        let modal = modal.clone();
        dom::on_click(item.as_ref(), move |ev| {
            if click_is_on_like_button(&ev) {
                return;
            }
            let Some(modal) = modal.as_ref() else { return };
            let src = lb.borrow_mut().open(index).map(str::to_string);
            if let Some(src) = src {
                overlay::open(modal, &src);
            }
        });
    }

    wire_like_buttons(document);
    if let Some(modal) = &modal {
        wire_lightbox_chrome(lightbox.clone(), modal.clone());
    }
    Some((lightbox, modal))
}

fn click_is_on_like_button(ev: &web::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(".like-btn").ok().flatten())
        .is_some()
}

fn wire_like_buttons(document: &web::Document) {
    let Ok(buttons) = document.query_selector_all(".like-btn") else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(node) = buttons.item(i) else { continue };
        let Ok(btn) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let btn_for_click = btn.clone();
        dom::on_click(btn.as_ref(), move |ev| {
            ev.stop_propagation();
            let liked = btn_for_click
                .class_list()
                .toggle("liked")
                .unwrap_or(false);
            // Burst only on the transition to liked.
            if liked {
                spawn_heart_burst(&btn_for_click);
            }
        });
    }
}

fn spawn_heart_burst(button: &web::Element) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Ok(burst) = document.create_element("div") else {
        return;
    };
    burst.set_class_name("heart-burst");
    burst.set_inner_html("\u{2764}\u{fe0f}");
    let _ = button.append_child(&burst);
    let _ = dom::set_timeout(HEART_BURST_MS, move || burst.remove());
}

fn wire_lightbox_chrome(lightbox: Rc<RefCell<Lightbox>>, modal: Rc<LightboxDom>) {
    if let Some(btn) = &modal.close_btn {
        let lb = lightbox.clone();
        let m = modal.clone();
        dom::on_click(btn.as_ref(), move |_| close_lightbox(&lb, &m));
    }
    if let Some(btn) = &modal.next_btn {
        let lb = lightbox.clone();
        let m = modal.clone();
        dom::on_click(btn.as_ref(), move |ev| {
            ev.stop_propagation();
            navigate_next(&lb, &m);
        });
    }
    if let Some(btn) = &modal.prev_btn {
        let lb = lightbox.clone();
        let m = modal.clone();
        dom::on_click(btn.as_ref(), move |ev| {
            ev.stop_propagation();
            navigate_prev(&lb, &m);
        });
    }
    // Clicking the dimmed background (not the image) closes.
    {
        let lb = lightbox.clone();
        let m = modal.clone();
        let root = modal.root.clone();
        dom::on_click(modal.root.as_ref(), move |ev| {
            let Some(target) = ev.target() else { return };
            let Ok(el) = target.dyn_into::<web::Element>() else {
                return;
            };
            if root.is_same_node(Some(el.as_ref())) {
                close_lightbox(&lb, &m);
            }
        });
    }
}

pub fn close_lightbox(lightbox: &Rc<RefCell<Lightbox>>, modal: &LightboxDom) {
    lightbox.borrow_mut().close();
    overlay::close(modal);
}

pub fn navigate_next(lightbox: &Rc<RefCell<Lightbox>>, modal: &LightboxDom) {
    let src = lightbox.borrow_mut().next().map(str::to_string);
    if let Some(src) = src {
        overlay::swap_image(modal, &src);
    }
}

pub fn navigate_prev(lightbox: &Rc<RefCell<Lightbox>>, modal: &LightboxDom) {
    let src = lightbox.borrow_mut().prev().map(str::to_string);
    if let Some(src) = src {
        overlay::swap_image(modal, &src);
    }
}
