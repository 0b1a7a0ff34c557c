//! Navigation and page polish: mobile menu, header scroll state,
//! reveal-on-scroll, footer year, smooth same-page anchors. Each piece
//! attaches only when its markup exists.

use crate::constants::{HEADER_SCROLL_THRESHOLD, REVEAL_MARGIN_PX, REVEAL_VIEWPORT_FRACTION};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_nav(document: &web::Document) {
    let Some(nav_toggle) = document.query_selector(".nav-toggle").ok().flatten() else {
        return;
    };
    let Some(main_nav) = document.query_selector(".main-nav").ok().flatten() else {
        return;
    };

    {
        let nav = main_nav.clone();
        let doc = document.clone();
        dom::on_click(nav_toggle.as_ref(), move |_| {
            let open = nav.class_list().toggle("open").unwrap_or(false);
            set_menu_text(&doc, if open { "CLOSE" } else { "MENU" });
        });
    }

    if let Ok(Some(close_area)) = document.query_selector(".nav-close-area") {
        let nav = main_nav.clone();
        let doc = document.clone();
        dom::on_click(close_area.as_ref(), move |_| close_nav(&nav, &doc));
    }

    // Following a nav link also closes the menu.
    if let Ok(links) = main_nav.query_selector_all("a") {
        for i in 0..links.length() {
            let Some(node) = links.item(i) else { continue };
            let Ok(link) = node.dyn_into::<web::Element>() else {
                continue;
            };
            let nav = main_nav.clone();
            let doc = document.clone();
            dom::on_click(link.as_ref(), move |_| close_nav(&nav, &doc));
        }
    }
}

fn close_nav(nav: &web::Element, document: &web::Document) {
    let _ = nav.class_list().remove_1("open");
    set_menu_text(document, "MENU");
}

fn set_menu_text(document: &web::Document, text: &str) {
    if let Ok(Some(el)) = document.query_selector(".menu-text") {
        el.set_text_content(Some(text));
    }
}

pub fn wire_header_scroll(document: &web::Document) {
    let Some(header) = document.query_selector(".site-header").ok().flatten() else {
        return;
    };
    let Some(window) = web::window() else { return };
    dom::on_event(window.as_ref(), "scroll", move |_| {
        if dom::scroll_y() > HEADER_SCROLL_THRESHOLD {
            let _ = header.class_list().add_1("scrolled");
        } else {
            let _ = header.class_list().remove_1("scrolled");
        }
    });
}

pub fn wire_reveal_on_scroll(document: &web::Document) {
    // Initial pass catches everything already in view on load.
    reveal_in_view(document);
    let Some(window) = web::window() else { return };
    let doc = document.clone();
    dom::on_event(window.as_ref(), "scroll", move |_| reveal_in_view(&doc));
}

fn reveal_in_view(document: &web::Document) {
    let vh = dom::viewport_height();
    for_each_matching(document, ".animate-fadeIn", |el| {
        if el.get_bounding_client_rect().top() < vh - REVEAL_MARGIN_PX {
            let _ = el.class_list().add_1("visible");
        }
    });
    for selector in [".gallery-item", ".video-item"] {
        for_each_matching(document, selector, |el| {
            if el.get_bounding_client_rect().top() < vh * REVEAL_VIEWPORT_FRACTION {
                let _ = el.class_list().add_1("animate");
            }
        });
    }
}

fn for_each_matching(document: &web::Document, selector: &str, mut f: impl FnMut(&web::Element)) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<web::Element>() {
                f(&el);
            }
        }
    }
}

pub fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

pub fn wire_smooth_anchors(document: &web::Document) {
    let Ok(anchors) = document.query_selector_all("a[href^='#']") else {
        return;
    };
    for i in 0..anchors.length() {
        let Some(node) = anchors.item(i) else { continue };
        let Ok(anchor) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let link = anchor.clone();
        let doc = document.clone();
        dom::on_click(anchor.as_ref(), move |ev| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            if let Ok(Some(target)) = doc.query_selector(&href) {
                ev.prevent_default();
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}
