//! Contact form glue: read the named inputs, run the pure validation, and
//! on success hand off to the visitor's mail client via a `mailto:` URI.

use crate::constants::FORM_RESET_MS;
use crate::core::contact::{self, Enquiry, Field, CONTACT_EMAIL};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_contact_form(document: &web::Document) {
    let Some(form_el) = document.get_element_by_id("contactForm") else {
        return;
    };
    let Ok(form) = form_el.dyn_into::<web::HtmlFormElement>() else {
        return;
    };
    let doc = document.clone();
    let form_for_submit = form.clone();
    dom::on_event(form.as_ref(), "submit", move |ev| {
        ev.prevent_default();
        clear_errors(&doc);
        let enquiry = read_enquiry(&doc);
        let errors = contact::validate(&enquiry);
        if errors.is_empty() {
            submit(&doc, &form_for_submit, &enquiry);
        } else {
            for (field, message) in errors {
                show_error(&doc, error_element_id(field), message);
            }
        }
    });
}

fn read_enquiry(document: &web::Document) -> Enquiry {
    Enquiry {
        name: field_value(document, "name").trim().to_string(),
        email: field_value(document, "email").trim().to_string(),
        phone: field_value(document, "phone").trim().to_string(),
        date: field_value(document, "date"),
        location: field_value(document, "location").trim().to_string(),
        message: field_value(document, "message").trim().to_string(),
    }
}

// The message field is a textarea; everything else is an input.
fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn error_element_id(field: Field) -> &'static str {
    match field {
        Field::Name => "nameError",
        Field::Email => "emailError",
        Field::Phone => "phoneError",
        Field::Message => "messageError",
    }
}

fn show_error(document: &web::Document, id: &str, message: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(message));
    }
}

fn clear_errors(document: &web::Document) {
    if let Ok(list) = document.query_selector_all(".error-message") {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                node.set_text_content(Some(""));
            }
        }
    }
    hide_status(document);
}

fn submit(document: &web::Document, form: &web::HtmlFormElement, enquiry: &Enquiry) {
    let subject = String::from(js_sys::encode_uri_component(&contact::mailto_subject(
        enquiry,
    )));
    let body = String::from(js_sys::encode_uri_component(&contact::mailto_body(enquiry)));
    let mailto = format!("mailto:{CONTACT_EMAIL}?subject={subject}&body={body}");
    if let Some(window) = web::window() {
        if window.location().set_href(&mailto).is_ok() {
            log::info!("[form] opening mail client");
        }
    }
    show_status(
        document,
        "success",
        &format!(
            "Opening your email client... If it doesn't open, please email us directly at {CONTACT_EMAIL}"
        ),
    );
    let doc = document.clone();
    let form = form.clone();
    let _ = dom::set_timeout(FORM_RESET_MS, move || {
        form.reset();
        hide_status(&doc);
    });
}

fn show_status(document: &web::Document, kind: &str, message: &str) {
    let Some(el) = document.get_element_by_id("formStatus") else {
        return;
    };
    el.set_text_content(Some(message));
    let cl = el.class_list();
    let _ = cl.remove_2("success", "error");
    let _ = cl.add_1(kind);
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        let _ = h.style().set_property("display", "block");
    }
}

fn hide_status(document: &web::Document) {
    let Some(el) = document.get_element_by_id("formStatus") else {
        return;
    };
    let _ = el.class_list().remove_2("success", "error");
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        let _ = h.style().set_property("display", "none");
    }
}
