use leptos::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::dom;

mod login;
mod roles;

/// Replace the test page body with `html`
fn mount(html: &str) {
    document()
        .body()
        .expect("test page has a body")
        .set_inner_html(html);
}

fn checkbox(id: &str) -> HtmlInputElement {
    dom::input(id).unwrap()
}

fn display_of(id: &str) -> String {
    dom::element(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn has_class(id: &str, class: &str) -> bool {
    dom::element(id).unwrap().class_list().contains(class)
}
