//! Small lookup helpers over the page document

use leptos::document;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, NodeList,
};

use crate::error::{UiError, UiResult};
use crate::ids;

/// Element by id, failing when the page does not provide it
pub fn element(id: &str) -> UiResult<Element> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(id.to_string()))
}

/// Element by id, cast to the expected element type
pub fn typed<T: JsCast>(id: &str) -> UiResult<T> {
    element(id)?
        .dyn_into::<T>()
        .map_err(|_| UiError::WrongElementType(id.to_string()))
}

/// Element by id for controls that only some page variants render
pub fn optional<T: JsCast>(id: &str) -> Option<T> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn input(id: &str) -> UiResult<HtmlInputElement> {
    typed::<HtmlInputElement>(id)
}

/// Value of an `<input>` or `<textarea>`
pub fn value(id: &str) -> UiResult<String> {
    let el = element(id)?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Ok(area.value());
    }
    Err(UiError::WrongElementType(id.to_string()))
}

/// Set the value of an `<input>` or `<textarea>`
pub fn set_value(id: &str, value: &str) -> UiResult<()> {
    let el = element(id)?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
        return Ok(());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
        return Ok(());
    }
    Err(UiError::WrongElementType(id.to_string()))
}

pub fn set_text(id: &str, text: &str) -> UiResult<()> {
    element(id)?.set_text_content(Some(text));
    Ok(())
}

/// Form from `document.forms` by name or id
pub fn form(name: &str) -> UiResult<HtmlFormElement> {
    document()
        .forms()
        .named_item(name)
        .ok_or_else(|| UiError::MissingElement(name.to_string()))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| UiError::WrongElementType(name.to_string()))
}

fn collect<T: JsCast>(nodes: NodeList) -> Vec<T> {
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Every element in the document matching `selector` that has type `T`
pub fn query_all<T: JsCast>(selector: &str) -> UiResult<Vec<T>> {
    Ok(collect(document().query_selector_all(selector)?))
}

/// Like [`query_all`], scoped to the descendants of `root`
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> UiResult<Vec<T>> {
    Ok(collect(root.query_selector_all(selector)?))
}

/// Add or remove the Bootstrap `d-none` class
pub fn set_hidden(el: &Element, hidden: bool) -> UiResult<()> {
    set_class(el, ids::HIDDEN_CLASS, hidden)
}

pub fn set_class(el: &Element, class: &str, present: bool) -> UiResult<()> {
    let classes = el.class_list();
    if present {
        classes.add_1(class)?;
    } else {
        classes.remove_1(class)?;
    }
    Ok(())
}

pub fn set_display(el: &HtmlElement, display: &str) -> UiResult<()> {
    el.style().set_property("display", display)?;
    Ok(())
}
