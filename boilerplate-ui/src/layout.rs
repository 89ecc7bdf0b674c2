//! Helpers shared by every page: sidenav, list filtering, visibility swap

use std::cell::{Cell, RefCell};

use boilerplate_common::filter::{RowFilter, HEADER_ROWS};
use boilerplate_common::VisibilityState;
use leptos::{document, logging, window};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Node};

use crate::dom;
use crate::error::UiResult;
use crate::ids;

thread_local! {
    static SIDENAV_LISTENING: Cell<bool> = const { Cell::new(false) };
    static PAGE_VISIBILITY: RefCell<VisibilityToggle> = RefCell::new(VisibilityToggle::new());
}

/// Close the open sidenav when a click or touch lands outside of it.
///
/// Installing twice is a no-op.
pub(crate) fn install_sidenav_dismissal() -> UiResult<()> {
    if SIDENAV_LISTENING.with(|listening| listening.replace(true)) {
        return Ok(());
    }

    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Err(err) = dismiss_sidenav(&event) {
            logging::error!("sidenav dismissal failed: {}", err);
        }
    });

    let document = document();
    document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback("touchstart", handler.as_ref().unchecked_ref())?;
    handler.forget();

    Ok(())
}

fn dismiss_sidenav(event: &Event) -> UiResult<()> {
    if window().location().hash()? != ids::SIDENAV_OPEN_HASH {
        return Ok(());
    }

    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
    let inside_nav = match document().query_selector(ids::NAV_SELECTOR)? {
        Some(nav) => nav.contains(target.as_ref()),
        None => false,
    };

    // Go through the close control so anything bound to it runs as well
    if !inside_nav {
        dom::typed::<HtmlElement>(ids::SIDENAV_CLOSE)?.click();
    }

    Ok(())
}

/// Hide the rows of `parent_id` whose text does not contain `word`.
/// The first row is treated as the header and left alone.
#[wasm_bindgen]
pub fn filter(parent_id: &str, filter_item: &str, word: &str) -> UiResult<()> {
    let table = dom::element(parent_id)?;
    let collection = table.get_elements_by_tag_name(filter_item);
    let rows: Vec<HtmlElement> = (0..collection.length())
        .filter_map(|index| collection.item(index))
        .filter_map(|row| row.dyn_into::<HtmlElement>().ok())
        .collect();

    let texts: Vec<String> = rows
        .iter()
        .map(|row| row.text_content().unwrap_or_default())
        .collect();
    let visible = RowFilter::new(word).visible_rows(texts.iter().map(String::as_str));

    for (row, visible) in rows.iter().skip(HEADER_ROWS).zip(visible) {
        dom::set_display(row, if visible { "" } else { "none" })?;
    }

    Ok(())
}

/// Swaps `.initial-shown` and `.initial-hidden` elements
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct VisibilityToggle {
    state: VisibilityState,
}

#[wasm_bindgen]
impl VisibilityToggle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the initially hidden elements are the visible ones
    #[wasm_bindgen(getter)]
    pub fn swapped(&self) -> bool {
        self.state == VisibilityState::Swapped
    }

    pub fn toggle(&mut self) -> UiResult<()> {
        let next = self.state.toggled();
        apply_visibility(next)?;
        self.state = next;
        Ok(())
    }
}

fn apply_visibility(state: VisibilityState) -> UiResult<()> {
    for el in dom::query_all::<Element>(ids::INITIAL_SHOWN_SELECTOR)? {
        dom::set_hidden(&el, state.hides_initial_shown())?;
    }
    for el in dom::query_all::<Element>(ids::INITIAL_HIDDEN_SELECTOR)? {
        dom::set_hidden(&el, state.hides_initial_hidden())?;
    }
    Ok(())
}

/// Page-wide toggle used from inline `onclick` handlers
#[wasm_bindgen(js_name = toggleInitialVisibility)]
pub fn toggle_initial_visibility() -> UiResult<()> {
    PAGE_VISIBILITY.with(|toggle| toggle.borrow_mut().toggle())
}

/// Older templates call the misspelled name
#[wasm_bindgen(js_name = toggleInitialVisability)]
pub fn toggle_initial_visability() -> UiResult<()> {
    toggle_initial_visibility()
}
