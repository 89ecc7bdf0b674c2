//! Dependent permission checkboxes
//!
//! Checkboxes under `.dependent-checkboxes` declare what they need with
//! `data-requires="view_users, view_roles"`. The page keeps one
//! [`PermissionGraph`] built from those attributes; every click asks the
//! graph what to do and applies the answer to the checkboxes.
//!
//! The graph is built once when the page is ready. Scripts that change
//! `data-requires` at runtime have to call [`refresh_permission_graph`]
//! afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use boilerplate_common::flag_value;
use boilerplate_common::permissions::join_id_list;
use boilerplate_common::{PermissionGraph, Propagation};
use gloo_timers::callback::Timeout;
use leptos::logging;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom;
use crate::error::UiResult;
use crate::ids;

pub(crate) const FLASH_DURATION_MS: u32 = 100;

/// Ancestor levels between a checkbox and the row that gets flashed
const FLASH_CONTAINER_DEPTH: usize = 3;

#[derive(Default)]
struct PermissionBoard {
    graph: PermissionGraph,
    listening: Vec<HtmlInputElement>,
}

thread_local! {
    static BOARD: Rc<RefCell<PermissionBoard>> = Rc::default();
}

fn dependent_checkboxes() -> UiResult<Vec<HtmlInputElement>> {
    dom::query_all::<HtmlInputElement>(ids::DEPENDENT_CHECKBOXES_SELECTOR)
}

/// Dependent checkboxes that can take part in the graph. Without an id a
/// checkbox can neither be required nor looked up, so it is left alone.
fn graph_checkboxes() -> UiResult<Vec<HtmlInputElement>> {
    let (named, anonymous): (Vec<_>, Vec<_>) = dependent_checkboxes()?
        .into_iter()
        .partition(|checkbox| !checkbox.id().is_empty());

    if !anonymous.is_empty() {
        logging::warn!(
            "{} dependent checkbox(es) without an id are ignored",
            anonymous.len()
        );
    }
    Ok(named)
}

fn is_checked(id: &str) -> bool {
    dom::optional::<HtmlInputElement>(id).is_some_and(|checkbox| checkbox.checked())
}

fn build_graph(checkboxes: &[HtmlInputElement]) -> PermissionGraph {
    PermissionGraph::from_attributes(
        checkboxes
            .iter()
            .map(|checkbox| (checkbox.id(), checkbox.get_attribute(ids::DATA_REQUIRES))),
    )
}

/// Write the computed inverse edges back into `data-required-by`
fn mirror_required_by(graph: &PermissionGraph, checkboxes: &[HtmlInputElement]) -> UiResult<()> {
    for checkbox in checkboxes {
        let required_by = graph.required_by(&checkbox.id());
        if required_by.is_empty() {
            checkbox.remove_attribute(ids::DATA_REQUIRED_BY)?;
        } else {
            checkbox.set_attribute(ids::DATA_REQUIRED_BY, &join_id_list(required_by))?;
        }
    }
    Ok(())
}

fn attach_listener(checkbox: &HtmlInputElement, board: Rc<RefCell<PermissionBoard>>) -> UiResult<()> {
    let target = checkbox.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let board = board.borrow();
        if let Err(err) = checkbox_clicked(&board.graph, &target) {
            logging::error!("permission checkbox {}: {}", target.id(), err);
        }
    });

    checkbox.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Rebuild the graph from the current markup and listen on new checkboxes
pub(crate) fn init_dependent_checkboxes() -> UiResult<usize> {
    let checkboxes = graph_checkboxes()?;
    let board = BOARD.with(Rc::clone);

    let graph = build_graph(&checkboxes);
    for (id, requirement) in graph.dangling_edges() {
        logging::warn!("permission {} requires unknown permission {}", id, requirement);
    }
    mirror_required_by(&graph, &checkboxes)?;

    let mut state = board.borrow_mut();
    state.graph = graph;
    for checkbox in &checkboxes {
        if !state.listening.contains(checkbox) {
            attach_listener(checkbox, Rc::clone(&board))?;
            state.listening.push(checkbox.clone());
        }
    }
    state.listening.retain(|checkbox| checkbox.is_connected());

    Ok(checkboxes.len())
}

/// Re-read `data-requires` from every dependent checkbox
#[wasm_bindgen(js_name = refreshPermissionGraph)]
pub fn refresh_permission_graph() -> UiResult<usize> {
    init_dependent_checkboxes()
}

/// Apply the graph's decision for a checkbox the user just toggled
pub(crate) fn checkbox_clicked(
    graph: &PermissionGraph,
    target: &HtmlInputElement,
) -> UiResult<Propagation> {
    let id = target.id();
    let propagation = graph.toggle(&id, target.checked(), is_checked);

    match &propagation {
        Propagation::None => {}
        Propagation::Blocked { dependents } => {
            for dependent in dependents {
                if let Some(checkbox) = dom::optional::<Element>(dependent) {
                    flash(&flash_container(&checkbox))?;
                }
            }
            target.set_checked(true);
            logging::log!("{} is still required by {}", id, join_id_list(dependents));
        }
        Propagation::Require { ids } => {
            for required in ids {
                if let Some(checkbox) = dom::optional::<HtmlInputElement>(required) {
                    checkbox.set_checked(true);
                }
            }
        }
    }

    Ok(propagation)
}

fn flash_container(el: &Element) -> Element {
    let mut container = el.clone();
    for _ in 0..FLASH_CONTAINER_DEPTH {
        match container.parent_element() {
            Some(parent) => container = parent,
            None => break,
        }
    }
    container
}

/// Highlight `el` briefly
fn flash(el: &Element) -> UiResult<()> {
    el.class_list().add_1(ids::FLASHED_CLASS)?;

    let el = el.clone();
    Timeout::new(FLASH_DURATION_MS, move || {
        if let Err(err) = el.class_list().remove_1(ids::FLASHED_CLASS) {
            logging::warn!("could not clear {}: {:?}", ids::FLASHED_CLASS, err);
        }
    })
    .forget();

    Ok(())
}

/// Set every dependent checkbox, skipping dependency propagation
pub fn set_all(checkboxes: &[HtmlInputElement], checked: bool) {
    for checkbox in checkboxes {
        checkbox.set_checked(checked);
    }
}

#[wasm_bindgen(js_name = resetAllCheckboxes)]
pub fn reset_all_checkboxes() -> UiResult<()> {
    set_all(&dependent_checkboxes()?, false);
    Ok(())
}

#[wasm_bindgen(js_name = selectAllCheckboxes)]
pub fn select_all_checkboxes() -> UiResult<()> {
    set_all(&dependent_checkboxes()?, true);
    Ok(())
}

/// Log checked permissions whose requirements are unchecked.
///
/// Role population and bulk selection bypass propagation, so this is the
/// place to notice an inconsistent selection.
pub(crate) fn warn_unmet_requirements() {
    BOARD.with(|board| {
        for (id, requirement) in board.borrow().graph.unmet_requirements(is_checked) {
            logging::warn!("{} is checked but its requirement {} is not", id, requirement);
        }
    });
}

/// Encode checkbox states as `"true"`/`"false"` values and submit once
#[wasm_bindgen(js_name = submitPermissionsForm)]
pub fn submit_permissions_form() -> UiResult<bool> {
    let form = dom::form(ids::PERMISSIONS_FORM)?;
    if !form.report_validity() {
        return Ok(false);
    }

    for checkbox in dom::query_all_in::<HtmlInputElement>(&form, ids::CHECKBOX_SELECTOR)? {
        checkbox.set_value(flag_value(checkbox.checked()));
    }
    form.submit()?;

    Ok(true)
}
