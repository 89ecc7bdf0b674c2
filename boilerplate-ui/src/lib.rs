//! Boilerplate admin page helpers
//!
//! Compiled to WebAssembly and loaded by the server-rendered pages. The
//! exported functions keep the names the templates call from inline event
//! handlers (`onclick="validatePassword(...)"`, `editRole({...})`), and the
//! start hook wires up the listeners every page needs once the DOM is ready.

use std::cell::Cell;

use leptos::{document, logging};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod dom;
pub mod error;
pub mod ids;
pub mod layout;
pub mod login;
pub mod password;
pub mod permissions;
pub mod roles;
pub mod users;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use error::{UiError, UiResult};

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

fn init_page() -> UiResult<()> {
    if INITIALIZED.with(|initialized| initialized.replace(true)) {
        return Ok(());
    }

    layout::install_sidenav_dismissal()?;
    let count = permissions::init_dependent_checkboxes()?;
    if count > 0 {
        logging::log!("permission graph ready with {} permissions", count);
    }

    Ok(())
}

fn report_init(result: UiResult<()>) {
    if let Err(err) = result {
        logging::error!("page initialization failed: {}", err);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = document();
    if document.ready_state() != "loading" {
        report_init(init_page());
        return Ok(());
    }

    let on_ready = Closure::once_into_js(move || report_init(init_page()));
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}
