//! Errors raised while binding page helpers to the DOM
//!
//! Exported functions return [`UiError`], which `wasm-bindgen` throws as a
//! JavaScript `Error` so a broken page fails the handler with a console
//! message instead of silently doing nothing.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Element #{0} has an unexpected type")]
    WrongElementType(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error(transparent)]
    Common(#[from] boilerplate_common::Error),
}

pub type UiResult<T> = Result<T, UiError>;

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for UiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        UiError::InvalidArgument(err.to_string())
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
