//! Thin wrappers over window-level browser APIs.

use boxview_core::{DeletePrompt, ViewerError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

/// Map a JS exception into a viewer error, keeping its message when it has one.
pub fn js_error(value: JsValue) -> ViewerError {
    ViewerError::Js(describe(&value))
}

pub fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn window() -> Result<Window, ViewerError> {
    web_sys::window().ok_or_else(|| ViewerError::Js("no window".to_string()))
}

pub fn document() -> Result<Document, ViewerError> {
    window()?
        .document()
        .ok_or_else(|| ViewerError::Js("no document".to_string()))
}

/// Percent-encode a file name for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

/// Log a failed browser call, keeping the value of a successful one.
pub fn log_failure<T>(action: &str, result: Result<T, JsValue>) -> Option<T> {
    result
        .map_err(|e| log::error!("Failed to {}: {}", action, describe(&e)))
        .ok()
}

/// Reload the current page.
pub fn reload_page() {
    if let Ok(window) = window() {
        log_failure("reload page", window.location().reload());
    }
}

/// Native `confirm()` / `alert()` dialogs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPrompt;

impl DeletePrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        window()
            .ok()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Ok(window) = window() {
            log_failure("show alert", window.alert_with_message(message));
        }
    }
}
