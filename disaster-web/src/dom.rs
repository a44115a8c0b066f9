use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    let Some(win) = window() else {
        log::warn!("No window for alert: {message}");
        return;
    };
    if let Err(err) = win.alert_with_message(message) {
        console_error(&js_error_message(&err));
    }
}

/// Access the browser `localStorage` handle.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}
