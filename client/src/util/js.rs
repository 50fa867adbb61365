//! Small helpers for values crossing the JS boundary.

use wasm_bindgen::JsValue;

/// Best-effort readable message for a thrown JS value: the string itself,
/// its `message` property, or its debug form.
pub fn error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
