//! Browser console reporting.
//!
//! The core library never logs. Bindings report rejected input and detection
//! fallbacks here; on non-wasm targets (native unit tests) nothing is printed.

use inkcrop_core::PixelError;
use wasm_bindgen::JsValue;

/// Log a warning to the browser console.
pub(crate) fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a debug message to the browser console.
pub(crate) fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Report a core error and convert it for JavaScript.
pub(crate) fn to_js_error(err: PixelError) -> JsValue {
    let message = err.to_string();
    warn(&message);
    JsValue::from_str(&message)
}
