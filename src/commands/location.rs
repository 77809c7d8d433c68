//! Location Commands
//!
//! Address bar access: read the query string, replace the current entry.

use wasm_bindgen::JsValue;

/// `location.search`, or empty when unavailable
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// `location.pathname`, or `/` when unavailable
pub fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full `location.href`
pub fn current_href() -> Result<String, String> {
    let window = web_sys::window().ok_or("No window")?;
    window
        .location()
        .href()
        .map_err(|e| format!("Failed to read href: {:?}", e))
}

/// Replace the current history entry with `url` (never pushes)
pub fn replace_url(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let history = window
        .history()
        .map_err(|e| format!("History unavailable: {:?}", e))?;
    history
        .replace_state_with_url(&JsValue::NULL, "", Some(url))
        .map_err(|e| format!("replaceState failed: {:?}", e))
}
