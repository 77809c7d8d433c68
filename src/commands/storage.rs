//! Storage Commands
//!
//! `window.localStorage` as a [`KeyValueStorage`] backend.

use wasm_bindgen::JsValue;

use crate::error::{DashboardError, DashboardResult};
use crate::prefs::KeyValueStorage;

/// Browser local storage, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> DashboardResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| DashboardError::Browser("No window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| DashboardError::Storage("localStorage unavailable".to_string()))
}

fn js_error(e: JsValue) -> DashboardError {
    DashboardError::Storage(format!("{:?}", e))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> DashboardResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> DashboardResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}
