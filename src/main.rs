//! Writing Dashboard Frontend Entry Point

mod app;
mod catalog;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod export;
mod filter;
mod models;
mod prefs;
mod shortcuts;
mod store;
mod toast;
mod url_state;

use app::App;
use leptos::prelude::*;
use rolling_logger::{LogEntry, LoggerConfig};
use tracing::Level;
use wasm_bindgen::JsValue;

/// Forward log records to the browser console
fn console_sink(entry: &LogEntry) {
    let line = JsValue::from_str(&entry.to_string());
    if entry.level == Level::ERROR {
        web_sys::console::error_1(&line);
    } else if entry.level == Level::WARN {
        web_sys::console::warn_1(&line);
    } else if entry.level == Level::INFO {
        web_sys::console::info_1(&line);
    } else {
        web_sys::console::debug_1(&line);
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let logger_config = LoggerConfig {
        capacity: config::LOG_CAPACITY,
        max_level: Level::DEBUG,
    };
    let log = match rolling_logger::init(logger_config, console_sink) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&e));
            None
        }
    };

    mount_to_body(move || view! { <App log=log.clone() /> });
}
