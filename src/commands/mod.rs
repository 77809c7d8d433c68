//! Browser Command Wrappers
//!
//! Thin bindings to browser APIs, organized by concern. Everything here
//! touches `web_sys` and is kept out of the natively tested modules.

mod clipboard;
mod download;
mod location;
mod storage;
mod window;

pub use clipboard::*;
pub use download::*;
pub use location::*;
pub use storage::*;
pub use window::*;
