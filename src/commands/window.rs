//! Window Commands

/// Open the browser print dialog
pub fn print() -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    window.print().map_err(|e| format!("Print failed: {:?}", e))
}
