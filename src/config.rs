//! Application Configuration
//!
//! Compile-time settings. The dashboard has no server, so nothing is read at
//! runtime beyond the address bar and local storage.

/// Local storage key for the favorites list
pub const FAVORITES_KEY: &str = "aiw:favorites:v2";
/// Local storage key for the theme
pub const THEME_KEY: &str = "aiw:theme";
/// Local storage key for the accent color
pub const ACCENT_KEY: &str = "aiw:color";

/// How long a toast stays on screen
pub const TOAST_MS: u32 = 1500;
/// How long a prompt's copy button reads "copied"
pub const COPIED_LABEL_MS: u32 = 1300;

/// Section expanded on first visit
pub const DEFAULT_SECTION: &str = "lvl1";

/// Auxiliary journey map, relative to the site root
pub const JOURNEY_MAP_URL: &str = "maps/journalist-ai-journey.html";

/// Exported files are named `{prefix}-YYYYMMDD.json`
pub const EXPORT_PREFIX: &str = "aiw-export";

/// Number of log records kept in memory
pub const LOG_CAPACITY: usize = 500;
