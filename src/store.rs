//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations go
//! through [`AppState::apply`], a pure reducer, and [`dispatch`] writes back
//! only the fields that changed.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::DEFAULT_SECTION;
use crate::models::{AccentColor, Theme};
use crate::prefs::{Favorites, Preferences};
use crate::toast::ToastState;

/// Transient view state, mirrored into the address bar
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub query: String,
    /// Selected tags, matched with AND semantics
    pub tags: Vec<String>,
    /// At most one open section
    pub expanded_section: Option<String>,
    pub favorites_only: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            query: String::new(),
            tags: Vec::new(),
            expanded_section: Some(DEFAULT_SECTION.to_string()),
            favorites_only: false,
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub ui: UiState,
    /// Persisted
    pub favorites: Favorites,
    /// Persisted
    pub theme: Theme,
    /// Persisted
    pub accent: AccentColor,
    pub toast: ToastState,
    pub help_open: bool,
    pub settings_open: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetQuery(String),
    ToggleTag(String),
    ClearTags,
    ToggleSection(String),
    ToggleFavoritesOnly,
    ToggleFavorite(String),
    SetTheme(Theme),
    SetAccent(AccentColor),
    ShowToast(String),
    DismissToast(u32),
    OpenHelp,
    CloseHelp,
    OpenSettings,
    CloseSettings,
}

/// Which parts of the state an action touched
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    pub ui: bool,
    pub favorites: bool,
    pub theme: bool,
    pub accent: bool,
    pub toast: bool,
    pub overlays: bool,
}

impl AppState {
    pub fn new(prefs: Preferences, ui: UiState) -> Self {
        Self {
            ui,
            favorites: prefs.favorites,
            theme: prefs.theme,
            accent: prefs.accent,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: Action) -> Changes {
        let mut changes = Changes::default();
        match action {
            Action::SetQuery(query) => {
                changes.ui = self.ui.query != query;
                self.ui.query = query;
            }
            Action::ToggleTag(tag) => {
                if let Some(pos) = self.ui.tags.iter().position(|t| *t == tag) {
                    self.ui.tags.remove(pos);
                } else {
                    self.ui.tags.push(tag);
                }
                changes.ui = true;
            }
            Action::ClearTags => {
                changes.ui = !self.ui.tags.is_empty();
                self.ui.tags.clear();
            }
            Action::ToggleSection(id) => {
                self.ui.expanded_section = if self.ui.expanded_section.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
                changes.ui = true;
            }
            Action::ToggleFavoritesOnly => {
                self.ui.favorites_only = !self.ui.favorites_only;
                changes.ui = true;
            }
            Action::ToggleFavorite(key) => {
                self.favorites.toggle(&key);
                changes.favorites = true;
            }
            Action::SetTheme(theme) => {
                changes.theme = self.theme != theme;
                self.theme = theme;
            }
            Action::SetAccent(accent) => {
                changes.accent = self.accent != accent;
                self.accent = accent;
            }
            Action::ShowToast(message) => {
                self.toast.show(message);
                changes.toast = true;
            }
            Action::DismissToast(generation) => {
                changes.toast = self.toast.dismiss(generation);
            }
            Action::OpenHelp => {
                changes.overlays = !self.help_open;
                self.help_open = true;
            }
            Action::CloseHelp => {
                changes.overlays = self.help_open;
                self.help_open = false;
            }
            Action::OpenSettings => {
                changes.overlays = !self.settings_open;
                self.settings_open = true;
            }
            Action::CloseSettings => {
                changes.overlays = self.settings_open;
                self.settings_open = false;
            }
        }
        changes
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run `action` through the reducer and write back changed fields
pub fn dispatch(store: &AppStore, action: Action) -> Changes {
    let mut next = store.get_untracked();
    let changes = next.apply(action);

    if changes.ui {
        store.ui().set(next.ui);
    }
    if changes.favorites {
        store.favorites().set(next.favorites);
    }
    if changes.theme {
        store.theme().set(next.theme);
    }
    if changes.accent {
        store.accent().set(next.accent);
    }
    if changes.toast {
        store.toast().set(next.toast);
    }
    if changes.overlays {
        store.help_open().set(next.help_open);
        store.settings_open().set(next.settings_open);
    }
    changes
}
