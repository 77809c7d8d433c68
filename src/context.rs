//! Application Context
//!
//! Shared handles provided via Leptos Context API: the store, the catalog,
//! the preference store and the search input.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::Catalog;
use crate::commands::{self, BrowserStorage};
use crate::config::TOAST_MS;
use crate::prefs::PreferenceStore;
use crate::store::{self, Action, AppStateStoreFields, AppStore, Changes};
use crate::toast::TimerSlot;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    catalog: StoredValue<Catalog>,
    prefs: StoredValue<PreferenceStore<BrowserStorage>>,
    toast_timer: StoredValue<TimerSlot<Timeout>, LocalStorage>,
    /// Target of the `/` shortcut
    pub search_input: NodeRef<html::Input>,
}

impl AppContext {
    pub fn new(
        store: AppStore,
        catalog: Catalog,
        prefs: PreferenceStore<BrowserStorage>,
        search_input: NodeRef<html::Input>,
    ) -> Self {
        Self {
            store,
            catalog: StoredValue::new(catalog),
            prefs: StoredValue::new(prefs),
            toast_timer: StoredValue::new_local(TimerSlot::default()),
            search_input,
        }
    }

    pub fn with_catalog<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        self.catalog.with_value(f)
    }

    /// Apply an action and persist whatever preference it changed
    pub fn dispatch(&self, action: Action) -> Changes {
        let changes = store::dispatch(&self.store, action);
        self.persist(changes);
        changes
    }

    fn persist(&self, changes: Changes) {
        if changes.favorites {
            let favorites = self.store.favorites().get_untracked();
            self.prefs.with_value(|p| p.save_favorites(&favorites));
        }
        if changes.theme {
            let theme = self.store.theme().get_untracked();
            self.prefs.with_value(|p| p.save_theme(theme));
        }
        if changes.accent {
            let accent = self.store.accent().get_untracked();
            self.prefs.with_value(|p| p.save_accent(accent));
        }
    }

    /// Show a toast and schedule its dismissal
    ///
    /// A newer toast supersedes this one and cancels its timer.
    pub fn notify(&self, message: impl Into<String>) {
        self.dispatch(Action::ShowToast(message.into()));
        let generation = self.store.toast().with_untracked(|t| t.generation());
        let ctx = *self;
        let timeout = Timeout::new(TOAST_MS, move || {
            ctx.dispatch(Action::DismissToast(generation));
        });
        self.toast_timer.update_value(|slot| slot.arm(timeout));
    }

    /// Copy `text`, then show `toast` on success; failures are only logged
    pub fn copy_text(&self, text: String, toast: Option<&'static str>) {
        let ctx = *self;
        spawn_local(async move {
            match commands::write_text(&text).await {
                Ok(()) => {
                    tracing::debug!(chars = text.chars().count(), "[CLIPBOARD] copied");
                    if let Some(message) = toast {
                        ctx.notify(message);
                    }
                }
                Err(e) => tracing::warn!("[CLIPBOARD] {}", e),
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
