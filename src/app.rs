//! Writing Dashboard App
//!
//! Root component: loads preferences, hydrates from the URL, mirrors state
//! back into the address bar and dispatches global shortcuts.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;
use rolling_logger::LogBuffer;
use wasm_bindgen::JsCast;

use crate::catalog::Catalog;
use crate::commands::{self, BrowserStorage};
use crate::components::{FooterNotes, HeaderBar, HelpOverlay, SectionCard, SettingsModal, TagBar, ToastView};
use crate::context::AppContext;
use crate::filter::{filter_catalog, FilterCriteria};
use crate::prefs::PreferenceStore;
use crate::shortcuts::{shortcut_for, FocusKind, Modifiers, Shortcut};
use crate::store::{Action, AppState, AppStateStoreFields};
use crate::url_state;

fn focus_of(ev: &web_sys::KeyboardEvent) -> FocusKind {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| FocusKind::from_element(&el.tag_name(), el.is_content_editable()))
        .unwrap_or(FocusKind::Other)
}

#[component]
pub fn App(log: Option<LogBuffer>) -> impl IntoView {
    let catalog = Catalog::builtin();
    let prefs = PreferenceStore::new(BrowserStorage);
    let preferences = prefs.load();
    let ui = url_state::hydrate(&commands::current_search());
    tracing::info!(
        favorites = preferences.favorites.len(),
        section = ?ui.expanded_section,
        "[APP] starting"
    );

    let store = Store::new(AppState::new(preferences, ui));
    let search_input = NodeRef::<html::Input>::new();
    let ctx = AppContext::new(store, catalog, prefs, search_input);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    if let Some(log) = log {
        provide_context(log);
    }

    // Mirror UI state into the address bar (replace, never push)
    Effect::new(move |_| {
        let ui = store.ui().get();
        let url = url_state::mirror_url(&commands::current_pathname(), &ui);
        if let Err(e) = commands::replace_url(&url) {
            tracing::warn!("[URL] {}", e);
        }
    });

    // Global shortcuts, inactive while typing
    let _ = window_event_listener(ev::keydown, move |ev| {
        let modifiers = Modifiers {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
        };
        let Some(shortcut) = shortcut_for(&ev.key(), focus_of(&ev), modifiers) else {
            return;
        };
        ev.prevent_default();
        tracing::debug!(?shortcut, "[APP] shortcut");
        match shortcut {
            Shortcut::FocusSearch => {
                if let Some(input) = search_input.get() {
                    let _ = input.focus();
                }
            }
            Shortcut::ToggleFavoritesOnly => {
                ctx.dispatch(Action::ToggleFavoritesOnly);
            }
            Shortcut::OpenHelp => {
                ctx.dispatch(Action::OpenHelp);
            }
        }
    });

    let visible = Memo::new(move |_| {
        let ui = store.ui().get();
        store.favorites().with(|favorites| {
            let criteria = FilterCriteria {
                query: &ui.query,
                tags: &ui.tags,
                favorites_only: ui.favorites_only,
                favorites,
            };
            ctx.with_catalog(|catalog| filter_catalog(catalog, &criteria))
        })
    });

    view! {
        <div dir="rtl" class=move || if store.theme().get().is_dark() { "app-root dark" } else { "app-root" }>
            <main class="app-layout">
                <HeaderBar />
                <TagBar />

                <div class="section-list">
                    {move || {
                        let sections = visible.get();
                        if sections.is_empty() {
                            view! { <p class="empty-message">"لا توجد نتائج مطابقة"</p> }.into_any()
                        } else {
                            sections
                                .into_iter()
                                .enumerate()
                                .map(|(position, section)| view! { <SectionCard section=section position=position /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>

                <FooterNotes />
            </main>

            <ToastView />
            <SettingsModal />
            <HelpOverlay />
        </div>
    }
}
