//! Settings Modal Component
//!
//! Dark mode switch and accent palette. Both are persisted.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{AccentColor, Theme};
use crate::store::{Action, AppStateStoreFields};

#[component]
pub fn SettingsModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let close = move |_| {
        ctx.dispatch(Action::CloseSettings);
    };

    view! {
        <Show when=move || store.settings_open().get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"الإعدادات"</h2>
                        <button class="modal-close" on:click=close>"✕"</button>
                    </div>

                    <label class="settings-row">
                        <span>"الوضع الداكن"</span>
                        <input
                            type="checkbox"
                            prop:checked=move || store.theme().get().is_dark()
                            on:change=move |ev| {
                                let theme = if event_target_checked(&ev) { Theme::Dark } else { Theme::Light };
                                ctx.dispatch(Action::SetTheme(theme));
                            }
                        />
                    </label>

                    <div class="settings-row accent-picker">
                        {AccentColor::ALL
                            .into_iter()
                            .map(|color| {
                                let swatch_class = move || {
                                    if store.accent().get() == color {
                                        format!("accent-swatch accent-{} selected", color.name())
                                    } else {
                                        format!("accent-swatch accent-{}", color.name())
                                    }
                                };
                                view! {
                                    <button
                                        class=swatch_class
                                        title=color.name()
                                        on:click=move |_| {
                                            ctx.dispatch(Action::SetAccent(color));
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
