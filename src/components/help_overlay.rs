//! Help Overlay Component
//!
//! Lists the keyboard shortcuts, plus a count of recent warnings from the
//! in-memory log.

use leptos::prelude::*;
use rolling_logger::LogBuffer;
use tracing::Level;

use crate::context::use_app_context;
use crate::shortcuts::Shortcut;
use crate::store::{Action, AppStateStoreFields};

#[component]
pub fn HelpOverlay() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let log = use_context::<LogBuffer>();

    let close = move |_| {
        ctx.dispatch(Action::CloseHelp);
    };

    view! {
        <Show when=move || store.help_open().get()>
            <div class="help-backdrop" on:click=close>
                <div class="help-panel" on:click=|ev| ev.stop_propagation()>
                    <div class="help-header">
                        <h3>"اختصارات"</h3>
                        <button class="modal-close" on:click=close>"✕"</button>
                    </div>
                    <ul class="help-list">
                        {Shortcut::ALL
                            .into_iter()
                            .map(|s| view! { <li><kbd>{s.key()}</kbd>" "{s.label()}</li> })
                            .collect_view()}
                    </ul>
                    {log.clone().map(|log| {
                        let warnings = log.entries_at_least(Level::WARN).len();
                        view! { <p class="help-diagnostics">{format!("تحذيرات حديثة: {}", warnings)}</p> }
                    })}
                </div>
            </div>
        </Show>
    }
}
