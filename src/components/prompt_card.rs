//! Prompt Card Component
//!
//! One copyable prompt with a favorite star.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::COPIED_LABEL_MS;
use crate::context::use_app_context;
use crate::store::{Action, AppStateStoreFields};
use crate::toast::{TimerSlot, ToastState};

#[component]
pub fn PromptCard(
    /// Composite favorites key
    prompt_key: String,
    text: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Reuses the toast generation logic for the "copied" label
    let label = RwSignal::new(ToastState::default());
    let label_timer = StoredValue::new_local(TimerSlot::<Timeout>::default());
    let copied = move || label.with(|l| l.message().is_some());

    let key_for_fav = prompt_key.clone();
    let is_fav = Memo::new(move |_| store.favorites().with(|f| f.contains(&key_for_fav)));

    let text_for_copy = text.clone();
    let copy = move |_| {
        let text = text_for_copy.clone();
        spawn_local(async move {
            match commands::write_text(&text).await {
                Ok(()) => {
                    let Some(generation) = label.try_update(|l| l.show("copied")) else {
                        return;
                    };
                    let timeout = Timeout::new(COPIED_LABEL_MS, move || {
                        label.try_update(|l| l.dismiss(generation));
                    });
                    label_timer.try_update_value(|slot| slot.arm(timeout));
                }
                Err(e) => tracing::warn!("[CLIPBOARD] {}", e),
            }
        });
    };

    view! {
        <div class="prompt-card">
            <div class="prompt-text">{text}</div>
            <button class="prompt-copy-btn" title="انسخ" on:click=copy>
                {move || if copied() { "تم النسخ" } else { "انسخ" }}
            </button>
            <button
                class=move || if is_fav.get() { "prompt-fav-btn active" } else { "prompt-fav-btn" }
                title="أضف للمفضلة"
                on:click=move |_| {
                    ctx.dispatch(Action::ToggleFavorite(prompt_key.clone()));
                }
            >
                {move || if is_fav.get() { "★" } else { "☆" }}
            </button>
        </div>
    }
}
