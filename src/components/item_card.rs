//! Item Card Component
//!
//! An exercise: title, chips, description and its visible prompts.

use leptos::prelude::*;

use crate::components::PromptCard;
use crate::context::use_app_context;
use crate::filter::VisibleItem;

#[component]
pub fn ItemCard(item: VisibleItem) -> impl IntoView {
    let ctx = use_app_context();
    let all_prompts = item.joined_prompts();

    view! {
        <div class="item-card">
            <div class="item-card-header">
                <h4 class="item-title">{item.title.clone()}</h4>
                <div class="item-chips">
                    {item
                        .chips
                        .iter()
                        .map(|chip| view! { <span class="pill">{chip.clone()}</span> })
                        .collect_view()}
                    <button
                        class="copy-all-btn"
                        title="انسخ كل الموجهات"
                        on:click=move |_| ctx.copy_text(all_prompts.clone(), Some("تم النسخ"))
                    >
                        "انسخ كل الموجهات"
                    </button>
                </div>
            </div>
            <p class="item-description">{item.description.clone()}</p>
            <div class="item-prompts">
                {item
                    .prompts
                    .into_iter()
                    .map(|p| view! { <PromptCard prompt_key=p.key text=p.text /> })
                    .collect_view()}
            </div>
        </div>
    }
}
