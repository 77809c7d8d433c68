//! Tag Bar Component
//!
//! Every chip in the catalog as a toggle; selected tags narrow the view with
//! AND semantics.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{Action, AppStateStoreFields};

#[component]
pub fn TagBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let all_tags = ctx.with_catalog(|c| c.all_tags());

    let has_selection = move || store.ui().with(|ui| !ui.tags.is_empty());

    view! {
        <div class="tag-bar no-print">
            {all_tags
                .into_iter()
                .map(|tag| {
                    let tag_for_class = tag.clone();
                    let tag_for_click = tag.clone();
                    let tag_class = move || {
                        let selected = store.ui().with(|ui| ui.tags.contains(&tag_for_class));
                        if selected {
                            format!("tag-chip selected accent-{}", store.accent().get().name())
                        } else {
                            "tag-chip".to_string()
                        }
                    };
                    view! {
                        <button
                            class=tag_class
                            on:click=move |_| {
                                ctx.dispatch(Action::ToggleTag(tag_for_click.clone()));
                            }
                        >
                            {tag}
                        </button>
                    }
                })
                .collect_view()}

            <Show when=has_selection>
                <button
                    class="tag-clear-btn"
                    on:click=move |_| {
                        ctx.dispatch(Action::ClearTags);
                    }
                >
                    "مسح الوسوم"
                </button>
            </Show>
        </div>
    }
}
