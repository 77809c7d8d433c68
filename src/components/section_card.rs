//! Section Card Component
//!
//! A collapsible level of the journey. Only one section is open at a time.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::context::use_app_context;
use crate::filter::VisibleSection;
use crate::store::{Action, AppStateStoreFields};

#[component]
pub fn SectionCard(
    section: VisibleSection,
    /// Position among the visible sections, used for the accent rotation
    position: usize,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = section.id.clone();
    let id_for_open = id.clone();
    let data_id = id.clone();
    let is_open = Memo::new(move |_| {
        store
            .ui()
            .with(|ui| ui.expanded_section.as_deref() == Some(id_for_open.as_str()))
    });
    let card_class = move || {
        format!(
            "section-card accent-{}",
            store.accent().get().for_card(position).name()
        )
    };
    let items = StoredValue::new(section.items);

    view! {
        <div class=card_class data-section=data_id>
            <button
                class="section-header"
                on:click=move |_| {
                    ctx.dispatch(Action::ToggleSection(id.clone()));
                }
            >
                <h3 class="section-title">{section.title}</h3>
                <span class="section-chevron">{move || if is_open.get() { "▲" } else { "▼" }}</span>
            </button>

            <Show when=move || is_open.get()>
                <div class="section-items">
                    {items
                        .get_value()
                        .into_iter()
                        .map(|item| view! { <ItemCard item=item /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
