//! Header Bar Component
//!
//! Title, journey map link, search field and the global action buttons.

use chrono::Local;
use leptos::prelude::*;

use crate::commands;
use crate::config::JOURNEY_MAP_URL;
use crate::context::{use_app_context, AppContext};
use crate::export::{export_filename, ExportDocument};
use crate::store::{Action, AppStateStoreFields};

/// Serialize favorites and filters and offer them as a download
fn export_favorites(ctx: AppContext) {
    let ui = ctx.store.ui().get_untracked();
    let doc = ctx.store.favorites().with_untracked(|favorites| {
        ctx.with_catalog(|catalog| ExportDocument::build(catalog, favorites, &ui.query, &ui.tags))
    });

    let json = match doc.to_json() {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("[EXPORT] {}", e);
            return;
        }
    };
    let filename = export_filename(Local::now().date_naive());
    match commands::offer_download(&filename, &json, "application/json") {
        Ok(()) => tracing::info!(
            file = filename.as_str(),
            resolved = doc.prompts.len(),
            "[EXPORT] offered download"
        ),
        Err(e) => tracing::warn!("[EXPORT] {}", e),
    }
}

#[component]
pub fn HeaderBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let favorites_only = move || store.ui().with(|ui| ui.favorites_only);

    let share = move |_| match commands::current_href() {
        Ok(href) => ctx.copy_text(href, Some("تم النسخ")),
        Err(e) => tracing::warn!("[SHARE] {}", e),
    };

    let print = move |_| {
        if let Err(e) = commands::print() {
            tracing::warn!("[PRINT] {}", e);
        }
    };

    view! {
        <header class="header-bar no-print">
            <div class="header-titles">
                <h1>"لوحة الكتابة الإبداعية بالذكاء الاصطناعي"</h1>
                <p class="header-subtitle">"رحلة متدرجة: من الفكرة → النص → الأسلوب → الإخراج والنشر"</p>
            </div>

            <div class="header-actions">
                <a
                    class="journey-map-link"
                    href=JOURNEY_MAP_URL
                    target="_blank"
                    rel="noopener"
                    title="الخريطة المعرفية: رحلة الصحفي (تفتح في تبويب جديد)"
                >
                    "🗺️ خريطة رحلة الصحفي"
                </a>

                <input
                    type="text"
                    class="search-input"
                    placeholder="ابحث داخل التمارين والموجهات…"
                    node_ref=ctx.search_input
                    prop:value=move || store.ui().with(|ui| ui.query.clone())
                    on:input=move |ev| {
                        ctx.dispatch(Action::SetQuery(event_target_value(&ev)));
                    }
                />

                <button
                    class=move || if favorites_only() { "icon-btn active" } else { "icon-btn" }
                    title="الكل / المفضلة"
                    on:click=move |_| {
                        ctx.dispatch(Action::ToggleFavoritesOnly);
                    }
                >
                    {move || if favorites_only() { "★" } else { "☆" }}
                </button>
                <button class="icon-btn" title="مشاركة" on:click=share>"🔗"</button>
                <button class="icon-btn" title="تصدير JSON" on:click=move |_| export_favorites(ctx)>"⬇"</button>
                <button class="icon-btn" title="طباعة" on:click=print>"🖨"</button>
                <button
                    class="icon-btn"
                    title="إعدادات"
                    on:click=move |_| {
                        ctx.dispatch(Action::OpenSettings);
                    }
                >
                    "⚙"
                </button>
            </div>
        </header>
    }
}
