//! Toast Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// The current transient notice, if any
#[component]
pub fn ToastView() -> impl IntoView {
    let store = use_app_store();
    let message = move || store.toast().with(|t| t.message().map(str::to_string));

    view! {
        {move || message().map(|m| view! { <div class="toast" role="status">{m}</div> })}
    }
}
