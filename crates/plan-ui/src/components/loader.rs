use leptos::prelude::*;

/// Placeholder shown in place of a card while its data is pending.
#[component]
pub fn CardLoader() -> impl IntoView {
    view! {
        <div class="card card-loader">
            <div class="loading">
                <div class="spinner"></div>
            </div>
        </div>
    }
}
