use leptos::prelude::*;
use plan_types::LoadingError;

use crate::components::icon::{Glyph, Icon};

/// Replaces a card when its request failed. The message is shown as received.
#[component]
pub fn ErrorViewCard(error: LoadingError) -> impl IntoView {
    view! {
        <div class="card card-error">
            <div class="card-body">
                <p class="load-error">
                    <Icon glyph=Glyph::Warning tone="col-red" />
                    " "
                    {error.message}
                </p>
            </div>
        </div>
    }
}
