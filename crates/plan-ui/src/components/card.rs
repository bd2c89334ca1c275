use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};

/// Bordered card with an icon and label in the header.
#[component]
pub fn Card(
    /// Icon shown before the label
    glyph: Glyph,
    /// Already localized header text
    #[prop(into)]
    label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h6 class="col-black">
                    <Icon glyph=glyph tone="col-blue" />
                    " "
                    {label}
                </h6>
            </div>
            {children()}
        </div>
    }
}
