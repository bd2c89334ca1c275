use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::i18n::Translator;

#[component]
pub fn Nav(translator: Translator) -> impl IntoView {
    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"P"</div>
                <span class="brand-text">"Plan"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item">
                    <a href="/">
                        <span class="nav-icon">
                            <Icon glyph=Glyph::Server />
                        </span>
                        <span>{translator.t("html.label.servers")}</span>
                    </a>
                </li>
            </ul>
        </nav>
    }
}
