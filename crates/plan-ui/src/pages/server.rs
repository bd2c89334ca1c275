use leptos::prelude::*;

use crate::components::online_activity_card::OnlineActivityCard;
use crate::components::players_card::PlayersCard;
use crate::i18n::Translator;
use crate::params::use_server_identifier;

#[component]
pub fn ServerPage() -> impl IntoView {
    let translator = use_context::<Translator>().unwrap_or_default();
    let identifier = use_server_identifier();

    view! {
        <div class="dashboard-header">
            <h1>{translator.t("html.label.serverOverview")}</h1>
            <p class="subtitle">{move || identifier.get()}</p>
        </div>
        <div class="dashboard-grid graphs">
            <OnlineActivityCard translator=translator />
        </div>
        <div class="dashboard-grid tables">
            <PlayersCard translator=translator />
        </div>
    }
}
