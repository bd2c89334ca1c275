use leptos::prelude::*;
use plan_types::TablePlayer;

use crate::components::card::Card;
use crate::components::error_view::ErrorViewCard;
use crate::components::icon::Glyph;
use crate::components::loader::CardLoader;
use crate::fetch::{use_data_request, PanelState};
use crate::format::{now_ms, playtime, time_ago};
use crate::i18n::Translator;
use crate::params::use_server_identifier;
use crate::service::fetch_server_players;

/// Most recently seen players of the server named by the current route.
#[component]
pub fn PlayersCard(translator: Translator) -> impl IntoView {
    let identifier = use_server_identifier();
    let request = use_data_request(fetch_server_players, identifier);

    view! {
        {move || {
            view! { <PlayersPanel state=request.state() translator=translator now_ms=now_ms() /> }
        }}
    }
}

#[component]
pub fn PlayersPanel(
    state: PanelState<Vec<TablePlayer>>,
    translator: Translator,
    now_ms: i64,
) -> impl IntoView {
    match state {
        PanelState::Failed(error) => view! { <ErrorViewCard error=error /> }.into_any(),
        PanelState::Loading => view! { <CardLoader /> }.into_any(),
        PanelState::Loaded(players) => view! {
            <Card glyph=Glyph::Users label=translator.t("html.label.players")>
                <PlayersTable players=players translator=translator now_ms=now_ms />
            </Card>
        }
            .into_any(),
    }
}

#[component]
fn PlayersTable(players: Vec<TablePlayer>, translator: Translator, now_ms: i64) -> impl IntoView {
    if players.is_empty() {
        return view! { <p class="card-body">{translator.t("html.label.noPlayers")}</p> }
            .into_any();
    }

    view! {
        <table class="players-table">
            <thead>
                <tr>
                    <th>{translator.t("html.label.name")}</th>
                    <th>{translator.t("html.label.activityIndex")}</th>
                    <th>{translator.t("html.label.activePlaytime")}</th>
                    <th>{translator.t("html.label.sessions")}</th>
                    <th>{translator.t("html.label.registered")}</th>
                    <th>{translator.t("html.label.lastSeenPlayer")}</th>
                    <th>{translator.t("html.label.geolocation")}</th>
                </tr>
            </thead>
            <tbody>
                {players
                    .into_iter()
                    .map(|player| {
                        let group = translator.t(player.activity_group().label_key());
                        let banned = player
                            .banned
                            .then(|| {
                                view! {
                                    <span class="badge col-red">
                                        {translator.t("html.label.banned")}
                                    </span>
                                }
                            });
                        view! {
                            <tr>
                                <td>{player.name.clone()} " " {banned}</td>
                                <td>{format!("{:.2} ({group})", player.activity_index)}</td>
                                <td>{playtime(player.active_playtime_ms)}</td>
                                <td>{player.session_count}</td>
                                <td>{time_ago(&translator, Some(player.registered_ms), now_ms)}</td>
                                <td>{time_ago(&translator, player.last_seen_ms, now_ms)}</td>
                                <td>{player.geolocation.clone().unwrap_or_else(|| "-".into())}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
        .into_any()
}
