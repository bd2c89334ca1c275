use leptos::prelude::*;
use plan_types::ServerSummary;

use crate::components::card::Card;
use crate::components::error_view::ErrorViewCard;
use crate::components::icon::Glyph;
use crate::components::loader::CardLoader;
use crate::fetch::{use_data_request, PanelState};
use crate::format::{now_ms, time_ago};
use crate::i18n::Translator;
use crate::service::fetch_servers;

#[component]
pub fn ServersPage() -> impl IntoView {
    let translator = use_context::<Translator>().unwrap_or_default();
    let request = use_data_request(fetch_servers, Signal::derive(|| ()));

    view! {
        <div class="dashboard-header">
            <h1>{translator.t("html.label.servers")}</h1>
        </div>
        {move || match request.state() {
            PanelState::Failed(error) => view! { <ErrorViewCard error=error /> }.into_any(),
            PanelState::Loading => view! { <CardLoader /> }.into_any(),
            PanelState::Loaded(servers) => {
                view! {
                    <Card glyph=Glyph::Server label=translator.t("html.label.servers")>
                        <ServerTable servers=servers translator=translator />
                    </Card>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn ServerTable(servers: Vec<ServerSummary>, translator: Translator) -> impl IntoView {
    if servers.is_empty() {
        return view! { <p class="card-body">{translator.t("html.label.noServers")}</p> }
            .into_any();
    }

    let nowMs = now_ms();
    view! {
        <table>
            <thead>
                <tr>
                    <th>{translator.t("html.label.server")}</th>
                    <th>{translator.t("html.label.samples")}</th>
                    <th>{translator.t("html.label.lastSeen")}</th>
                </tr>
            </thead>
            <tbody>
                {servers
                    .into_iter()
                    .map(|server| {
                        view! {
                            <tr>
                                <td>
                                    <a href=format!("/server/{}", server.identifier)>
                                        {server.name.clone()}
                                    </a>
                                </td>
                                <td>{server.sample_count}</td>
                                <td>{time_ago(&translator, server.last_seen_ms, nowMs)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
        .into_any()
}
