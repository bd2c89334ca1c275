use leptos::prelude::*;
use plan_types::PlayersOnlineGraph as GraphData;

use crate::components::card::Card;
use crate::components::error_view::ErrorViewCard;
use crate::components::icon::Glyph;
use crate::components::loader::CardLoader;
use crate::components::players_online_graph::PlayersOnlineGraph;
use crate::fetch::{use_data_request, PanelState};
use crate::i18n::Translator;
use crate::params::use_server_identifier;
use crate::service::fetch_players_online_graph;

/// Players online graph for the server named by the current route.
///
/// Refetches whenever the route identifier changes.
#[component]
pub fn OnlineActivityCard(translator: Translator) -> impl IntoView {
    let identifier = use_server_identifier();
    let request = use_data_request(fetch_players_online_graph, identifier);

    view! {
        {move || view! { <OnlineActivityPanel state=request.state() translator=translator /> }}
    }
}

/// Error view, loader or the graph card, in that order of precedence.
#[component]
pub fn OnlineActivityPanel(state: PanelState<GraphData>, translator: Translator) -> impl IntoView {
    match state {
        PanelState::Failed(error) => view! { <ErrorViewCard error=error /> }.into_any(),
        PanelState::Loading => view! { <CardLoader /> }.into_any(),
        PanelState::Loaded(data) => view! {
            <Card glyph=Glyph::ChartArea label=translator.t("html.label.onlineActivity")>
                <PlayersOnlineGraph data=data translator=translator />
            </Card>
        }
            .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use plan_types::{LoadingError, OnlinePoint};

    use super::*;

    fn render(state: PanelState<GraphData>) -> String {
        Owner::new().with(|| {
            view! { <OnlineActivityPanel state=state translator=Translator::default() /> }
                .to_html()
        })
    }

    #[test]
    fn loaded_graph_renders_inside_labelled_card() {
        let data = GraphData::new(vec![OnlinePoint::new(0, 5), OnlinePoint::new(1, 7)]);
        let html = render(PanelState::Loaded(data));

        assert!(html.contains("card-header"));
        assert!(html.contains("Online Activity"));
        assert!(html.contains(r#"d="M0.0,57.1 L600.0,0.0""#), "{html}");
        assert!(!html.contains("spinner"));
        assert!(!html.contains("card-error"));
    }

    #[test]
    fn loading_renders_only_the_loader() {
        let html = render(PanelState::Loading);

        assert!(html.contains("card-loader"));
        assert!(!html.contains("card-header"));
        assert!(!html.contains("graph-svg"));
    }

    #[test]
    fn failure_renders_the_message_verbatim() {
        let html = render(PanelState::Failed(LoadingError::new("network timeout")));

        assert!(html.contains("card-error"));
        assert!(html.contains("network timeout"));
        assert!(!html.contains("card-header"));
        assert!(!html.contains("spinner"));
    }
}
