use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Route segment naming the server, as in `/server/:identifier`.
pub const IDENTIFIER_PARAM: &str = "identifier";

/// The `:identifier` of the current route, empty when absent.
pub fn use_server_identifier() -> Signal<String> {
    let params = use_params_map();
    Signal::derive(move || {
        params.with(|p| {
            p.get(IDENTIFIER_PARAM)
                .map(|value| value.to_string())
                .unwrap_or_default()
        })
    })
}
