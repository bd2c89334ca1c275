#![allow(non_snake_case)]
#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
mod config {
    use std::net::SocketAddr;

    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug, Default, PartialEq)]
    pub struct Config {
        #[serde(default)]
        pub server: ServerConfig,
        #[serde(default)]
        pub data: DataConfig,
    }

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    pub struct DataConfig {
        pub dir: String,
        #[serde(default = "default_graph_color")]
        pub graph_color: String,
        /// Weekly active playtime that counts as regular play.
        #[serde(default = "default_activity_threshold")]
        pub activity_threshold_minutes: i64,
    }

    fn default_graph_color() -> String {
        plan_types::DEFAULT_GRAPH_COLOR.into()
    }

    fn default_activity_threshold() -> i64 {
        plan_providers::DEFAULT_ACTIVITY_THRESHOLD_MS / 60_000
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "0.0.0.0".into(),
                port: 3000,
            }
        }
    }

    impl Default for DataConfig {
        fn default() -> Self {
            Self {
                dir: "data".into(),
                graph_color: default_graph_color(),
                activity_threshold_minutes: default_activity_threshold(),
            }
        }
    }

    impl ServerConfig {
        pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
            format!("{}:{}", self.bind, self.port).parse()
        }
    }

    pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use plan_api::AppState;
    use plan_providers::SampleStore;
    use plan_ui::{shell, App};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={}:{} data={}",
        appConfig.server.bind,
        appConfig.server.port,
        appConfig.data.dir
    );

    let store = SampleStore::new(&appConfig.data.dir)
        .with_graph_color(appConfig.data.graph_color.clone())
        .with_activity_threshold(appConfig.data.activity_threshold_minutes.saturating_mul(60_000));

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = match appConfig.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!("invalid bind address in {configPath}: {e}, using Leptos site address");
            leptosOptions.site_addr
        }
    };

    let routes = generate_route_list(App);

    let apiRouter = plan_api::api_router(AppState {
        store: store.clone(),
    });

    // Server functions resolve the sample store from the Leptos context.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let store = store.clone();
                move || {
                    leptos::prelude::provide_context(store.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
