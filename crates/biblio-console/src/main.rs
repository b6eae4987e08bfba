#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use std::time::Duration;

    use biblio_client::{GatewayConfig, DEFAULT_BASE_ORIGIN};
    use serde::Deserialize;

    pub const BACKEND_ORIGIN_ENV: &str = "BIBLIO_BACKEND_ORIGIN";

    #[derive(Deserialize, Clone, Debug, Default)]
    pub struct Config {
        #[serde(default)]
        pub server: ServerConfig,
        #[serde(default)]
        pub backend: BackendConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "0.0.0.0".into(),
                port: 3000,
            }
        }
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct BackendConfig {
        pub origin: String,
        #[serde(default)]
        pub timeout_secs: Option<u64>,
    }

    impl Default for BackendConfig {
        fn default() -> Self {
            Self {
                origin: DEFAULT_BASE_ORIGIN.into(),
                timeout_secs: None,
            }
        }
    }

    impl Config {
        pub fn gateway(&self) -> GatewayConfig {
            GatewayConfig {
                base_origin: self.backend.origin.clone(),
                timeout: self.backend.timeout_secs.map(Duration::from_secs),
            }
        }

        /// Environment wins over the file so deployments can repoint the
        /// backend without editing config.
        pub fn with_origin_override(mut self, origin: Option<String>) -> Self {
            if let Some(origin) = origin.filter(|o| !o.trim().is_empty()) {
                self.backend.origin = origin;
            }
            self
        }
    }

    pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &str) -> Config {
        let config = match std::fs::read_to_string(path) {
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
        };
        config.with_origin_override(std::env::var(BACKEND_ORIGIN_ENV).ok())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn missing_sections_fall_back_to_defaults() {
            let config = parse("[server]\nbind = \"127.0.0.1\"\nport = 8000\n").unwrap();
            assert_eq!(config.server.port, 8000);
            assert_eq!(config.backend.origin, DEFAULT_BASE_ORIGIN);
            assert_eq!(config.gateway().timeout, None);
        }

        #[test]
        fn backend_section_feeds_the_gateway() {
            let config =
                parse("[backend]\norigin = \"http://api.internal:9000\"\ntimeout_secs = 15\n")
                    .unwrap();
            let gateway = config.gateway();
            assert_eq!(gateway.base_origin, "http://api.internal:9000");
            assert_eq!(gateway.timeout, Some(Duration::from_secs(15)));
        }

        #[test]
        fn env_origin_overrides_file() {
            let config = Config::default()
                .with_origin_override(Some("https://biblio.example.org".into()));
            assert_eq!(config.backend.origin, "https://biblio.example.org");

            let config = Config::default().with_origin_override(Some("  ".into()));
            assert_eq!(config.backend.origin, DEFAULT_BASE_ORIGIN);
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use biblio_client::Gateway;
    use biblio_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
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
        "loaded config from {configPath}: bind={}:{} backend={}",
        appConfig.server.bind,
        appConfig.server.port,
        appConfig.backend.origin
    );

    let gateway = Gateway::new(appConfig.gateway()).expect("failed to build backend gateway");

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let mut leptosOptions = conf.leptos_options;
    let addr: std::net::SocketAddr = format!("{}:{}", appConfig.server.bind, appConfig.server.port)
        .parse()
        .unwrap_or(leptosOptions.site_addr);
    leptosOptions.site_addr = addr;

    let routes = generate_route_list(App);

    // Server functions resolve the gateway from context; pages never see it.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let gateway = gateway.clone();
                move || provide_context(gateway.clone())
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
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
