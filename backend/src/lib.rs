use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod error;
pub mod config {
    pub mod env_config;
}
pub mod api {
    pub mod telegram;
}
pub mod handlers {
    pub mod lead_dtos;
    pub mod lead_handlers;
}
pub mod utils {
    pub mod lead_message;
    pub mod logging;
}

use api::telegram::TelegramClient;
use config::env_config::Config;
use handlers::lead_handlers;

pub struct AppState {
    pub config: Config,
    pub telegram: TelegramClient,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let telegram = TelegramClient::from_config(&config)?;
        Ok(Self { config, telegram })
    }
}

/// Builds the full router: lead intake, health probe and, when a site
/// directory is configured, the static pages served with caching disabled.
pub fn app(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/api/submit", post(lead_handlers::submit_lead))
        .route("/health", get(lead_handlers::health_check));

    if let Some(dir) = &state.config.static_dir {
        let site = Router::new()
            .fallback_service(ServeDir::new(dir))
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache, no-store, must-revalidate"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::PRAGMA,
                HeaderValue::from_static("no-cache"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::EXPIRES,
                HeaderValue::from_static("0"),
            ));
        router = router.merge(site);
    }

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            // The landing page is hosted separately, so any origin may post leads.
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(Any)
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}
