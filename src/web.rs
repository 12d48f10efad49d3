use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::{self, SharedState};
use crate::config::ServerConfig;

/// CORS policy admitting the configured browser origins
#[must_use]
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

/// Router with CORS and request tracing applied
pub fn app(server: &ServerConfig, state: SharedState) -> Router {
    api::router(state)
        .layer(cors_layer(&server.cors_origins))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(server: &ServerConfig, state: SharedState) -> Result<()> {
    let app = app(server, state);

    let addr = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("TourEase API listening on http://{}", addr);
    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;
    Ok(())
}
