pub mod cors;
pub mod handlers;
pub mod types;

use crate::{Result, config::Config, detection::HttpDetectionClient};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/detect",
            post(handlers::detect).options(handlers::preflight),
        )
        .route("/health", get(handlers::health))
        .layer(cors::cors_headers())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let detector = HttpDetectionClient::new(&config.detection)?;

    match &config.detection.base_url {
        Some(base_url) => info!("Relaying to detection service at {}", base_url),
        None => warn!("Detection service URL is not set, /detect will answer 500"),
    }

    let app_state = AppState::new(config.detection.base_url.clone(), Arc::new(detector));
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
