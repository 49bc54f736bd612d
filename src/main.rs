use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use clinic_site::config::AppConfig;
use clinic_site::handlers;
use clinic_site::services::clock::SystemClock;
use clinic_site::services::intake::sheetdb::SheetDbEndpoint;
use clinic_site::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "orthopedic practice website: expert care for bones, joints and mobility"
    );
    let endpoint = SheetDbEndpoint::new(config.intake_endpoint_url.clone());
    tracing::info!("appointment requests go to {}", endpoint.url());

    let state = Arc::new(AppState::new(
        config.clone(),
        Box::new(endpoint),
        Arc::new(SystemClock),
    ));

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/dev/bindings", get(handlers::dev::bindings))
        .route("/api/dev/sessions", post(handlers::dev::create_session))
        .route(
            "/api/dev/sessions/:id",
            get(handlers::dev::get_session).delete(handlers::dev::delete_session),
        )
        .route(
            "/api/dev/sessions/:id/events",
            post(handlers::dev::post_event),
        )
        .route(
            "/api/dev/sessions/:id/advance",
            post(handlers::dev::advance),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
