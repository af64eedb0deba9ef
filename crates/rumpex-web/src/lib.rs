//! Rumpex Web Server
//!
//! Axum-based HTTP surface for the analysis relay.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
///
/// The CORS layer wraps the whole router, so every response — success,
/// error envelope or parse fallback — carries the permissive header set,
/// and OPTIONS preflights are answered with an empty 200 before any
/// handler runs.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/analyze", post(routes::analyze::analyze))
        .route("/api/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Relay listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
