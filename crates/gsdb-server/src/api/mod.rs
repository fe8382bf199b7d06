//! HTTP surface of the admin server
//!
//! Every route is read-only: pathway lookups, protein lookups, enrichment
//! queries, and service health. The store is opened once and shared across
//! handlers.

pub mod enrichment;
pub mod pathways;
pub mod proteins;
pub mod response;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use gsdb_core::store::{PathwayOps, Store};
use serde_json::json;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

/// Open the store and serve the API until a shutdown signal arrives
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = match &config.database {
        Some(path) => Store::open(path)?,
        None => Store::open_default()?,
    };

    let state = AppState {
        store: Arc::new(store),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let api_v1 = Router::new()
        .route("/pathways", get(pathways::list))
        .route("/pathways/search", get(pathways::search))
        .route("/pathways/sizes", get(pathways::sizes))
        .route("/pathways/:identifier", get(pathways::get))
        .route("/proteins/:symbol", get(proteins::get))
        .route("/enrichment", post(enrichment::query));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "gsdb-server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Health check handler
///
/// Touches the store so a corrupt or missing database file shows up here
/// instead of in the first real query.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.count_pathways() {
        Ok(pathways) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "pathways": pathways
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Store health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy" })),
            )
                .into_response()
        }
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
