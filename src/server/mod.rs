pub mod api;

use crate::services::SharedDataStore;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub data: SharedDataStore,
    pub source: PathBuf,
    pub started_at: Instant,
}

/// Start the axum server
pub async fn serve(
    shared_data: SharedDataStore,
    source: PathBuf,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting painel-comercial server");
    tracing::info!("Data source: {}", source.display());

    let app_state = AppState {
        data: shared_data,
        source,
        started_at: Instant::now(),
    };

    // Read-only reporting API, any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    tracing::info!("Registering routes:");
    tracing::info!("  GET /health");
    tracing::info!("  GET /report/summary?start=Enero&end=Junio&seller=Ana&seller=Bruno");
    tracing::info!("  GET /report/total-series");
    tracing::info!("  GET /report/seller-series");
    tracing::info!("  GET /report/table");

    let app = Router::new()
        .route("/health", get(api::health_handler))
        .route("/report/summary", get(api::summary_handler))
        .route("/report/total-series", get(api::total_series_handler))
        .route("/report/seller-series", get(api::seller_series_handler))
        .route("/report/table", get(api::table_handler))
        .layer(cors)
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
