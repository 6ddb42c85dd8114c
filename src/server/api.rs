use crate::error::AppError;
use crate::models::{Month, SalesTable, Selection};
use crate::server::AppState;
use crate::services::{aggregator, presenter};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::Query;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Query parameters shared by all /report endpoints
#[derive(Debug, Deserialize, Clone)]
pub struct ReportQuery {
    /// First month of the range (default: first month in the table)
    pub start: Option<String>,

    /// Last month of the range, inclusive (default: last month in the table)
    pub end: Option<String>,

    /// Seller columns to include (can be repeated: seller=Ana&seller=Bruno;
    /// default: every seller column)
    #[serde(default)]
    pub seller: Vec<String>,
}

/// Map domain errors onto HTTP statuses. Selection mistakes are client
/// errors; a missing or corrupt data source is a service problem.
fn error_response(err: AppError) -> Response {
    let status = match &err {
        AppError::EmptySelection(_) | AppError::InvalidRange(_) | AppError::InvalidInput(_) => {
            StatusCode::BAD_REQUEST
        }
        AppError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

/// Parse the month labels, then let `Selection::resolve` fill the defaults
/// (full range, all sellers) shared with the CLI
fn resolve_selection(table: &SalesTable, params: &ReportQuery) -> Result<Selection, AppError> {
    let start = params.start.as_deref().map(str::parse::<Month>).transpose()?;
    let end = params.end.as_deref().map(str::parse::<Month>).transpose()?;
    Selection::resolve(table, start, end, params.seller.clone())
}

async fn load_table(state: &AppState) -> Result<Arc<SalesTable>, AppError> {
    state.data.get(&state.source).await
}

/// GET /report/summary - period metrics for the selected range and sellers
pub async fn summary_handler(
    State(state): State<AppState>,
    Query(params): Query<ReportQuery>,
) -> Response {
    debug!("Summary request: {:?}", params);
    let result = async {
        let table = load_table(&state).await?;
        let selection = resolve_selection(&table, &params)?;
        aggregator::aggregate(&table, &selection)
    }
    .await;

    match result {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /report/total-series - line chart data (month, total)
pub async fn total_series_handler(
    State(state): State<AppState>,
    Query(params): Query<ReportQuery>,
) -> Response {
    let result = async {
        let table = load_table(&state).await?;
        let selection = resolve_selection(&table, &params)?;
        presenter::total_series(&table, &selection)
    }
    .await;

    match result {
        Ok(series) => Json(series).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /report/seller-series - long-form bar chart data (month, seller, value)
pub async fn seller_series_handler(
    State(state): State<AppState>,
    Query(params): Query<ReportQuery>,
) -> Response {
    let result = async {
        let table = load_table(&state).await?;
        let selection = resolve_selection(&table, &params)?;
        presenter::seller_long_form(&table, &selection)
    }
    .await;

    match result {
        Ok(points) => Json(points).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /report/table - currency-formatted detail table
pub async fn table_handler(
    State(state): State<AppState>,
    Query(params): Query<ReportQuery>,
) -> Response {
    let result = async {
        let table = load_table(&state).await?;
        let selection = resolve_selection(&table, &params)?;
        presenter::display_table(&table, &selection)
    }
    .await;

    match result {
        Ok(formatted) => Json(formatted).into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub source: String,
    pub months_loaded: usize,
    pub sellers: usize,
    pub cached_sources: usize,
    pub uptime_secs: u64,
}

/// GET /health - data source and cache status
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let (months_loaded, sellers, status) = match load_table(&state).await {
        Ok(table) => (table.rows.len(), table.sellers.len(), "ok"),
        Err(_) => (0, 0, "data unavailable"),
    };

    Json(HealthResponse {
        status,
        source: state.source.display().to_string(),
        months_loaded,
        sellers,
        cached_sources: state.data.cached_sources().await,
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
    .into_response()
}
