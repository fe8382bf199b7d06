//! Enrichment query endpoint

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use gsdb_core::EnrichmentResult;

use super::response::ApiResponse;
use super::AppState;
use crate::error::ApiResult;

/// Request body for an enrichment query
#[derive(Debug, Deserialize)]
pub struct EnrichmentRequest {
    pub gene_symbols: Vec<String>,
}

/// Map a gene list onto every stored pathway it overlaps
///
/// # Endpoint
///
/// `POST /api/v1/enrichment`
///
/// # Request Body
///
/// ```json
/// { "gene_symbols": ["PDS5B", "MEF2C"] }
/// ```
///
/// # Response
///
/// Results keyed by pathway identifier. Unknown symbols are skipped, so a
/// fully unmatched query returns an empty object.
#[tracing::instrument(skip(state, request), fields(symbols = request.gene_symbols.len()))]
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<EnrichmentRequest>,
) -> ApiResult<ApiResponse<HashMap<String, EnrichmentResult>>> {
    let results = state.store.query_gene_set(&request.gene_symbols)?;

    tracing::debug!(pathways = results.len(), "Enrichment query served via API");

    Ok(ApiResponse::success(results))
}
