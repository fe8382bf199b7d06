//! Pathway read endpoints
//!
//! # Route Structure
//!
//! - `GET /api/v1/pathways` - List every stored pathway
//! - `GET /api/v1/pathways/search?q=<substring>` - Substring search over names
//! - `GET /api/v1/pathways/sizes` - Gene set size per pathway
//! - `GET /api/v1/pathways/:identifier` - One pathway with its gene set

use std::collections::{BTreeMap, BTreeSet};

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use gsdb_core::models::Pathway;
use gsdb_core::store::{PathwayOps, StoreQueries};

use super::response::ApiResponse;
use super::AppState;
use crate::error::{ApiResult, AppError};

/// Pathway as served by the API
#[derive(Debug, Serialize)]
pub struct PathwayView {
    pub id: i64,
    pub identifier: String,
    pub name: String,
    pub url: String,
}

impl From<Pathway> for PathwayView {
    fn from(pathway: Pathway) -> Self {
        Self {
            url: pathway.url(),
            id: pathway.id,
            identifier: pathway.identifier,
            name: pathway.name,
        }
    }
}

/// One pathway with its full gene set
#[derive(Debug, Serialize)]
pub struct PathwayDetail {
    #[serde(flatten)]
    pub pathway: PathwayView,
    pub pathway_size: usize,
    pub gene_set: BTreeSet<String>,
}

/// Query parameters for pathway search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
}

/// List every stored pathway
///
/// # Endpoint
///
/// `GET /api/v1/pathways`
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> ApiResult<ApiResponse<Vec<PathwayView>>> {
    let pathways = state.store.list_pathways()?;

    tracing::debug!(count = pathways.len(), "Pathways listed via API");

    Ok(ApiResponse::success(
        pathways.into_iter().map(PathwayView::from).collect(),
    ))
}

/// Case-sensitive substring search over pathway names
///
/// # Endpoint
///
/// `GET /api/v1/pathways/search?q=MYOD&limit=10`
///
/// # Response
///
/// - `200 OK` - Matching pathways, possibly empty
/// - `400 Bad Request` - Empty search term
#[tracing::instrument(skip(state, params), fields(q = %params.q))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<ApiResponse<Vec<PathwayView>>> {
    if params.q.is_empty() {
        return Err(AppError::BadRequest(
            "Search term 'q' cannot be empty".to_string(),
        ));
    }

    let hits = state
        .store
        .search_pathways_by_name(&params.q, params.limit)?;

    Ok(ApiResponse::success(
        hits.into_iter().map(PathwayView::from).collect(),
    ))
}

/// Gene set size for every pathway, keyed by pathway name
///
/// # Endpoint
///
/// `GET /api/v1/pathways/sizes`
#[tracing::instrument(skip(state))]
pub async fn sizes(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<BTreeMap<String, usize>>> {
    Ok(ApiResponse::success(
        state.store.pathway_size_distribution()?,
    ))
}

/// One pathway with its full gene set
///
/// # Endpoint
///
/// `GET /api/v1/pathways/:identifier`
///
/// # Response
///
/// - `200 OK` - Pathway found
/// - `404 Not Found` - No pathway with that identifier
#[tracing::instrument(skip(state), fields(identifier = %identifier))]
pub async fn get(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<ApiResponse<PathwayDetail>> {
    let pathway = state
        .store
        .get_pathway_by_identifier(&identifier)?
        .ok_or_else(|| AppError::NotFound(format!("No pathway with identifier '{identifier}'")))?;

    let gene_set = state.store.pathway_gene_set(pathway.id)?;

    Ok(ApiResponse::success(PathwayDetail {
        pathway: pathway.into(),
        pathway_size: gene_set.len(),
        gene_set,
    }))
}
