//! Protein read endpoints

use axum::extract::{Path, State};
use serde::Serialize;

use gsdb_core::store::{ProteinOps, StoreQueries};

use super::response::ApiResponse;
use super::AppState;
use crate::error::{ApiResult, AppError};

/// One protein with the pathways it belongs to
#[derive(Debug, Serialize)]
pub struct ProteinDetail {
    pub id: i64,
    pub hgnc_symbol: String,
    pub hgnc_id: Option<String>,
    pub pathways: Vec<String>,
}

/// One protein and its pathway memberships
///
/// # Endpoint
///
/// `GET /api/v1/proteins/:symbol`
///
/// # Response
///
/// - `200 OK` - Protein found
/// - `404 Not Found` - Symbol never appeared in an ingested catalog
#[tracing::instrument(skip(state), fields(symbol = %symbol))]
pub async fn get(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> ApiResult<ApiResponse<ProteinDetail>> {
    let protein = state
        .store
        .get_protein_by_symbol(&symbol)?
        .ok_or_else(|| AppError::NotFound(format!("No protein with symbol '{symbol}'")))?;

    let pathways = state.store.pathway_identifiers_for_protein(protein.id)?;

    Ok(ApiResponse::success(ProteinDetail {
        id: protein.id,
        hgnc_symbol: protein.hgnc_symbol,
        hgnc_id: protein.hgnc_id,
        pathways,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::testing::{body_json, test_router};

    #[tokio::test]
    async fn test_get_lists_every_membership() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/proteins/PDS5B")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["hgnc_symbol"], "PDS5B");

        let pathways = body["data"]["pathways"].as_array().unwrap();
        assert_eq!(pathways.len(), 3);
    }

    #[tokio::test]
    async fn test_get_single_membership() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/proteins/KCNE1L")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["pathways"], serde_json::json!(["MYOD_01"]));
    }

    #[tokio::test]
    async fn test_get_unknown_symbol_is_404() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/proteins/NOT_A_GENE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
