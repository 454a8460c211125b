// GET/POST handlers for the read API and agent ingestion

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use super::AppState;
use crate::liveness;
use crate::models::ClientsResponse;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/clients — latest snapshot + derived liveness for every reporting
/// agent, ordered by client id.
pub(super) async fn list_clients_handler(State(state): State<AppState>) -> impl IntoResponse {
    let clients = state.query.list_clients(liveness::now_unix()).await;
    axum::Json(ClientsResponse { clients })
}

#[derive(Debug, Deserialize)]
pub(super) struct HistoryParams {
    limit: Option<i64>,
}

/// GET /api/clients/{client_id}/metrics?limit=N — raw snapshots, newest last.
/// Unknown clients get 200 with an empty array; pollers tolerate empty, not 404.
pub(super) async fn client_history_handler(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or_else(|| state.query.default_history_limit());
    let snapshots = state.query.get_history(&client_id, limit).await;
    axum::Json(snapshots)
}

/// POST /api/ingest — one snapshot per call. 400 with the validation message
/// on rejection; the snapshot is dropped, not queued.
pub(super) async fn ingest_handler(
    State(state): State<AppState>,
    axum::Json(snapshot): axum::Json<crate::models::Snapshot>,
) -> impl IntoResponse {
    match state.ingest.ingest(snapshot).await {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(serde_json::json!({ "status": "accepted" })),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            axum::Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}
