// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::ingest::IngestService;
use crate::query::QueryService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) ingest: Arc<IngestService>,
    pub(crate) query: Arc<QueryService>,
}

pub fn app(ingest: Arc<IngestService>, query: Arc<QueryService>) -> Router {
    let state = AppState { ingest, query };
    Router::new()
        .route("/", get(|| async { "fleetmon: fleet telemetry aggregation" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/clients", get(http::list_clients_handler)) // GET /api/clients
        .route(
            "/api/clients/{client_id}/metrics",
            get(http::client_history_handler),
        ) // GET /api/clients/{id}/metrics?limit=N
        .route("/api/ingest", post(http::ingest_handler)) // POST /api/ingest
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
