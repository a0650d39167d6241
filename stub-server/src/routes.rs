//! HTTP routes
//!
//! Every request other than `/health` is answered from the network stub,
//! matched on method and path-and-query so clients can use any host.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use faketweet::{HttpMethod, InMemoryNetworkStub};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub stub: Arc<InMemoryNetworkStub>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Replay the next registered body for the request
async fn serve_stub(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ServerError> {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let not_stubbed = || ServerError::NotStubbed {
        method: method.to_string(),
        target: target.to_string(),
    };

    let stub_method: HttpMethod = method.as_str().parse().map_err(|_| not_stubbed())?;
    let body = state
        .stub
        .respond(stub_method, target)?
        .ok_or_else(not_stubbed)?;

    Ok(([(header::CONTENT_TYPE, body.content_type)], body.body).into_response())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(serve_stub)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
