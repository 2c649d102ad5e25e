//! Router assembly: word resource, common routes, CORS, tracing, 404 fallback.

mod common;
mod words;

pub use common::common_routes;
pub use words::word_routes;

use crate::state::AppState;
use axum::{
    http::{StatusCode, Uri},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Unmatched routes answer 404 naming the path that missed.
async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "url": format!("{} not found", uri.path()) })),
    )
}

/// The complete application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(word_routes(state))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
