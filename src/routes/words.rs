//! Word resource routes. The collection answers with and without the
//! trailing slash; axum treats the two as distinct paths.

use crate::handlers::words::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn word_routes(state: AppState) -> Router {
    Router::new()
        .route("/words", get(list).post(create))
        .route("/words/", get(list).post(create))
        .route(
            "/words/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
