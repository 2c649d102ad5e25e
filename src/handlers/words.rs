//! Word CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{DeleteConfirmation, Word, WordDraft};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest("invalid id".into()))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Word>>, AppError> {
    let words = state.store.list().await?;
    Ok(Json(words))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Word>, AppError> {
    let id = parse_id(&id_str)?;
    let word = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(Json(word))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Word>), AppError> {
    let draft = WordDraft::from_body(&body)?;
    let word = state.store.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(word)))
}

/// PUT with the full record in the body. The path id is authoritative; an id
/// echoed in the body is ignored.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Word>, AppError> {
    let id = parse_id(&id_str)?;
    let draft = WordDraft::from_body(&body)?;
    let word = state
        .store
        .update(id, &draft)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(Json(word))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    let id = parse_id(&id_str)?;
    state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(Json(DeleteConfirmation {
        message: "word successfully deleted".into(),
    }))
}
