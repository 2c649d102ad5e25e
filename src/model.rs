//! The word record and its creation payload.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Requirement message for a missing or blank English field.
pub const ENGLISH_REQUIRED: &str = "English word is required";
/// Requirement message for a missing or blank German field.
pub const GERMAN_REQUIRED: &str = "German word is cannot be blank";

/// A vocabulary entry: an English/German pair with a storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Word {
    pub id: Uuid,
    pub english: String,
    pub german: String,
}

/// Payload for creating or replacing a word. Carries no id; the request path
/// (or the storage layer, on create) decides which record it addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDraft {
    pub english: String,
    pub german: String,
}

impl WordDraft {
    pub fn new(english: impl Into<String>, german: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            german: german.into(),
        }
    }

    /// Extract and validate a draft from a request body. The body must be a
    /// JSON object with both fields present as non-blank strings. Extra keys
    /// (e.g. the id a PUT echoes back) are ignored.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::BadRequest("body must be a JSON object".into()))?;
        let english = required_text(obj.get("english"), ENGLISH_REQUIRED)?;
        let german = required_text(obj.get("german"), GERMAN_REQUIRED)?;
        Ok(Self { english, german })
    }
}

fn required_text(value: Option<&Value>, requirement: &str) -> Result<String, AppError> {
    match value.and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(AppError::Validation(requirement.to_string())),
    }
}

/// Body of a successful DELETE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}
