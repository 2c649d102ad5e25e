//! Typed HTTP client for the word resource.
//!
//! One method per server operation. Every failure is classified into a tagged
//! [`ApiError`], reported once through the injected [`Notifier`], and then
//! returned to the caller so UI code can react as well.

pub mod notify;

pub use notify::{Notifier, TracingNotifier};

use crate::model::{DeleteConfirmation, Word, WordDraft};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

/// How a failed call is presented to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },
    /// The request went out but no response came back.
    #[error("server unreachable; is the API running?")]
    Connectivity,
    /// Anything else: request construction, body decode.
    #[error("Error: {0}")]
    Client(String),
}

pub struct ApiClient<N: Notifier = TracingNotifier> {
    http: reqwest::Client,
    base_url: String,
    notifier: N,
}

impl ApiClient<TracingNotifier> {
    /// Client against `base_url` (e.g. `http://localhost:3000`), reporting
    /// failures through tracing.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_notifier(base_url, TracingNotifier)
    }
}

impl<N: Notifier> ApiClient<N> {
    pub fn with_notifier(base_url: impl Into<String>, notifier: N) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            notifier,
        }
    }

    pub async fn get_words(&self) -> Result<Vec<Word>, ApiError> {
        self.report(self.request_json(self.http.get(self.collection_url())).await)
    }

    pub async fn get_word(&self, id: Uuid) -> Result<Word, ApiError> {
        self.report(self.request_json(self.http.get(self.word_url(id))).await)
    }

    pub async fn create_word(&self, draft: &WordDraft) -> Result<Word, ApiError> {
        self.report(
            self.request_json(self.http.post(self.collection_url()).json(draft))
                .await,
        )
    }

    /// PUT the full record back under its own id.
    pub async fn update_word(&self, word: &Word) -> Result<Word, ApiError> {
        self.report(
            self.request_json(self.http.put(self.word_url(word.id)).json(word))
                .await,
        )
    }

    pub async fn delete_word(&self, id: Uuid) -> Result<DeleteConfirmation, ApiError> {
        self.report(self.request_json(self.http.delete(self.word_url(id))).await)
    }

    fn collection_url(&self) -> String {
        format!("{}/words/", self.base_url)
    }

    fn word_url(&self, id: Uuid) -> String {
        format!("{}/words/{}", self.base_url, id)
    }

    /// Report a failure once, then hand it back so the caller can also react.
    fn report<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            self.notifier.notify(&err.to_string());
        }
        result
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = req.send().await.map_err(classify_transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }
        resp.json().await.map_err(|e| ApiError::Client(e.to_string()))
    }
}

/// Errors out of `send()` mean no response was received. Builder failures
/// happen before anything goes on the wire and stay client errors.
fn classify_transport(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::Client(err.to_string())
    } else {
        ApiError::Connectivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_displays_status_and_text() {
        let err = ApiError::HttpStatus {
            status: 404,
            status_text: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "404: Not Found");
    }

    #[test]
    fn connectivity_displays_fixed_message() {
        assert_eq!(
            ApiError::Connectivity.to_string(),
            "server unreachable; is the API running?"
        );
    }

    #[test]
    fn client_error_displays_raw_message() {
        let err = ApiError::Client("builder exploded".into());
        assert_eq!(err.to_string(), "Error: builder exploded");
    }

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let client = ApiClient::new("http://localhost:3000///");
        assert_eq!(client.collection_url(), "http://localhost:3000/words/");
    }
}
