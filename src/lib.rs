//! Vocab builder: word (English/German) CRUD backend and its typed HTTP client.

pub mod client;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use client::{ApiClient, ApiError, Notifier, TracingNotifier};
pub use error::AppError;
pub use model::{DeleteConfirmation, Word, WordDraft};
pub use routes::{app, common_routes, word_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_vocab_table, MemoryWordStore, PgWordStore, WordStore};
