//! Word storage: PostgreSQL store, in-memory store, and bootstrap DDL.

use crate::error::AppError;
use crate::model::{Word, WordDraft};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::collections::HashMap;
use std::str::FromStr;
use tokio::sync::RwLock;
use uuid::Uuid;

/// CRUD contract for the word collection. Each call is a single storage
/// operation; there are no cross-call transaction boundaries.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// All words, order unspecified.
    async fn list(&self) -> Result<Vec<Word>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<Word>, AppError>;
    /// Insert a new word; the store assigns the id.
    async fn create(&self, draft: &WordDraft) -> Result<Word, AppError>;
    /// Replace both text fields of an existing word. None for an unknown id.
    async fn update(&self, id: Uuid, draft: &WordDraft) -> Result<Option<Word>, AppError>;
    /// Remove one word, returning it. None for an unknown id.
    async fn delete(&self, id: Uuid) -> Result<Option<Word>, AppError>;
    /// Readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed store over one shared pool.
#[derive(Clone)]
pub struct PgWordStore {
    pool: PgPool,
}

impl PgWordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordStore for PgWordStore {
    async fn list(&self) -> Result<Vec<Word>, AppError> {
        let sql = "SELECT id, english, german FROM vocab";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Word>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Word>, AppError> {
        let sql = "SELECT id, english, german FROM vocab WHERE id = $1";
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Word>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, draft: &WordDraft) -> Result<Word, AppError> {
        let sql = "INSERT INTO vocab (english, german) VALUES ($1, $2) RETURNING id, english, german";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Word>(sql)
            .bind(&draft.english)
            .bind(&draft.german)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, draft: &WordDraft) -> Result<Option<Word>, AppError> {
        let sql = "UPDATE vocab SET english = $2, german = $3 WHERE id = $1 RETURNING id, english, german";
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Word>(sql)
            .bind(id)
            .bind(&draft.english)
            .bind(&draft.german)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Word>, AppError> {
        let sql = "DELETE FROM vocab WHERE id = $1 RETURNING id, english, german";
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Word>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// In-process store over a map, with v4 ids assigned on create. Same contract
/// as the Postgres store; backs tests and demos without a live database.
#[derive(Default)]
pub struct MemoryWordStore {
    words: RwLock<HashMap<Uuid, Word>>,
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn list(&self) -> Result<Vec<Word>, AppError> {
        Ok(self.words.read().await.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Word>, AppError> {
        Ok(self.words.read().await.get(&id).cloned())
    }

    async fn create(&self, draft: &WordDraft) -> Result<Word, AppError> {
        let word = Word {
            id: Uuid::new_v4(),
            english: draft.english.clone(),
            german: draft.german.clone(),
        };
        self.words.write().await.insert(word.id, word.clone());
        Ok(word)
    }

    async fn update(&self, id: Uuid, draft: &WordDraft) -> Result<Option<Word>, AppError> {
        let mut words = self.words.write().await;
        match words.get_mut(&id) {
            Some(word) => {
                word.english = draft.english.clone();
                word.german = draft.german.clone();
                Ok(Some(word.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Word>, AppError> {
        Ok(self.words.write().await.remove(&id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Create the vocab table if missing. Ids are assigned by the database.
pub async fn ensure_vocab_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vocab (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            english TEXT NOT NULL,
            german TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to
/// the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_create_then_get_round_trips() {
        let store = MemoryWordStore::default();
        let created = store.create(&WordDraft::new("cat", "Katze")).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn memory_store_update_unknown_id_leaves_set_unchanged() {
        let store = MemoryWordStore::default();
        store.create(&WordDraft::new("cat", "Katze")).await.unwrap();
        let updated = store
            .update(Uuid::new_v4(), &WordDraft::new("dog", "Hund"))
            .await
            .unwrap();
        assert!(updated.is_none());
        let words = store.list().await.unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].english, "cat");
    }

    #[tokio::test]
    async fn memory_store_delete_removes_exactly_one() {
        let store = MemoryWordStore::default();
        let keep = store.create(&WordDraft::new("cat", "Katze")).await.unwrap();
        let gone = store.create(&WordDraft::new("dog", "Hund")).await.unwrap();
        let removed = store.delete(gone.id).await.unwrap();
        assert_eq!(removed.map(|w| w.id), Some(gone.id));
        assert!(store.get(gone.id).await.unwrap().is_none());
        assert_eq!(store.list().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn memory_store_allows_duplicate_pairs() {
        let store = MemoryWordStore::default();
        let a = store.create(&WordDraft::new("cat", "Katze")).await.unwrap();
        let b = store.create(&WordDraft::new("cat", "Katze")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[test]
    fn db_name_parsed_from_url() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost:5432/vocab").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(name, "vocab");
    }
}
