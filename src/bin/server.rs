//! Server binary: ensures the database and vocab table exist, then serves the
//! word API on the configured port.

use std::sync::Arc;
use tokio::net::TcpListener;
use vocab_builder::{app, ensure_database_exists, ensure_vocab_table, AppState, PgWordStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vocab_builder=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/vocab".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    ensure_vocab_table(&pool).await?;

    let state = AppState::new(Arc::new(PgWordStore::new(pool)));
    let app = app(state);

    let port: u16 = match std::env::var("PORT") {
        Ok(v) => v.parse()?,
        Err(_) => 3000,
    };
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
