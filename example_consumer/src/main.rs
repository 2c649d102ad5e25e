//! Example consumer: drives the API client against a running server.
//!
//! Start the server first (`cargo run --bin vocab-server`), then
//! `cargo run -p example-consumer`. Point `VOCAB_API_URL` elsewhere if the
//! server is not on localhost:3000.

use vocab_builder::{ApiClient, WordDraft};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("example_consumer=info,vocab_builder=info")
            }),
        )
        .init();

    let base_url =
        std::env::var("VOCAB_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());
    let client = ApiClient::new(base_url);

    let mut word = client.create_word(&WordDraft::new("cat", "Katze")).await?;
    tracing::info!(id = %word.id, "created {} / {}", word.english, word.german);

    let words = client.get_words().await?;
    tracing::info!("collection holds {} word(s)", words.len());

    word.german = "die Katze".into();
    let updated = client.update_word(&word).await?;
    tracing::info!(id = %updated.id, "updated to {} / {}", updated.english, updated.german);

    let confirmation = client.delete_word(updated.id).await?;
    tracing::info!("{}", confirmation.message);
    Ok(())
}
