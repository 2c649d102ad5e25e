//! End-to-end tests for the API client against an in-process server.
//!
//! Each test spins the real router on an ephemeral port, backed by the
//! in-memory store, so the client's HTTP calls, error classification, and
//! notifier reporting are exercised over a real socket.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use vocab_builder::{
    app, ApiClient, ApiError, AppState, MemoryWordStore, Notifier, WordDraft,
};

/// Collects every notification for later assertions.
#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

async fn spawn_server() -> SocketAddr {
    let state = AppState::new(Arc::new(MemoryWordStore::default()));
    let router = app(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> (ApiClient<RecordingNotifier>, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let client = ApiClient::with_notifier(format!("http://{addr}"), notifier.clone());
    (client, notifier)
}

#[tokio::test]
async fn round_trip_through_the_client() {
    let addr = spawn_server().await;
    let (client, notifier) = client_for(addr);

    let created = client
        .create_word(&WordDraft::new("cat", "Katze"))
        .await
        .unwrap();
    assert_eq!(created.english, "cat");
    assert_eq!(created.german, "Katze");

    let words = client.get_words().await.unwrap();
    assert_eq!(words, vec![created.clone()]);

    let fetched = client.get_word(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let mut word = created;
    word.german = "die Katze".into();
    let updated = client.update_word(&word).await.unwrap();
    assert_eq!(updated, word);

    let confirmation = client.delete_word(word.id).await.unwrap();
    assert!(!confirmation.message.is_empty());
    assert!(client.get_words().await.unwrap().is_empty());

    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn unknown_id_is_reported_as_http_status() {
    let addr = spawn_server().await;
    let (client, notifier) = client_for(addr);

    let err = client.get_word(uuid::Uuid::new_v4()).await.unwrap_err();
    match err {
        ApiError::HttpStatus {
            status,
            ref status_text,
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert_eq!(notifier.messages(), vec!["404: Not Found".to_string()]);
}

#[tokio::test]
async fn rejected_draft_is_reported_once() {
    let addr = spawn_server().await;
    let (client, notifier) = client_for(addr);

    let err = client
        .create_word(&WordDraft::new("", "Katze"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::HttpStatus { status: 422, .. }));
    assert_eq!(
        notifier.messages(),
        vec!["422: Unprocessable Entity".to_string()]
    );
}

#[tokio::test]
async fn unreachable_server_is_a_connectivity_error() {
    // Bind and drop a listener so the port is very likely closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (client, notifier) = client_for(addr);
    let err = client.get_words().await.unwrap_err();
    assert!(matches!(err, ApiError::Connectivity));
    assert_eq!(
        notifier.messages(),
        vec!["server unreachable; is the API running?".to_string()]
    );
}
