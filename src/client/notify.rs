//! Failure notification seam for the API client.

/// Receives one message per failed client call. Injected into `ApiClient` so
/// the delivery channel (log line, UI toast) stays the caller's choice.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Logs notifications through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::error!("{message}");
    }
}
