//! Ordered background persistence
//!
//! Store mutations hand the re-serialized document to a [`Persister`] and
//! return immediately. A single task drains the queue and writes documents in
//! the order they were scheduled, so the stored copy of a key always ends up
//! as the last document scheduled for it.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::storage::SharedStore;

/// Counter of writes that failed or were dropped
pub const PERSIST_FAILURES_METRIC: &str = "gymmania_persist_failures_total";

enum Command {
    Write { key: String, value: String },
    Flush(oneshot::Sender<()>),
}

/// Handle to the background writer. Cloning shares the same queue.
#[derive(Debug, Clone)]
pub struct Persister {
    tx: mpsc::UnboundedSender<Command>,
}

impl Persister {
    /// Start the writer task on the current tokio runtime
    pub fn spawn(store: SharedStore) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(store, rx));
        Self { tx }
    }

    /// Queue a document write. Never blocks and never fails the caller.
    pub fn schedule(&self, key: &str, value: String) {
        debug!(key, bytes = value.len(), "Scheduling persist");
        let command = Command::Write {
            key: key.to_string(),
            value,
        };
        if self.tx.send(command).is_err() {
            warn!(key, "Persist queue closed; write dropped");
            metrics::counter!(PERSIST_FAILURES_METRIC).increment(1);
        }
    }

    /// Wait until every write scheduled before this call has been attempted
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Command::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}

async fn run_writer(store: SharedStore, mut rx: mpsc::UnboundedReceiver<Command>) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::Write { key, value } => match store.set(&key, &value).await {
                Ok(()) => debug!(key = %key, backend = store.backend(), "Persisted document"),
                Err(e) => {
                    warn!(key = %key, error = %e, "Failed to persist document");
                    metrics::counter!(PERSIST_FAILURES_METRIC).increment(1);
                }
            },
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}
