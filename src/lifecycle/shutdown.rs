//! Shutdown coordination.
//!
//! In the binaries the coordinator is fired by the OS signal watcher; in
//! tests it is fired directly.

use tokio::sync::broadcast;

use crate::lifecycle::signals;

/// Broadcast handle that tells running servers to stop.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Get a receiver for `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Tell every subscriber to stop.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Spawn a task that fires the coordinator on Ctrl+C or SIGTERM.
    ///
    /// The coordinator moves into the task, so subscribe before calling.
    pub fn trigger_on_signal(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            signals::shutdown_signal().await;
            self.trigger();
        })
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve once `rx` receives a trigger.
///
/// A coordinator dropped without triggering never resolves.
pub async fn requested(rx: &mut broadcast::Receiver<()>) {
    if rx.recv().await.is_err() {
        std::future::pending::<()>().await;
    }
}
