//! Stop notification for the serve loop.

use tokio::sync::broadcast;

/// One-shot stop signal fanned out to every subscriber.
///
/// The startup path subscribes the HTTP server before it starts serving and
/// triggers once a [`ShutdownSignals`](super::signals::ShutdownSignals)
/// handler fires; tests trigger it directly.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver that resolves once [`trigger`](Self::trigger) is called,
    /// including when the trigger happened before the receiver was polled.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscriber to stop. Triggering with no subscribers left is
    /// not an error.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
