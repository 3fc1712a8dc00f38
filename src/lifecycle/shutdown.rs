//! Shutdown coordination for the server.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Wraps a one-slot broadcast channel: triggering never blocks regardless
/// of whether anyone is currently waiting, and triggering twice is a no-op
/// for subscribers that have already observed the signal.
#[derive(Clone)]
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_wakes_subscriber() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        shutdown.trigger();
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_double_trigger_is_harmless() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        shutdown.trigger();
        shutdown.trigger();
        // The subscriber observes the signal; the repeat neither panics
        // nor closes the channel out from under later subscribers.
        assert!(rx.recv().await.is_ok());
        let mut late = shutdown.subscribe();
        shutdown.trigger();
        assert!(late.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_trigger_without_subscribers_does_not_block() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
    }
}
