//! Binary wait flag.

use tokio::sync::watch;

/// A flag that tasks can block on until it is set.
///
/// The binary creates one and never sets it, so waiting on it blocks until
/// something else (the interrupt) ends the wait.
#[derive(Debug)]
pub struct WaitGate {
    tx: watch::Sender<bool>,
}

impl WaitGate {
    /// Create a gate in the unset state.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn is_set(&self) -> bool {
        *self.tx.borrow()
    }

    /// Set the flag, releasing every current and future waiter.
    pub fn set(&self) {
        self.tx.send_replace(true);
    }

    /// Wait until the flag is set. There is no timeout.
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        if rx.wait_for(|set| *set).await.is_err() {
            // Only reachable if the sender is dropped, which `self` prevents.
            // An unset gate never releases.
            std::future::pending::<()>().await;
        }
    }
}

impl Default for WaitGate {
    fn default() -> Self {
        Self::new()
    }
}
