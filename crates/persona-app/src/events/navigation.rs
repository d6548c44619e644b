use std::time::Duration;

use kanal::AsyncSender;
use persona_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Holds the single outstanding deferred navigation, if any
pub struct NavigationScheduler {
    delay: Duration,
    parent: CancellationToken,
    pending: Option<CancellationToken>,
}

impl NavigationScheduler {
    pub fn new(delay: Duration, parent: CancellationToken) -> Self {
        Self {
            delay,
            parent,
            pending: None,
        }
    }

    /// Fire `NavigationSettled { ticket }` after the settle delay,
    /// cancelling whatever was scheduled before.
    pub fn schedule(&mut self, ticket: u64, tx: &AsyncSender<AppEvent>) {
        self.cancel();

        let token = self.parent.child_token();
        self.pending = Some(token.clone());
        let delay = self.delay;
        let tx = tx.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(ticket, "Deferred navigation cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    if let Err(e) = tx.send(AppEvent::NavigationSettled { ticket }).await {
                        tracing::warn!(ticket, "Failed to deliver deferred navigation: {e}");
                    }
                }
            }
        });
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    /// The scheduled step was applied
    pub fn complete(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for NavigationScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
