use tokio::sync::Notify;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use log::{info, error};
use crate::errors::YardResult;
use crate::state_management::audit_batcher::AuditBatcher;

/// Manages the shutdown of the yard-control service.
pub struct ServiceLifecycle {
    /// Signal for triggering and waiting for shutdown.
    shutdown_signal: Arc<Notify>,
    /// Boolean flag to indicate if shutdown has been triggered.
    shutdown_triggered: Arc<AtomicBool>,
    /// Audit mirror flushed during shutdown, when one is configured.
    audit_batcher: Option<Arc<AuditBatcher>>,
}

impl ServiceLifecycle {
    /// Creates a new `ServiceLifecycle`.
    ///
    /// # Arguments
    ///
    /// * `audit_batcher` - The batcher to flush on shutdown, if the audit mirror is enabled.
    pub fn new(audit_batcher: Option<Arc<AuditBatcher>>) -> Self {
        Self {
            shutdown_signal: Arc::new(Notify::new()),
            shutdown_triggered: Arc::new(AtomicBool::new(false)),
            audit_batcher,
        }
    }

    /// Waits for the shutdown signal.
    ///
    /// Returns immediately if shutdown was already triggered.
    pub async fn wait_for_shutdown(&self) {
        let notified = self.shutdown_signal.notified();
        if self.is_shutdown_triggered() {
            return;
        }
        info!("Waiting for shutdown signal");
        notified.await;
        info!("Shutdown signal received");
    }

    /// Triggers the shutdown signal.
    ///
    /// This method notifies all tasks waiting on the shutdown signal to begin their shutdown process.
    pub fn trigger_shutdown(&self) {
        info!("Triggering shutdown");
        self.shutdown_triggered.store(true, Ordering::SeqCst);
        self.shutdown_signal.notify_waiters();
    }

    /// Flushes whatever the audit mirror still holds.
    pub async fn cleanup(&self) -> YardResult<()> {
        info!("Starting cleanup process");

        if let Some(batcher) = &self.audit_batcher {
            if let Err(e) = batcher.flush().await {
                error!("Error flushing audit entries during cleanup: {:?}", e);
            }
        }

        info!("Cleanup process completed");
        Ok(())
    }

    pub fn is_shutdown_triggered(&self) -> bool {
        self.shutdown_triggered.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn waiters_wake_on_trigger() {
        let lifecycle = Arc::new(ServiceLifecycle::new(None));
        let waiter = {
            let lifecycle = Arc::clone(&lifecycle);
            tokio::spawn(async move { lifecycle.wait_for_shutdown().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        lifecycle.trigger_shutdown();
        tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
        assert!(lifecycle.is_shutdown_triggered());
    }

    #[tokio::test]
    async fn late_waiter_returns_immediately() {
        let lifecycle = ServiceLifecycle::new(None);
        lifecycle.trigger_shutdown();
        tokio::time::timeout(Duration::from_millis(100), lifecycle.wait_for_shutdown()).await.unwrap();
        lifecycle.cleanup().await.unwrap();
    }
}
