use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::models::AuditEntry;
use crate::errors::YardResult;
use std::sync::Arc;
use tracing::{info, error};

/// Destination of the audit mirror.
#[async_trait]
pub trait AuditWriter: Send + Sync {
    async fn write_entries(&self, entries: Vec<AuditEntry>) -> YardResult<()>;
}

/// Collects audit entries and writes them to the mirror in batches.
pub struct AuditBatcher {
    /// Entries waiting to be written.
    pending: RwLock<Vec<AuditEntry>>,
    /// The number of entries to accumulate before automatically flushing.
    batch_size: usize,
    writer: Arc<dyn AuditWriter>,
}

impl AuditBatcher {
    /// Creates a new `AuditBatcher`.
    ///
    /// # Arguments
    ///
    /// * `batch_size` - The number of entries to accumulate before automatically flushing.
    /// * `writer` - Where flushed entries go.
    pub fn new(batch_size: usize, writer: Arc<dyn AuditWriter>) -> Self {
        Self {
            pending: RwLock::new(Vec::new()),
            batch_size: batch_size.max(1),
            writer,
        }
    }

    /// Queues an entry, flushing once the batch is full.
    pub async fn add_entry(&self, entry: AuditEntry) -> YardResult<()> {
        let mut pending = self.pending.write().await;
        pending.push(entry);

        if pending.len() >= self.batch_size {
            drop(pending);
            self.flush().await?;
        }

        Ok(())
    }

    /// Writes every queued entry.
    ///
    /// On failure the batch is put back in front of anything queued meanwhile, so the next flush retries it.
    pub async fn flush(&self) -> YardResult<()> {
        let mut pending = self.pending.write().await;
        if pending.is_empty() {
            return Ok(());
        }

        let batch = std::mem::take(&mut *pending);
        drop(pending);

        info!("Flushing {} audit entries", batch.len());
        match self.writer.write_entries(batch.clone()).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Failed to flush audit entries: {:?}", e);
                let mut pending = self.pending.write().await;
                let queued_meanwhile = std::mem::replace(&mut *pending, batch);
                pending.extend(queued_meanwhile);
                Err(e)
            }
        }
    }

    /// Returns the current number of queued entries.
    pub async fn queue_size(&self) -> usize {
        self.pending.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::YardError;
    use crate::models::local_now;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingWriter {
        written: Mutex<Vec<AuditEntry>>,
        failing: AtomicBool,
    }

    #[async_trait]
    impl AuditWriter for RecordingWriter {
        async fn write_entries(&self, entries: Vec<AuditEntry>) -> YardResult<()> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(YardError::DatabaseError(sqlx_oldapi::Error::PoolTimedOut));
            }
            self.written.lock().await.extend(entries);
            Ok(())
        }
    }

    fn entry(action: &str) -> AuditEntry {
        AuditEntry::new(action, Some(1), None, action.to_lowercase(), local_now())
    }

    #[tokio::test]
    async fn flushes_when_batch_is_full() {
        let writer = Arc::new(RecordingWriter::default());
        let batcher = AuditBatcher::new(2, writer.clone());

        batcher.add_entry(entry("GATE_ENTRY")).await.unwrap();
        assert_eq!(batcher.queue_size().await, 1);
        assert!(writer.written.lock().await.is_empty());

        batcher.add_entry(entry("YARD_AVAILABLE")).await.unwrap();
        assert_eq!(batcher.queue_size().await, 0);
        assert_eq!(writer.written.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn failed_flush_keeps_entries_for_retry() {
        let writer = Arc::new(RecordingWriter::default());
        writer.failing.store(true, Ordering::SeqCst);
        let batcher = AuditBatcher::new(10, writer.clone());

        batcher.add_entry(entry("GATE_ENTRY")).await.unwrap();
        assert!(batcher.flush().await.is_err());
        assert_eq!(batcher.queue_size().await, 1);

        writer.failing.store(false, Ordering::SeqCst);
        batcher.flush().await.unwrap();
        let written = writer.written.lock().await;
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].action, "GATE_ENTRY");
    }
}
