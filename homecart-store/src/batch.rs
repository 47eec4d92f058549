//! Chunked batch writes.

use crate::document::DocumentStore;
use crate::error::StoreResult;
use crate::write::{WriteOp, MAX_BATCH_OPS};
use tracing::debug;

/// Commits an ordered sequence of writes in fixed-size chunks.
///
/// Chunks commit independently and sequentially; a failure in chunk *k*
/// leaves chunks `1..k-1` applied and aborts the rest. There is no
/// compensating rollback — recovery is re-running the command, which is safe
/// as long as the writes are keyed by stable document ids.
pub struct BatchWriter<'a> {
    store: &'a dyn DocumentStore,
    chunk_size: usize,
}

/// What a completed run committed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: usize,
    pub chunks: usize,
}

impl<'a> BatchWriter<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            store,
            chunk_size: MAX_BATCH_OPS,
        }
    }

    /// Overrides the chunk size, clamped to the store's atomic commit cap.
    pub fn with_chunk_size(store: &'a dyn DocumentStore, chunk_size: usize) -> Self {
        Self {
            store,
            chunk_size: chunk_size.clamp(1, MAX_BATCH_OPS),
        }
    }

    pub async fn write_all(&self, writes: Vec<WriteOp>) -> StoreResult<BatchReport> {
        self.write_all_with(writes, |_, _| {}).await
    }

    /// Commits all writes, invoking `progress(committed_so_far, total)` after
    /// each chunk resolves. Chunk N+1 is only issued once chunk N commits.
    pub async fn write_all_with<F>(
        &self,
        writes: Vec<WriteOp>,
        mut progress: F,
    ) -> StoreResult<BatchReport>
    where
        F: FnMut(usize, usize),
    {
        let total = writes.len();
        let mut report = BatchReport::default();

        for chunk in writes.chunks(self.chunk_size) {
            self.store.commit(chunk).await?;
            report.chunks += 1;
            report.written += chunk.len();
            debug!(committed = report.written, total, "batch chunk committed");
            progress(report.written, total);
        }

        Ok(report)
    }
}
