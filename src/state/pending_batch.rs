//! Collects bursts of events into one batch handled on a later loop turn.

use log::warn;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

/// Paths dropped during one gesture. winit reports them one event at a time.
pub type DropBatcher = PendingBatch<PathBuf>;

/// Preview keys whose thumbnails settled since the last redraw.
pub type PreviewUpdates = PendingBatch<u64>;

/// Items queued until the next flush.
///
/// The first item of a batch schedules the flush; later items ride along
/// until the flush calls [`PendingBatch::take`].
pub struct PendingBatch<T> {
    pending: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for PendingBatch<T> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
        }
    }
}

impl<T> Default for PendingBatch<T> {
    fn default() -> Self {
        Self {
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> PendingBatch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    // 他スレッドでのパニック後も溜まった分は失わない
    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queues an item. Returns `true` if this started a new batch.
    pub fn push(&self, item: T) -> bool {
        let mut pending = self.lock();
        pending.push(item);
        pending.len() == 1
    }

    /// Queues an item and, if it starts a batch, runs `schedule_flush`.
    ///
    /// When scheduling fails the batch is discarded, so the next push starts
    /// a fresh batch instead of waiting on a flush that never comes.
    pub fn push_and_schedule<E, F>(&self, item: T, schedule_flush: F)
    where
        E: Display,
        F: FnOnce() -> Result<(), E>,
    {
        if !self.push(item) {
            return;
        }

        if let Err(e) = schedule_flush() {
            let dropped = self.take();
            warn!("Could not schedule batch flush, dropped {} item(s): {}", dropped.len(), e);
        }
    }

    /// Takes the collected batch in arrival order.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.lock())
    }
}
