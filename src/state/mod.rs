//! State management for the file upload widget.

use crate::services::PreviewManager;
use std::sync::{Arc, Mutex};

pub mod pending_batch;
pub mod registry;

pub use pending_batch::{DropBatcher, PreviewUpdates};
pub use registry::{FileId, FileRegistry};

/// Application-wide state container.
pub struct AppState {
    /// Selected files, mutated only on the UI thread.
    pub registry: Arc<Mutex<FileRegistry>>,
    /// Paths of an in-progress drop.
    pub drop_batcher: DropBatcher,
    /// Settled thumbnails waiting for their rows to redraw.
    pub preview_updates: PreviewUpdates,
}

impl AppState {
    pub fn new(previews: Box<dyn PreviewManager>, preview_updates: PreviewUpdates) -> Self {
        Self {
            registry: Arc::new(Mutex::new(FileRegistry::new(previews))),
            drop_batcher: DropBatcher::new(),
            preview_updates,
        }
    }
}
