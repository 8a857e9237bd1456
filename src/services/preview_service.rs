//! Preview handles for image files.
//!
//! A [`PreviewHandle`] is move-only: releasing it consumes it, so a handle can
//! never be released twice. The registry owns every live handle and hands it
//! back here when its record goes away.

use crate::config::THUMBNAIL_SIZE;
use crate::file_utils::FileHandle;
use crate::image_loader::{self, Thumbnail};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Revocable reference to a file's rendered preview.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PreviewHandle(u64);

impl PreviewHandle {
    pub fn new(key: u64) -> Self {
        Self(key)
    }

    /// Key identifying the underlying preview resource.
    pub fn key(&self) -> u64 {
        self.0
    }
}

/// Creates and releases preview resources.
pub trait PreviewManager: Send {
    /// Allocates a preview for an image file.
    fn create_preview(&mut self, file: &FileHandle) -> PreviewHandle;

    /// Frees the resource behind `handle`.
    fn release_preview(&mut self, handle: PreviewHandle);

    /// Decoded thumbnail for `handle`, if one is ready.
    fn thumbnail(&self, handle: &PreviewHandle) -> Option<Thumbnail>;
}

/// State of one thumbnail slot.
#[derive(Debug, Clone)]
enum ThumbnailSlot {
    Pending,
    Ready(Thumbnail),
    Failed,
}

/// Decodes thumbnails on rayon workers and keeps them until released.
pub struct ThumbnailPreviewManager {
    slots: Arc<Mutex<HashMap<u64, ThumbnailSlot>>>,
    next_key: u64,
    on_ready: Arc<dyn Fn(u64) + Send + Sync>,
}

impl ThumbnailPreviewManager {
    /// Creates a manager; `on_ready` runs on the worker thread with the
    /// handle key after each slot settles (ready or failed).
    pub fn new<F>(on_ready: F) -> Self
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            next_key: 0,
            on_ready: Arc::new(on_ready),
        }
    }

    #[cfg(test)]
    fn live_count(&self) -> usize {
        self.slots.lock().map(|slots| slots.len()).unwrap_or(0)
    }

    #[cfg(test)]
    fn is_failed(&self, handle: &PreviewHandle) -> bool {
        self.slots
            .lock()
            .map(|slots| matches!(slots.get(&handle.key()), Some(ThumbnailSlot::Failed)))
            .unwrap_or(false)
    }
}

impl PreviewManager for ThumbnailPreviewManager {
    fn create_preview(&mut self, file: &FileHandle) -> PreviewHandle {
        self.next_key += 1;
        let key = self.next_key;

        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key, ThumbnailSlot::Pending);
        }

        let path = file.path.clone();
        let slots = self.slots.clone();
        let on_ready = self.on_ready.clone();
        rayon::spawn(move || {
            let slot = match image_loader::load_thumbnail_blocking(&path, THUMBNAIL_SIZE) {
                Ok(thumbnail) => ThumbnailSlot::Ready(thumbnail),
                Err(e) => {
                    warn!("No preview for {}: {}", path.display(), e);
                    ThumbnailSlot::Failed
                }
            };

            let Ok(mut slots) = slots.lock() else {
                return;
            };
            // 解放済みなら結果は捨てる
            match slots.get_mut(&key) {
                Some(current) => *current = slot,
                None => {
                    debug!("Preview {} released before decoding finished", key);
                    return;
                }
            }
            drop(slots);

            on_ready(key);
        });

        PreviewHandle::new(key)
    }

    fn release_preview(&mut self, handle: PreviewHandle) {
        if let Ok(mut slots) = self.slots.lock() {
            if slots.remove(&handle.key()).is_none() {
                warn!("Preview {} was not live", handle.key());
            }
        }
    }

    fn thumbnail(&self, handle: &PreviewHandle) -> Option<Thumbnail> {
        let slots = self.slots.lock().ok()?;
        match slots.get(&handle.key())? {
            ThumbnailSlot::Ready(thumbnail) => Some(thumbnail.clone()),
            ThumbnailSlot::Pending | ThumbnailSlot::Failed => None,
        }
    }
}
