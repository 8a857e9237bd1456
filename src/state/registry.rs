//! Ordered collection of selected files.

use crate::file_utils::FileHandle;
use crate::image_loader::Thumbnail;
use crate::services::PreviewManager;
use crate::services::preview_service::PreviewHandle;
use log::debug;
use std::fmt;

/// Stable key of a record. Never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    /// Parses the textual form produced by `Display`.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok().map(Self)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selected file, with the preview it owns when it is an image.
#[derive(Debug)]
pub struct FileRecord {
    pub id: FileId,
    pub file: FileHandle,
    preview: Option<PreviewHandle>,
}

impl FileRecord {
    /// Preview owned by this record, present only for images.
    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }
}

/// Selected files in insertion order.
///
/// Every preview handle held by a record is released through the
/// [`PreviewManager`] exactly when the record leaves the registry.
pub struct FileRegistry {
    records: Vec<FileRecord>,
    next_id: u64,
    previews: Box<dyn PreviewManager>,
}

impl FileRegistry {
    pub fn new(previews: Box<dyn PreviewManager>) -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
            previews,
        }
    }

    /// Builds a record with a fresh id, allocating a preview for images.
    pub fn new_record(&mut self, file: FileHandle) -> FileRecord {
        self.next_id += 1;
        let preview = file
            .is_image()
            .then(|| self.previews.create_preview(&file));

        FileRecord {
            id: FileId(self.next_id),
            file,
            preview,
        }
    }

    /// Appends records to the end, keeping their order.
    pub fn append(&mut self, records: Vec<FileRecord>) {
        if records.is_empty() {
            return;
        }
        debug!(
            "Appending {} file(s) to registry of {}",
            records.len(),
            self.records.len()
        );
        self.records.extend(records);
    }

    /// Removes the record with `id`, releasing its preview.
    /// Returns `false` when no such record exists.
    pub fn remove(&mut self, id: FileId) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            debug!("Remove ignored, no file with id {}", id);
            return false;
        };

        let record = self.records.remove(index);
        debug!("Removed {} ({})", record.file.name, id);
        if let Some(handle) = record.preview {
            self.previews.release_preview(handle);
        }
        true
    }

    /// Empties the registry, releasing every preview. Returns the number of
    /// records removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        for record in self.records.drain(..) {
            if let Some(handle) = record.preview {
                self.previews.release_preview(handle);
            }
        }
        debug!("Cleared {} file(s)", removed);
        removed
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.records.iter().map(|record| record.file.size).sum()
    }

    pub fn thumbnail(&self, record: &FileRecord) -> Option<Thumbnail> {
        record
            .preview
            .as_ref()
            .and_then(|handle| self.previews.thumbnail(handle))
    }
}

impl Drop for FileRegistry {
    fn drop(&mut self) {
        self.clear();
    }
}
