//! Placeholder for the upload action.
//!
//! No transfer happens here; the service only reports what would be sent.

use crate::file_utils::format_size;
use crate::state::FileRegistry;
use log::info;

/// Summary of the files an upload would include.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub file_count: usize,
    pub total_bytes: u64,
}

/// Stub upload action.
#[derive(Clone, Default)]
pub struct UploadService;

impl UploadService {
    pub fn new() -> Self {
        Self
    }

    /// Logs the pending upload and leaves the registry untouched.
    pub fn request_upload(&self, registry: &FileRegistry) -> UploadSummary {
        let summary = UploadSummary {
            file_count: registry.len(),
            total_bytes: registry.total_size(),
        };

        if registry.is_empty() {
            info!("Upload requested with no files selected");
            return summary;
        }

        info!(
            "Upload requested for {} file(s), {} total (not implemented)",
            summary.file_count,
            format_size(summary.total_bytes)
        );
        for record in registry.records() {
            info!("  - {} ({})", record.file.name, record.file.mime_type);
        }

        summary
    }
}

/// Label of the upload control.
pub fn upload_label(file_count: usize) -> String {
    format!("Upload Files ({})", file_count)
}
