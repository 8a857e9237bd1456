//! Service for turning picked or dropped files into registry records.

use crate::error::AppError;
use crate::file_utils::FileHandle;
use crate::state::{FileId, FileRegistry};
use log::{debug, warn};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// What happened to one batch.
#[derive(Debug, Default)]
pub struct SelectionOutcome {
    /// Ids of the appended records, in batch order.
    pub added: Vec<FileId>,
    /// Paths that could not be resolved into files.
    pub skipped: Vec<(PathBuf, AppError)>,
}

impl SelectionOutcome {
    /// Short user-facing description of skipped paths, if any.
    pub fn skipped_message(&self) -> Option<String> {
        let (_, first_error) = self.skipped.first()?;
        Some(match self.skipped.len() {
            1 => format!("Skipped 1 file: {}", first_error),
            n => format!("Skipped {} files: {}", n, first_error),
        })
    }
}

/// Acquires batches from the picker, drops, or startup arguments.
#[derive(Clone)]
pub struct SelectionService {
    registry: Arc<Mutex<FileRegistry>>,
}

impl SelectionService {
    pub fn new(registry: Arc<Mutex<FileRegistry>>) -> Self {
        Self { registry }
    }

    /// Appends one record per handle, in order. Image handles get a preview.
    pub fn select_files(&self, batch: Vec<FileHandle>) -> Vec<FileId> {
        if batch.is_empty() {
            return Vec::new();
        }

        let Ok(mut registry) = self.registry.lock() else {
            warn!("Registry lock poisoned, dropping batch of {}", batch.len());
            return Vec::new();
        };

        let records: Vec<_> = batch
            .into_iter()
            .map(|file| registry.new_record(file))
            .collect();
        let ids = records.iter().map(|record| record.id).collect();
        registry.append(records);
        ids
    }

    /// Resolves paths into handles and selects those that resolve.
    pub fn select_paths(&self, paths: Vec<PathBuf>) -> SelectionOutcome {
        let mut outcome = SelectionOutcome::default();
        let mut batch = Vec::with_capacity(paths.len());

        for path in paths {
            match FileHandle::from_path(&path) {
                Ok(handle) => batch.push(handle),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    outcome.skipped.push((path, e));
                }
            }
        }

        debug!(
            "Resolved {} file(s), skipped {}",
            batch.len(),
            outcome.skipped.len()
        );
        outcome.added = self.select_files(batch);
        outcome
    }
}
