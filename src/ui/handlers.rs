//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (browse_files, remove_file, clear_files, etc.).
//! Every handler that mutates the registry redraws the list before returning.

use crate::services::{SelectionService, UploadService};
use crate::state::{AppState, FileId, FileRegistry};
use crate::ui::presentation::{refresh, update_preview_rows};
use crate::ui::{clear_error, set_error_with_prefix};
use log::{debug, warn};
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Redraws the list from the registry, skipping the update if the lock is poisoned.
fn redraw(ui: &crate::AppWindow, registry: &Arc<Mutex<FileRegistry>>) {
    match registry.lock() {
        Ok(registry) => refresh(ui, &registry),
        Err(_) => warn!("Registry lock poisoned, skipping redraw"),
    }
}

/// Selects a batch of paths and redraws, reporting skipped entries.
pub fn add_paths(
    ui: &crate::AppWindow,
    registry: &Arc<Mutex<FileRegistry>>,
    paths: Vec<PathBuf>,
    error_prefix: &str,
) {
    if paths.is_empty() {
        return;
    }

    let outcome = SelectionService::new(registry.clone()).select_paths(paths);
    redraw(ui, registry);

    match outcome.skipped_message() {
        Some(message) => set_error_with_prefix(ui, error_prefix, message),
        None => clear_error(ui),
    }
}

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and application state, then registers callbacks for
/// browsing, removal, clearing, the upload stub, and preview updates.
pub fn setup_handlers(ui: &crate::AppWindow, app_state: &AppState) {
    let registry = app_state.registry.clone();

    // File picker handler
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    ui.global::<crate::Logic>().on_browse_files({
        let ui_handle = ui.as_weak();
        let registry = registry.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let registry = registry.clone();
            let result = slint::spawn_local(async move {
                // ダイアログはメインスレッド専用
                let Some(picked) = AsyncFileDialog::new()
                    .set_title("Select files")
                    .pick_files()
                    .await
                else {
                    debug!("File dialog cancelled");
                    return;
                };

                let paths: Vec<PathBuf> = picked
                    .iter()
                    .map(|handle| handle.path().to_path_buf())
                    .collect();

                if let Some(ui) = ui_handle.upgrade() {
                    add_paths(&ui, &registry, paths, "Failed to add selected files");
                }
            });

            if let Err(e) = result {
                warn!("Failed to open file dialog: {}", e);
            }
        }
    });

    // Per-row remove handler
    ui.global::<crate::Logic>().on_remove_file({
        let ui_handle = ui.as_weak();
        let registry = registry.clone();
        move |id| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let Some(id) = FileId::parse(&id) else {
                warn!("Invalid file id from UI: {}", id);
                return;
            };

            if let Ok(mut registry) = registry.lock() {
                registry.remove(id);
                refresh(&ui, &registry);
            }
            clear_error(&ui);
        }
    });

    // Clear-all handler
    ui.global::<crate::Logic>().on_clear_files({
        let ui_handle = ui.as_weak();
        let registry = registry.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            if let Ok(mut registry) = registry.lock() {
                registry.clear();
                refresh(&ui, &registry);
            }
            clear_error(&ui);
        }
    });

    // Upload stub
    ui.global::<crate::Logic>().on_upload_files({
        let registry = registry.clone();
        move || {
            if let Ok(registry) = registry.lock() {
                UploadService::new().request_upload(&registry);
            }
        }
    });

    // Thumbnails settled on worker threads; one flush per burst
    ui.global::<crate::Logic>().on_previews_changed({
        let ui_handle = ui.as_weak();
        let registry = registry.clone();
        let preview_updates = app_state.preview_updates.clone();
        move || {
            let keys = preview_updates.take();
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            match registry.lock() {
                Ok(registry) => update_preview_rows(&ui, &registry, &keys),
                Err(_) => warn!("Registry lock poisoned, skipping preview update"),
            }
        }
    });
}
