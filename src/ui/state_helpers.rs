//! Helper functions to set multiple ViewState properties in a grouped manner.

use crate::ui::presentation::ListSummary;
use log::error;
use slint::ComponentHandle;

/// Sets all list-related properties at once.
///
/// Groups: files, file-count, total-size, upload-label
pub fn set_file_list(ui: &crate::AppWindow, rows: Vec<crate::FileRow>, summary: &ListSummary) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_files(slint::ModelRc::new(slint::VecModel::from(rows)));
    view_state.set_file_count(summary.count as i32);
    view_state.set_total_size(summary.total_size.as_str().into());
    view_state.set_upload_label(summary.upload_label.as_str().into());
}

/// Toggles the drop-zone highlight.
pub fn set_drag_active(ui: &crate::AppWindow, active: bool) {
    ui.global::<crate::ViewState>().set_drag_active(active);
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}

pub fn clear_error(ui: &crate::AppWindow) {
    ui.global::<crate::ViewState>()
        .set_error_message("".into());
}
