use i_slint_backend_winit::winit::event::WindowEvent;
use slint::ComponentHandle;
use std::fmt::Display;
use std::path::PathBuf;

use crate::state::{AppState, DropBatcher};
use crate::ui::handlers::add_paths;

fn startup_paths_from_args() -> Vec<PathBuf> {
    std::env::args_os()
        .skip(1)
        .filter(|arg| !arg.to_string_lossy().starts_with('-'))
        .map(PathBuf::from)
        .collect()
}

/// Applies one winit event to the drop zone.
///
/// Dropped paths are queued on `batcher`; the first path of a burst runs
/// `schedule_flush`. Returns the new drag-in-progress flag when the event
/// changes it.
fn handle_drop_zone_event<E, F>(
    event: &WindowEvent,
    batcher: &DropBatcher,
    schedule_flush: F,
) -> Option<bool>
where
    E: Display,
    F: FnOnce() -> Result<(), E>,
{
    match event {
        WindowEvent::HoveredFile(_) => Some(true),
        WindowEvent::HoveredFileCancelled => Some(false),
        WindowEvent::DroppedFile(path) => {
            // 1ファイルずつ届くので、次のループで一括処理する
            batcher.push_and_schedule(path.clone(), schedule_flush);
            Some(false)
        }
        _ => None,
    }
}

/// Hooks winit file hover/drop events into the drop zone.
fn setup_drop_hooks(app: &crate::AppWindow, app_state: &AppState) {
    use i_slint_backend_winit::EventResult;
    use i_slint_backend_winit::WinitWindowAccessor;

    let ui_handle = app.as_weak();
    let registry = app_state.registry.clone();
    let batcher = app_state.drop_batcher.clone();

    app.window().on_winit_window_event(move |_window, event| {
        let flush = {
            let ui_handle = ui_handle.clone();
            let registry = registry.clone();
            let batcher = batcher.clone();
            move || {
                slint::invoke_from_event_loop(move || {
                    let paths = batcher.take();
                    log::info!("Dropped {} path(s)", paths.len());
                    if let Some(ui) = ui_handle.upgrade() {
                        add_paths(&ui, &registry, paths, "Failed to add dropped files");
                    }
                })
            }
        };

        if let Some(active) = handle_drop_zone_event(event, &batcher, flush) {
            if let Some(ui) = ui_handle.upgrade() {
                crate::ui::set_drag_active(&ui, active);
            }
        }

        EventResult::Propagate
    });
}

pub fn configure_startup_opening(app: &crate::AppWindow, app_state: &AppState) {
    setup_drop_hooks(app, app_state);

    let paths = startup_paths_from_args();
    if !paths.is_empty() {
        log::info!("Opening {} path(s) from command line", paths.len());
        add_paths(app, &app_state.registry, paths, "Failed to open startup files");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn no_flush() -> Result<(), String> {
        panic!("flush scheduled unexpectedly");
    }

    #[test]
    fn hover_sets_and_cancel_clears_drag_flag() {
        let batcher = DropBatcher::new();

        let hovered = WindowEvent::HoveredFile(PathBuf::from("a.png"));
        assert_eq!(handle_drop_zone_event(&hovered, &batcher, no_flush), Some(true));
        assert_eq!(
            handle_drop_zone_event(&WindowEvent::HoveredFileCancelled, &batcher, no_flush),
            Some(false)
        );
        assert!(batcher.take().is_empty());
    }

    #[test]
    fn unrelated_events_leave_drag_flag() {
        let batcher = DropBatcher::new();
        assert_eq!(
            handle_drop_zone_event(&WindowEvent::Focused(true), &batcher, no_flush),
            None
        );
    }

    #[test]
    fn drop_burst_becomes_one_ordered_batch() {
        let batcher = DropBatcher::new();
        let flushes = Cell::new(0);
        let paths = ["b.pdf", "a.png", "c.txt"].map(PathBuf::from);

        for path in &paths {
            let dropped = WindowEvent::DroppedFile(path.clone());
            let flag = handle_drop_zone_event(&dropped, &batcher, || {
                flushes.set(flushes.get() + 1);
                Ok::<(), String>(())
            });
            assert_eq!(flag, Some(false));
        }

        assert_eq!(flushes.get(), 1);
        assert_eq!(batcher.take(), paths.to_vec());
    }

    #[test]
    fn drop_after_failed_flush_starts_new_batch() {
        let batcher = DropBatcher::new();
        let first = WindowEvent::DroppedFile(PathBuf::from("lost.png"));
        handle_drop_zone_event(&first, &batcher, || Err("event loop closed"));

        let flushed = Cell::new(false);
        let second = WindowEvent::DroppedFile(PathBuf::from("kept.png"));
        handle_drop_zone_event(&second, &batcher, || {
            flushed.set(true);
            Ok::<(), String>(())
        });

        assert!(flushed.get());
        assert_eq!(batcher.take(), vec![PathBuf::from("kept.png")]);
    }
}
