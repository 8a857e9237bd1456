// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_loader;
mod services;
mod startup;
mod state;
mod ui;

use services::ThumbnailPreviewManager;
use slint::ComponentHandle;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let app = AppWindow::new()?;

    // Settled thumbnail keys are batched and redrawn through the Logic global
    let preview_updates = state::PreviewUpdates::new();
    let previews = ThumbnailPreviewManager::new({
        let ui_handle = app.as_weak();
        let preview_updates = preview_updates.clone();
        move |key| {
            let ui_handle = ui_handle.clone();
            preview_updates.push_and_schedule(key, move || {
                slint::invoke_from_event_loop(move || {
                    if let Some(ui) = ui_handle.upgrade() {
                        ui.global::<Logic>().invoke_previews_changed();
                    }
                })
            });
        }
    });
    let app_state = state::AppState::new(Box::new(previews), preview_updates);

    ui::setup_handlers(&app, &app_state);
    startup::configure_startup_opening(&app, &app_state);

    app.run()?;

    Ok(())
}
