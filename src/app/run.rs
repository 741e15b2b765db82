//! Main application loop - eframe::App implementation.
//!
//! Each frame:
//! 1. Honour a pending quit request
//! 2. Apply theme and font settings
//! 3. Queue dropped files
//! 4. Render UI
//! 5. Handle queued events (opens native dialogs when requested)

use eframe::egui;
use log::{info, trace, warn};

use super::MainWindow;
use crate::core::app_events::FilesDroppedEvent;

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.apply_style(ctx);

        // Handle drag-and-drop files
        let dropped: Vec<std::path::PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            info!("Files dropped: {:?}", dropped);
            self.event_bus.emit(FilesDroppedEvent(dropped));
        }

        self.ui(ctx);

        // Dialogs block this thread until answered; egui resumes afterwards
        self.handle_events();

        if self.exit_requested {
            ctx.request_repaint();
        }
    }

    /// Persist settings (window geometry is persisted by eframe itself).
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&self.settings) {
            Ok(json) => {
                storage.set_string(eframe::APP_KEY, json);
                trace!("Settings saved: {:?}", self.settings);
            }
            Err(e) => warn!("Failed to serialize settings: {}", e),
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Main window closing");
    }
}
