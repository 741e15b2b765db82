use eframe::egui;

use crate::core::selection::SelectedPath;

/// Status bar component
#[derive(Debug, Default)]
pub struct StatusBar {
    pub current_message: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.current_message = message.into();
    }

    /// Render status bar at bottom of screen
    pub fn render(&self, ctx: &egui::Context, selected: Option<&SelectedPath>) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match selected {
                    Some(sel) => ui.monospace(sel.file_name()),
                    None => ui.monospace("No file"),
                };

                if !self.current_message.is_empty() {
                    ui.separator();
                    ui.label(&self.current_message);
                }
            });
        });
    }
}
