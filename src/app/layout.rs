//! Panel rendering for MainWindow.

use eframe::egui;

use super::MainWindow;
use crate::core::app_events::{BrowseRequestedEvent, QuitRequestedEvent};
use crate::dialogs::prefs::prefs_events::ToggleSettingsEvent;
use crate::dialogs::prefs::render_settings_window;

pub const BROWSE_LABEL: &str = "Browse...";

impl MainWindow {
    /// Apply theme and font size from settings.
    pub fn apply_style(&self, ctx: &egui::Context) {
        if self.settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let mut style = (*ctx.style()).clone();
        for (_, font_id) in style.text_styles.iter_mut() {
            font_id.size = self.settings.font_size;
        }
        ctx.set_style(style);
    }

    /// Draw all panels. Interactions are queued on the event bus.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let emitter = self.event_bus.emitter();

        // Ctrl+O / Cmd+O
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::O)) {
            emitter.emit(BrowseRequestedEvent);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Settings").clicked() {
                    emitter.emit(ToggleSettingsEvent);
                }
                if ui.button("Quit").clicked() {
                    emitter.emit(QuitRequestedEvent);
                }
            });
        });

        self.status_bar.render(ctx, self.selected.as_ref());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading("DJ Song Match");
                ui.label("Pick a track (MP3, WAV, FLAC) or drop one onto the window.");
                ui.add_space(16.0);

                if ui
                    .button(BROWSE_LABEL)
                    .on_hover_text("Open file dialog (Ctrl+O)")
                    .clicked()
                {
                    emitter.emit(BrowseRequestedEvent);
                }

                if self.settings.show_path_label {
                    ui.add_space(16.0);
                    match &self.selected {
                        Some(sel) => ui.monospace(sel.as_text()),
                        None => ui.weak("No file selected"),
                    };
                }
            });
        });

        render_settings_window(ctx, &mut self.show_settings, &mut self.settings, &emitter);
    }
}
