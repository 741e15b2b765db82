use eframe::egui;
use std::path::PathBuf;

use super::prefs_events::{ForgetLastDirEvent, ResetSettingsEvent};
use crate::core::event_bus::EventEmitter;

pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 10.0..=18.0;

/// Persisted user preferences
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AppSettings {
    // UI
    pub dark_mode: bool,
    pub font_size: f32,
    pub show_path_label: bool,
    pub show_acknowledgment: bool,

    // Dialog
    pub remember_last_dir: bool,
    pub last_dir: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: 13.0,
            show_path_label: true,
            show_acknowledgment: true,
            remember_last_dir: true,
            last_dir: None,
        }
    }
}

impl AppSettings {
    /// Restore from persisted JSON; unknown or missing fields fall back to defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.font_size = settings
            .font_size
            .clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end());
        Ok(settings)
    }
}

/// Render settings window
pub fn render_settings_window(
    ctx: &egui::Context,
    show_settings: &mut bool,
    settings: &mut AppSettings,
    emitter: &EventEmitter,
) {
    egui::Window::new("Settings")
        .id(egui::Id::new("settings_window"))
        .open(show_settings)
        .default_size([360.0, 280.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.heading("Appearance");
            ui.add_space(8.0);

            ui.checkbox(&mut settings.dark_mode, "Dark Mode");
            ui.label("Font Size:");
            ui.add(
                egui::Slider::new(&mut settings.font_size, FONT_SIZE_RANGE)
                    .suffix(" px")
                    .step_by(0.5),
            );
            ui.checkbox(&mut settings.show_path_label, "Show selected path in window");
            ui.add_space(12.0);

            ui.heading("File Dialog");
            ui.add_space(8.0);

            ui.checkbox(&mut settings.show_acknowledgment, "Confirm selection with a popup");
            ui.checkbox(&mut settings.remember_last_dir, "Open dialog in last used folder");
            ui.horizontal(|ui| {
                let last = settings
                    .last_dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_else(|| "(none)".to_string());
                ui.label(format!("Last folder: {}", last));
                if ui
                    .add_enabled(settings.last_dir.is_some(), egui::Button::new("Forget"))
                    .clicked()
                {
                    emitter.emit(ForgetLastDirEvent);
                }
            });
            ui.add_space(12.0);

            ui.separator();
            if ui.button("Reset to defaults").clicked() {
                emitter.emit(ResetSettingsEvent);
            }
        });
}
