//! Preferences window and persisted settings.

#[allow(clippy::module_inception)]
mod prefs;
pub mod prefs_events;

pub use prefs::{AppSettings, FONT_SIZE_RANGE, render_settings_window};
