//! Event handling for MainWindow.
//!
//! Widgets only queue events while drawing. `handle_events()` runs after the
//! UI pass and performs the blocking work (native dialogs) outside any
//! widget closure.

use log::{debug, info};

use super::MainWindow;
use crate::core::app_events::*;
use crate::core::event_bus::{BoxedEvent, downcast_event};
use crate::core::selection::{SelectedPath, is_audio_path};
use crate::dialogs::acknowledge::Acknowledgment;
use crate::dialogs::prefs::AppSettings;
use crate::dialogs::prefs::prefs_events::*;

impl MainWindow {
    /// Drain the event queue and dispatch every event.
    ///
    /// Events emitted by handlers (a selection following a browse) are
    /// handled in the same call.
    pub fn handle_events(&mut self) {
        loop {
            let events = self.event_bus.poll();
            if events.is_empty() {
                break;
            }
            for event in events {
                self.handle_event(event);
            }
        }
    }

    fn handle_event(&mut self, event: BoxedEvent) {
        if downcast_event::<BrowseRequestedEvent>(&event).is_some() {
            self.browse();
        } else if let Some(FileSelectedEvent(selected)) = downcast_event::<FileSelectedEvent>(&event) {
            self.on_file_selected(selected.clone());
        } else if let Some(FilesDroppedEvent(paths)) = downcast_event::<FilesDroppedEvent>(&event) {
            self.on_files_dropped(paths);
        } else if downcast_event::<ToggleSettingsEvent>(&event).is_some() {
            self.show_settings = !self.show_settings;
        } else if downcast_event::<ForgetLastDirEvent>(&event).is_some() {
            info!("Forgetting last dialog folder");
            self.settings.last_dir = None;
        } else if downcast_event::<ResetSettingsEvent>(&event).is_some() {
            info!("Settings reset to defaults");
            self.settings = AppSettings::default();
        } else if downcast_event::<QuitRequestedEvent>(&event).is_some() {
            self.exit_requested = true;
        } else {
            debug!("Unhandled event: {}", (*event).type_name());
        }
    }

    /// Open the file dialog; a selection is queued as [`FileSelectedEvent`].
    pub fn browse(&mut self) {
        let start_dir = self.session_start_dir.take().or_else(|| self.start_dir());
        match self.selector.open(start_dir) {
            Some(selected) => self.event_bus.emit(FileSelectedEvent(selected)),
            None => self.status_bar.set_message("Selection cancelled"),
        }
    }

    fn on_file_selected(&mut self, selected: SelectedPath) {
        if self.settings.remember_last_dir
            && let Some(dir) = selected.parent_dir()
        {
            debug!("Remembering dialog folder: {}", dir.display());
            self.settings.last_dir = Some(dir);
        }
        self.status_bar.set_message(selected.as_text());

        if self.settings.show_acknowledgment {
            self.notifier.acknowledge(&Acknowledgment::file_selected(&selected));
        }
        self.selected = Some(selected);
    }

    /// First dropped file with an audio extension counts as a selection.
    fn on_files_dropped(&mut self, paths: &[std::path::PathBuf]) {
        let audio = paths
            .iter()
            .filter(|p| is_audio_path(p))
            .find_map(|p| SelectedPath::new(p.clone()));

        match audio {
            Some(selected) => {
                info!("Audio file dropped: {}", selected.as_text());
                self.event_bus.emit(FileSelectedEvent(selected));
            }
            None => {
                info!("Ignoring drop without audio files: {:?}", paths);
                self.status_bar.set_message("Dropped files are not MP3, WAV or FLAC");
            }
        }
    }
}
