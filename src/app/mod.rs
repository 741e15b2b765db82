//! Application module - MainWindow and related functionality.
//!
//! - `events` - event handling (browse, selection, drops, settings)
//! - `layout` - panel rendering
//! - `run` - eframe::App implementation (frame loop, persistence)

mod events;
mod layout;
mod run;

use std::path::PathBuf;

use log::info;

use crate::core::event_bus::EventBus;
use crate::core::selection::SelectedPath;
use crate::dialogs::acknowledge::{Notifier, RfdNotifier};
use crate::dialogs::file_selector::{FileDialogSelector, FilterSet};
use crate::dialogs::prefs::AppSettings;
use crate::widgets::file_dialogs::RfdBackend;
use crate::widgets::status::StatusBar;

/// Main window state.
///
/// Owns the file selector and the acknowledgment notifier; both are trait
/// objects over the native dialogs so the flow runs headless in tests.
pub struct MainWindow {
    pub settings: AppSettings,
    /// Last chosen file, shown in the path label and status bar.
    pub selected: Option<SelectedPath>,
    pub show_settings: bool,
    pub status_bar: StatusBar,
    selector: FileDialogSelector,
    notifier: Box<dyn Notifier>,
    event_bus: EventBus,
    /// CLI --start-dir, consumed by the first dialog.
    session_start_dir: Option<PathBuf>,
    exit_requested: bool,
}

impl MainWindow {
    pub fn new(selector: FileDialogSelector, notifier: Box<dyn Notifier>) -> Self {
        Self {
            settings: AppSettings::default(),
            selected: None,
            show_settings: false,
            status_bar: StatusBar::new(),
            selector,
            notifier,
            event_bus: EventBus::new(),
            session_start_dir: None,
            exit_requested: false,
        }
    }

    /// Window wired to the native rfd dialogs.
    pub fn native(filters: Option<FilterSet>) -> Self {
        let backend = Box::new(RfdBackend);
        let selector = match filters {
            Some(filters) => FileDialogSelector::with_filters(backend, filters),
            None => FileDialogSelector::audio(backend),
        };
        info!("File dialog filter: {}", selector.filter_string());
        Self::new(selector, Box::new(RfdNotifier))
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_start_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.session_start_dir = dir;
        self
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn selector(&self) -> &FileDialogSelector {
        &self.selector
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Folder for the next dialog: CLI override first, then the remembered one.
    pub fn start_dir(&self) -> Option<PathBuf> {
        self.session_start_dir.clone().or_else(|| {
            if self.settings.remember_last_dir {
                self.settings.last_dir.clone()
            } else {
                None
            }
        })
    }
}
