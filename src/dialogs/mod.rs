//! Dialogs - file selection, acknowledgment popup, preferences

pub mod acknowledge;
pub mod file_selector;
pub mod prefs;

pub use acknowledge::{Acknowledgment, Notifier, RfdNotifier};
pub use file_selector::{DialogBackend, DialogRequest, FileDialogSelector, FileFilter, FilterSet};
