//! UI Widgets - native dialog backend and status bar
//!
//! Widgets communicate with the main window via EventBus

pub mod file_dialogs;
pub mod status;
