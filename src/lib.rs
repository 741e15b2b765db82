//! DJSONGMATCH - audio track picker library
//!
//! Re-exports all modules for use by the binary target.

// Core (selection value, events)
pub mod core;

// App modules
pub mod app;
pub mod cli;
pub mod config;
pub mod dialogs;
pub mod widgets;

pub use app::MainWindow;
pub use crate::core::event_bus::{BoxedEvent, EventBus, EventEmitter, downcast_event};
pub use crate::core::selection::SelectedPath;
pub use dialogs::{Acknowledgment, DialogBackend, FileDialogSelector, FilterSet, Notifier};
