//! Core modules - selection value, events, event bus
//!
//! Independent of the UI toolkit.

pub mod app_events;
pub mod event_bus;
pub mod selection;

pub use event_bus::{BoxedEvent, EventBus, EventEmitter, downcast_event};
pub use selection::{AUDIO_EXTS, SelectedPath, is_audio_path};
