//! Application events emitted by widgets and handled by the main window.

use std::path::PathBuf;

use super::selection::SelectedPath;

/// "Browse..." activated (button or menu).
#[derive(Clone, Debug)]
pub struct BrowseRequestedEvent;

/// A file was chosen, via the dialog or a drop.
#[derive(Clone, Debug)]
pub struct FileSelectedEvent(pub SelectedPath);

/// Files dropped onto the window.
#[derive(Clone, Debug)]
pub struct FilesDroppedEvent(pub Vec<PathBuf>);

#[derive(Clone, Debug)]
pub struct QuitRequestedEvent;
