//! Native file dialog backend (rfd).

use std::path::PathBuf;

use crate::dialogs::file_selector::{DialogBackend, DialogRequest};

/// Build a configured rfd dialog from a request.
pub fn create_audio_dialog(request: &DialogRequest) -> rfd::FileDialog {
    let mut dialog = rfd::FileDialog::new().set_title(&request.title);
    for filter in request.filters.filters() {
        // rfd takes bare extensions; "*" doubles as the any-file pattern
        let exts: Vec<&str> = filter.patterns.iter().map(String::as_str).collect();
        dialog = dialog.add_filter(&filter.name, &exts);
    }
    if let Some(dir) = request.start_dir.as_ref().filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }
    dialog
}

/// Blocking rfd chooser used by the application.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdBackend;

impl DialogBackend for RfdBackend {
    fn pick_file(&self, request: &DialogRequest) -> Option<PathBuf> {
        create_audio_dialog(request).pick_file()
    }
}
