//! Selected file value produced by the file dialog.

use std::path::{Path, PathBuf};

/// Extensions accepted by the audio filter (lowercase, no dot).
pub const AUDIO_EXTS: &[&str] = &["mp3", "wav", "flac"];

/// Path chosen by the user. Never empty.
///
/// An empty path means "no selection was made" and is represented as `None`
/// at every boundary, so holding a `SelectedPath` proves a choice happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPath(PathBuf);

impl SelectedPath {
    /// Wrap a path, rejecting the empty one.
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(Self(path))
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Path as shown to the user (acknowledgment body, labels).
    pub fn as_text(&self) -> String {
        self.0.display().to_string()
    }

    /// File name for compact display, falls back to the full text.
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.as_text())
    }

    /// Directory containing the file, if any.
    pub fn parent_dir(&self) -> Option<PathBuf> {
        self.0
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    pub fn is_audio(&self) -> bool {
        is_audio_path(&self.0)
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

/// Check extension against [`AUDIO_EXTS`], case-insensitive.
pub fn is_audio_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| AUDIO_EXTS.iter().any(|a| a.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}
