//! File selection dialog: filters, request and the selector itself.
//!
//! The native chooser sits behind [`DialogBackend`] so the selection flow
//! can be driven by a scripted backend in tests. Production code uses
//! [`crate::widgets::file_dialogs::RfdBackend`].

use std::fmt;
use std::path::PathBuf;

use anyhow::{Result, bail};
use log::{debug, info};

use crate::core::selection::{AUDIO_EXTS, SelectedPath};

pub const DIALOG_TITLE: &str = "Select a File";

/// Pattern matching any file.
pub const ANY_PATTERN: &str = "*";

/// Named filter entry. Patterns are bare extensions, or `*` for any file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub patterns: Vec<String>,
}

impl FileFilter {
    pub fn new(name: &str, patterns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn all_files() -> Self {
        Self::new("All Files", &[ANY_PATTERN])
    }
}

impl fmt::Display for FileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let globs: Vec<String> = self
            .patterns
            .iter()
            .map(|p| {
                if p == ANY_PATTERN {
                    ANY_PATTERN.to_string()
                } else {
                    format!("*.{}", p)
                }
            })
            .collect();
        write!(f, "{} ({})", self.name, globs.join(" "))
    }
}

/// Ordered filter list, rendered as `Name (*.a *.b);;Other (*)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet(pub Vec<FileFilter>);

impl FilterSet {
    /// Audio files first, "all files" as the escape hatch.
    pub fn audio() -> Self {
        Self(vec![FileFilter::new("Audio Files", AUDIO_EXTS), FileFilter::all_files()])
    }

    /// Parse a `;;`-separated filter string.
    pub fn parse(s: &str) -> Result<Self> {
        let mut filters = Vec::new();
        for entry in s.split(";;").map(str::trim).filter(|e| !e.is_empty()) {
            let Some((name, rest)) = entry.rsplit_once('(') else {
                bail!("Filter entry without pattern list: {:?}", entry);
            };
            let Some(globs) = rest.trim_end().strip_suffix(')') else {
                bail!("Unclosed pattern list in filter entry: {:?}", entry);
            };
            let name = name.trim();
            if name.is_empty() {
                bail!("Filter entry without name: {:?}", entry);
            }

            let mut patterns = Vec::new();
            for glob in globs.split_whitespace() {
                if glob == ANY_PATTERN {
                    patterns.push(ANY_PATTERN.to_string());
                } else if let Some(ext) = glob.strip_prefix("*.").filter(|e| !e.is_empty()) {
                    patterns.push(ext.to_string());
                } else {
                    bail!("Unsupported pattern {:?} in filter {:?}", glob, name);
                }
            }
            if patterns.is_empty() {
                bail!("Filter {:?} has no patterns", name);
            }

            filters.push(FileFilter {
                name: name.to_string(),
                patterns,
            });
        }

        if filters.is_empty() {
            bail!("Empty filter string");
        }
        Ok(Self(filters))
    }

    pub fn filters(&self) -> &[FileFilter] {
        &self.0
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";;")?;
            }
            write!(f, "{}", filter)?;
        }
        Ok(())
    }
}

/// Everything presented to the native chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub filters: FilterSet,
    pub start_dir: Option<PathBuf>,
}

impl DialogRequest {
    pub fn filter_string(&self) -> String {
        self.filters.to_string()
    }
}

/// Native "open file" chooser.
///
/// Returns `None` on cancel. Platform failures are reported the same way.
pub trait DialogBackend {
    fn pick_file(&self, request: &DialogRequest) -> Option<PathBuf>;
}

/// Opens the chooser with a fixed title and filter set.
pub struct FileDialogSelector {
    backend: Box<dyn DialogBackend>,
    title: String,
    filters: FilterSet,
}

impl FileDialogSelector {
    /// Selector restricted to mp3/wav/flac with an "all files" fallback.
    pub fn audio(backend: Box<dyn DialogBackend>) -> Self {
        Self::with_filters(backend, FilterSet::audio())
    }

    pub fn with_filters(backend: Box<dyn DialogBackend>, filters: FilterSet) -> Self {
        Self {
            backend,
            title: DIALOG_TITLE.to_string(),
            filters,
        }
    }

    pub fn filter_string(&self) -> String {
        self.filters.to_string()
    }

    pub fn request(&self, start_dir: Option<PathBuf>) -> DialogRequest {
        DialogRequest {
            title: self.title.clone(),
            filters: self.filters.clone(),
            start_dir,
        }
    }

    /// Show the chooser and block until the user answers.
    pub fn open(&self, start_dir: Option<PathBuf>) -> Option<SelectedPath> {
        let request = self.request(start_dir);
        debug!(
            "Opening file dialog: filter={:?}, start_dir={:?}",
            request.filter_string(),
            request.start_dir
        );

        match self.backend.pick_file(&request).and_then(SelectedPath::new) {
            Some(selected) => {
                info!("File selected: {}", selected.as_text());
                Some(selected)
            }
            None => {
                debug!("File dialog dismissed without selection");
                None
            }
        }
    }
}

impl fmt::Debug for FileDialogSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDialogSelector")
            .field("title", &self.title)
            .field("filters", &self.filter_string())
            .finish()
    }
}
