//! Informational popup shown after a file is chosen.

use log::debug;

use crate::core::selection::SelectedPath;

pub const ACK_TITLE: &str = "File Selected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: String,
    pub body: String,
}

impl Acknowledgment {
    /// Popup for a selection; the body is the path text, nothing added.
    pub fn file_selected(selected: &SelectedPath) -> Self {
        Self {
            title: ACK_TITLE.to_string(),
            body: selected.as_text(),
        }
    }
}

/// Shows acknowledgments to the user.
pub trait Notifier {
    fn acknowledge(&self, ack: &Acknowledgment);
}

/// Native modal message box (blocks until dismissed).
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdNotifier;

impl Notifier for RfdNotifier {
    fn acknowledge(&self, ack: &Acknowledgment) {
        debug!("Showing acknowledgment: {} / {}", ack.title, ack.body);
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(&ack.title)
            .set_description(&ack.body)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
        debug!("Acknowledgment dismissed: {:?}", result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_body_is_exact_path() {
        let sel = SelectedPath::new("C:\\Music\\Deep House\\track 01.mp3").unwrap();
        let ack = Acknowledgment::file_selected(&sel);
        assert_eq!(ack.title, "File Selected");
        assert_eq!(ack.body, "C:\\Music\\Deep House\\track 01.mp3");
    }
}
