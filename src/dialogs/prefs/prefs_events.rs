//! Preferences/settings events.

#[derive(Clone, Debug)]
pub struct ResetSettingsEvent;

#[derive(Clone, Debug)]
pub struct ToggleSettingsEvent;

/// Clear the remembered dialog folder.
#[derive(Clone, Debug)]
pub struct ForgetLastDirEvent;
