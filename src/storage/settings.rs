//! In-memory settings store.

use crate::models::settings::GenerationSettings;

/// Holds the session's generation settings. Returns defaults until the
/// settings surface saves a record.
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: Option<GenerationSettings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings. Returns defaults if none were saved.
    pub fn get_settings(&self) -> GenerationSettings {
        self.settings.clone().unwrap_or_default()
    }

    /// Save settings for the rest of the session.
    pub fn save_settings(&mut self, settings: GenerationSettings) {
        self.settings = Some(settings);
    }
}
