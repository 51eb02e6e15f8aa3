//! Editor preferences persisted outside the scene document.
//!
//! This is display state, not scene state: it never enters the undo history
//! and every mutation is written straight back to disk.

use serde::{Deserialize, Serialize};

/// UI color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Process-wide editor preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorPreferences {
    #[serde(default)]
    pub theme: Theme,
}

impl EditorPreferences {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "vscene", "vscene")
            .map(|dirs| dirs.config_dir().join("preferences.json"))
    }

    /// Load persisted preferences, or the defaults if none exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if let Ok(json) = std::fs::read_to_string(&path) {
                if let Ok(prefs) = serde_json::from_str(&json) {
                    return prefs;
                }
                tracing::warn!("ignoring malformed preferences file {}", path.display());
            }
        }
        Self::default()
    }

    /// Persist the current preferences
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                let _ = std::fs::write(&path, json);
            }
        }
    }

    /// Set the theme and persist immediately
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.save();
    }

    /// Flip between light and dark, persisting immediately
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }
}
