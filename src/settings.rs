//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file so the last level played
//! and display preferences survive between sessions.
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory, e.g.
//! `~/.config/tilechess/settings.json` on Linux. Falls back to the working
//! directory if no configuration directory can be determined.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller, which logs them

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::AppResult;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scenario to resume on the next start
    pub last_scenario: Option<String>,
    /// Draw pieces with chess symbols rather than layout letters
    pub unicode_pieces: bool,
    /// Label ranks and files around the board
    pub show_coordinates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            last_scenario: None,
            unicode_pieces: true,
            show_coordinates: true,
        }
    }
}

/// Resolve the settings file path
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "trilltino", "TileChess") {
        Some(proj_dirs) => proj_dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

impl Settings {
    /// Load settings from the default location
    pub fn load() -> Settings {
        Self::load_from(&settings_path())
    }

    /// Load settings from `path`, or defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Settings {
        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return Settings::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => {
                    info!("[SETTINGS] Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!(
                        "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                        path, e
                    );
                    Settings::default()
                }
            },
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Settings::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> AppResult<()> {
        self.save_to(&settings_path())
    }

    /// Save settings to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tilechess-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(&scratch_path("does-not-exist.json"));
        assert_eq!(settings, Settings::default());
        assert!(settings.unicode_pieces);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("saved/settings.json");
        let settings = Settings {
            last_scenario: Some("keyhole".to_string()),
            unicode_pieces: false,
            show_coordinates: true,
        };

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let path = scratch_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "show_coordinates": false }"#).unwrap();
        assert_eq!(settings.last_scenario, None);
        assert!(settings.unicode_pieces);
        assert!(!settings.show_coordinates);
    }
}
