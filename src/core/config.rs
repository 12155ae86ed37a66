use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// User settings observed (never modified) by the tracker core.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Only count down to events tagged "Special".
    #[serde(default)]
    pub special_only: bool,
    /// Push a notification five minutes before the event starts.
    #[serde(default = "default_true")]
    pub notify: bool,
    /// Push a second notification at a custom lead time.
    #[serde(default)]
    pub notify_start: bool,
    /// Lead time in seconds for the second notification.
    #[serde(default = "default_notify_start_seconds")]
    pub notify_start_seconds: u32,
    /// Show an overlay tooltip when the game window is visible but unfocused.
    #[serde(default = "default_true")]
    pub tooltip: bool,
}

fn default_true() -> bool {
    true
}

fn default_notify_start_seconds() -> u32 {
    60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            special_only: false,
            notify: true,
            notify_start: false,
            notify_start_seconds: 60,
            tooltip: true,
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    /// Load settings, falling back to defaults on a missing or unreadable
    /// file. A corrupt settings file is not worth failing startup over.
    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
                log::warn!(
                    "Ignoring unparseable settings file at {:?}",
                    self.config_path
                );
            }
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.notify);
        assert!(!settings.notify_start);
        assert_eq!(settings.notify_start_seconds, 60);
        assert!(settings.tooltip);
        assert!(!settings.special_only);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        // Missing file loads defaults
        assert_eq!(manager.load(), Settings::default());

        let new_settings = Settings {
            special_only: true,
            notify: true,
            notify_start: true,
            notify_start_seconds: 120,
            tooltip: false,
        };
        manager.save(&new_settings).unwrap();

        let loaded = manager.load();
        assert_eq!(loaded, new_settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        fs::write(
            dir.path().join("settings.json"),
            r#"{"special_only": true}"#,
        )
        .unwrap();

        let loaded = manager.load();
        assert!(loaded.special_only);
        assert!(loaded.notify);
        assert_eq!(loaded.notify_start_seconds, 60);
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        fs::write(dir.path().join("settings.json"), "not json").unwrap();
        assert_eq!(manager.load(), Settings::default());
    }
}
