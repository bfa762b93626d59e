use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User preferences kept between runs.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub dark_mode: bool,
    /// JSON catalog picked in the window; the builtin list is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

pub fn get_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("daily-wallpaper/settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&get_settings_path())
}

pub fn load_settings_from(path: &Path) -> Settings {
    let Ok(data) = fs::read_to_string(path) else {
        return Settings::default();
    };
    serde_json::from_str(&data).unwrap_or_else(|err| {
        log::warn!("Ignoring unreadable settings {}: {err}", path.display());
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) {
    save_settings_to(&get_settings_path(), settings);
}

pub fn save_settings_to(path: &Path, settings: &Settings) {
    if let Some(p) = path.parent() {
        let _ = fs::create_dir_all(p);
    }
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(err) = fs::write(path, json) {
                log::error!("Failed to save settings to {}: {err}", path.display());
            }
        }
        Err(err) => log::error!("Failed to serialize settings: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json"));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "dark_mode = true").unwrap();

        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_save_creates_parent_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");
        let settings = Settings {
            dark_mode: true,
            catalog_path: Some(PathBuf::from("/srv/wallpapers.json")),
        };

        save_settings_to(&path, &settings);

        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"dark_mode": true}"#).unwrap();

        let settings = load_settings_from(&path);
        assert!(settings.dark_mode);
        assert!(settings.catalog_path.is_none());
    }
}
