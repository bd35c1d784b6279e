use crate::error::PlacementError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Host settings kept between sessions.
///
/// `window_placement` is the opaque text produced by
/// [`crate::codec::placement_string`]; it is stored and handed back as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: String,
    #[serde(default)]
    pub window_placement: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window_placement: String::new(),
        }
    }
}

/// Loads settings from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_settings_from<P: AsRef<Path>>(path: P) -> Settings {
    let mut content = String::new();
    if let Ok(mut file) = File::open(path.as_ref()) {
        if file.read_to_string(&mut content).is_ok() {
            if let Ok(settings) = serde_json::from_str::<Settings>(&content) {
                return settings;
            }
        }
    }
    Settings::default()
}

/// Writes `settings` to `path` as pretty-printed JSON.
pub fn save_settings_to<P: AsRef<Path>>(
    settings: &Settings,
    path: P,
) -> Result<(), PlacementError> {
    let json = serde_json::to_string_pretty(settings)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Mutex;

    static TEST_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn test_path() -> PathBuf {
        std::env::temp_dir().join(format!("window_placement_settings_{}.json", std::process::id()))
    }

    fn cleanup(path: &Path) {
        if path.exists() {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn round_trip_with_placement() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let path = test_path();
        cleanup(&path);
        let settings = Settings {
            log_level: "debug".to_string(),
            window_placement: r#"{"length":44,"showCmd":3}"#.to_string(),
        };
        save_settings_to(&settings, &path).unwrap();
        let loaded = load_settings_from(&path);
        cleanup(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_placement_field_is_empty() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let path = test_path();
        cleanup(&path);
        fs::write(&path, r#"{"log_level":"warn"}"#).unwrap();
        let loaded = load_settings_from(&path);
        cleanup(&path);
        assert_eq!(loaded.log_level, "warn");
        assert_eq!(loaded.window_placement, "");
    }

    #[test]
    fn missing_or_corrupt_file_gives_defaults() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let path = test_path();
        cleanup(&path);
        assert_eq!(load_settings_from(&path), Settings::default());
        fs::write(&path, "{ not json").unwrap();
        let loaded = load_settings_from(&path);
        cleanup(&path);
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn save_into_missing_directory_is_an_io_error() {
        let path = std::env::temp_dir()
            .join(format!("window_placement_no_such_dir_{}", std::process::id()))
            .join("settings.json");
        let result = save_settings_to(&Settings::default(), &path);
        assert!(matches!(result, Err(PlacementError::Io(_))));
        assert!(!path.exists());
    }
}
