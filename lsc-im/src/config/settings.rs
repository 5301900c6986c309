//! Settings configuration
//!
//! Manages user-configurable settings for the keyboard.
//! Default values are defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use directories::ProjectDirs;
use lsc_engine::KeyId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::layout::Layout;

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the keyboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Key layout
    pub keyboard: KeyboardSettings,
    /// Held-key repeat settings
    pub repeat: RepeatSettings,
    /// Word completion settings
    pub suggestions: SuggestionSettings,
}

/// Key layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardSettings {
    /// Rows of keys, top to bottom. Unknown key names fail to deserialize.
    pub rows: Vec<Vec<KeyId>>,
}

/// Held-key repeat settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeatSettings {
    /// Delay between repeated actions in milliseconds
    pub interval_ms: u64,
}

/// Word completion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionSettings {
    /// Whether completion suggestions are shown
    pub enabled: bool,
    /// Path to the newline-delimited word list
    pub dictionary: String,
    /// Number of suggestions visible at once
    pub page_size: usize,
    /// Whether an empty current word matches every dictionary word
    pub match_empty_token: bool,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

/// Parse user TOML content merged on top of default.toml, then validate it.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content)?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    settings.validate()?;
    Ok(settings)
}

/// Get the project directories for lsc-keyboard.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("co", "lsc", "lsc-keyboard")
}

impl Settings {
    /// Get the data directory path
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Validate values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        self.layout()?;
        if self.repeat.interval_ms == 0 {
            anyhow::bail!("repeat.interval_ms must be greater than zero");
        }
        if self.suggestions.page_size == 0 {
            anyhow::bail!("suggestions.page_size must be greater than zero");
        }
        Ok(())
    }

    /// Build the validated key layout.
    pub fn layout(&self) -> Result<Layout> {
        Layout::new(self.keyboard.rows.clone())
    }

    /// Delay between repeated actions while a key is held
    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat.interval_ms)
    }

    /// Resolve the word list path.
    ///
    /// Absolute paths are used as-is. A relative path is looked up in the data
    /// directory first, then relative to the working directory.
    pub fn dictionary_path(&self) -> PathBuf {
        let path = Path::new(&self.suggestions.dictionary);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        if let Some(candidate) = Self::data_dir().map(|dir| dir.join(path))
            && candidate.exists()
        {
            return candidate;
        }
        path.to_path_buf()
    }

    /// Load settings from the default configuration file, merged on top of defaults.
    ///
    /// Returns defaults from default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from {:?}", config_file);
        let content = fs::read_to_string(&config_file)?;
        parse_with_defaults(&content)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_with_defaults(&content)
    }

    /// Save settings to the default configuration file
    pub fn save(&self) -> Result<()> {
        let Some(config_file) = Self::config_file() else {
            anyhow::bail!("Could not determine config directory");
        };
        debug!("Saving config to {:?}", config_file);
        self.save_to(&config_file)
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(content: &str) -> Result<Settings> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        Settings::load_from(file.path())
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.repeat.interval_ms, 120);
        assert!(settings.suggestions.enabled);
        assert_eq!(settings.suggestions.page_size, 4);
        assert!(settings.suggestions.match_empty_token);
        assert_eq!(settings.suggestions.dictionary, "spanish_words.txt");
        assert_eq!(settings.keyboard.rows.len(), 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_layout_keys() {
        let layout = Settings::default().layout().unwrap();
        assert_eq!(layout.rows()[4], [KeyId::Space]);
        assert!(layout.contains(KeyId::Letter('ñ')));
        assert!(layout.contains(KeyId::CapsLock));
        assert_eq!(layout.keys().count(), 41);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = Settings::default();
        let toml_str = toml::to_string(&settings).unwrap();
        let loaded: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.keyboard.rows, settings.keyboard.rows);
        assert_eq!(loaded.repeat.interval_ms, settings.repeat.interval_ms);
    }

    #[test]
    fn test_partial_config() {
        let settings = load_str(
            r#"
[repeat]
interval_ms = 80
"#,
        )
        .unwrap();
        assert_eq!(settings.repeat_interval(), Duration::from_millis(80));
        // Should use default for unspecified values
        assert!(settings.suggestions.enabled);
        assert_eq!(settings.keyboard.rows.len(), 5);
    }

    #[test]
    fn test_plain_keyboard_variant() {
        let settings = load_str(
            r#"
[suggestions]
enabled = false
"#,
        )
        .unwrap();
        assert!(!settings.suggestions.enabled);
        assert_eq!(settings.suggestions.page_size, 4);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = load_str(
            r#"
[keyboard]
rows = [["a", "b", "shift"]]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = load_str(
            r#"
[keyboard]
rows = [["a", "b"], ["a"]]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = load_str(
            r#"
[repeat]
interval_ms = 0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.suggestions.page_size = 6;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.suggestions.page_size, 6);
    }

    #[test]
    fn test_absolute_dictionary_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");

        let mut settings = Settings::default();
        settings.suggestions.dictionary = path.to_string_lossy().into_owned();
        assert_eq!(settings.dictionary_path(), path);
    }
}
