//! Workbench configuration.
//!
//! Loaded from `<config dir>/webide/config.toml`. Every section uses
//! `#[serde(default)]`, so a partial file only overrides what it names
//! and a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::editor::{EditorOptions, ThemeMode};
use crate::language::Language;
use crate::terminal::TerminalConfig;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Options applied to the editor widget on mount
    pub editor: EditorOptions,

    /// Appearance settings
    pub ui: UiConfig,

    /// Terminal prompt and greeting
    pub terminal: TerminalConfig,

    /// Preview output settings
    pub preview: PreviewConfig,

    /// Initial session contents
    pub session: SessionConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("webide").join("config.toml"))
    }

    /// Writes the config to `path`, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Appearance configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Light or dark theme
    pub theme: ThemeMode,

    /// Show the preview panel at startup
    pub show_preview: bool,
}

/// Preview output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// File the composed page is written to
    pub output: PathBuf,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output: std::env::temp_dir().join("webide").join("preview.html"),
        }
    }
}

/// Initial session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed the store with the sample documents
    pub seed_samples: bool,

    /// Language preselected for new files
    pub language: Language,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            language: Language::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.theme, ThemeMode::Dark);
        assert!(!config.ui.show_preview);
        assert!(config.session.seed_samples);
        assert_eq!(config.session.language, Language::JavaScript);
        assert_eq!(config.terminal.prompt, "$");
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[ui]\ntheme = \"light\"\n\n[session]\nlanguage = \"csharp\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.theme, ThemeMode::Light);
        assert_eq!(config.session.language, Language::CSharp);
        assert!(config.session.seed_samples);
        assert_eq!(config.editor.font_size, 14.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.terminal.prompt = ">".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.terminal.prompt, ">");
    }

    #[test]
    fn test_bad_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ui = 3").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
