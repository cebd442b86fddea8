use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::category::CategoryId;

/// Configuration for glyphtable
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Preference store location (overrides the per-user default)
    pub prefs_file: Option<PathBuf>,

    /// Category shown when none is requested
    pub default_category: Option<String>,

    /// Logging configuration
    pub logging: Option<LoggingConfig>,

    /// Clipboard configuration
    pub clipboard: Option<ClipboardConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Enable verbose logging by default
    pub verbose: Option<bool>,

    /// Time format for log timestamps (uses time crate format syntax)
    pub time_format: Option<String>,
}

/// Clipboard configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClipboardConfig {
    /// Copy tool to prefer (e.g. "xclip"); auto-detected when unset
    pub tool: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config =
            toml::from_str(&content).context("Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// Try to load configuration from standard locations
    pub fn load() -> Result<Self> {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Get potential configuration file paths in order of preference
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory
        paths.push(PathBuf::from("glyphtable.toml"));
        paths.push(PathBuf::from(".glyphtable.toml"));

        // 2. User config directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("glyphtable").join("config.toml"));
            paths.push(config_dir.join("glyphtable.toml"));
        }

        // 3. User home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join("glyphtable")
                    .join("config.toml"),
            );
            paths.push(home_dir.join(".glyphtable.toml"));
        }

        paths
    }

    /// Get the preference store path, using the configured value or default
    pub fn get_prefs_file(&self) -> PathBuf {
        if let Some(path) = &self.prefs_file {
            return path.clone();
        }

        dirs::config_dir()
            .map(|config_dir| config_dir.join("glyphtable").join("prefs.toml"))
            .unwrap_or_else(|| PathBuf::from(".glyphtable-prefs.toml"))
    }

    /// Get the category used when the command line names none
    pub fn get_default_category(&self) -> CategoryId {
        self.default_category
            .as_deref()
            .and_then(|name| CategoryId::from_str(name, true).ok())
            .unwrap_or(CategoryId::Ascii)
    }

    /// Check if verbose logging is enabled by default
    pub fn is_verbose_default(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.verbose)
            .unwrap_or(false)
    }

    /// Get the time format for log timestamps
    pub fn get_time_format(&self) -> String {
        self.logging
            .as_ref()
            .and_then(|logging| logging.time_format.clone())
            .unwrap_or_else(|| "[year]-[month]-[day] [hour]:[minute]:[second]".to_string())
    }

    /// Get the preferred clipboard tool, if configured
    pub fn get_clipboard_tool(&self) -> Option<String> {
        self.clipboard
            .as_ref()
            .and_then(|clipboard| clipboard.tool.clone())
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(path.as_ref(), content).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.get_default_category(), CategoryId::Ascii);
        assert!(!config.is_verbose_default());
        assert_eq!(config.get_clipboard_tool(), None);
        assert_eq!(
            config.get_time_format(),
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        );
    }

    #[test]
    fn test_config_load_and_save() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            prefs_file: Some(PathBuf::from("/tmp/prefs.toml")),
            default_category: Some("greek-letters".to_string()),
            logging: Some(LoggingConfig {
                verbose: Some(true),
                time_format: Some("[hour]:[minute]:[second]".to_string()),
            }),
            clipboard: Some(ClipboardConfig {
                tool: Some("xclip".to_string()),
            }),
        };

        config.save_to_file(&config_path)?;
        let loaded = Config::load_from_file(&config_path)?;

        assert_eq!(loaded.get_prefs_file(), PathBuf::from("/tmp/prefs.toml"));
        assert_eq!(loaded.get_default_category(), CategoryId::GreekLetters);
        assert!(loaded.is_verbose_default());
        assert_eq!(loaded.get_time_format(), "[hour]:[minute]:[second]");
        assert_eq!(loaded.get_clipboard_tool(), Some("xclip".to_string()));

        Ok(())
    }

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths
            .iter()
            .any(|p| p.file_name().unwrap() == "glyphtable.toml"));
    }

    #[test]
    fn test_unknown_default_category_falls_back_to_ascii() {
        let config = Config {
            default_category: Some("geometric-shapes".to_string()),
            ..Config::default()
        };
        assert_eq!(config.get_default_category(), CategoryId::Ascii);
    }

    #[test]
    fn test_default_category_parsing_ignores_case() {
        let config = Config {
            default_category: Some("Playing-Card-Suits".to_string()),
            ..Config::default()
        };
        assert_eq!(config.get_default_category(), CategoryId::PlayingCardSuits);
    }
}
