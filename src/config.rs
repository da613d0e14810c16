//!
//! This module defines configuration structures and loading logic for mdfence.
//! Configuration lives in `.mdfence.toml` (or `mdfence.toml`), discovered by walking up from
//! the working directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names searched for, in order of preference
pub const CONFIG_FILES: &[&str] = &[".mdfence.toml", "mdfence.toml"];

/// Represents the complete configuration loaded from .mdfence.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Global configuration options
    pub global: GlobalConfig,

    /// Language picker and completion options
    pub languages: LanguageConfig,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Glob patterns of files to include when scanning directories
    pub include: Vec<String>,

    /// Glob patterns of files to exclude
    pub exclude: Vec<String>,

    /// Respect .gitignore files when scanning directories
    #[serde(alias = "respect_gitignore")]
    pub respect_gitignore: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            respect_gitignore: true,
        }
    }
}

/// Which languages pickers and completions offer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct LanguageConfig {
    /// Offer the full catalogue instead of only popular languages
    #[serde(alias = "all_available_languages", alias = "allAvailableLanguages")]
    pub all_available_languages: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the nearest config file above the current
    /// directory is used, falling back to defaults when there is none.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_path(Path::new(path));
        }

        let start = std::env::current_dir().map_err(|source| ConfigError::IoError {
            source,
            path: ".".to_string(),
        })?;
        match Self::discover(&start) {
            Some(path) => Self::load_from_path(&path),
            None => {
                log::debug!("No config file found above {}, using defaults", start.display());
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Find the nearest config file at or above `start`
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }
}

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &str) -> Result<(), ConfigError> {
    if Path::new(path).exists() {
        return Err(ConfigError::FileExists { path: path.to_string() });
    }

    let default_config = r#"# mdfence configuration file

[global]
# Files to include or exclude when scanning directories (glob patterns)
include = []
exclude = []

# Respect .gitignore files when scanning directories
respect-gitignore = true

[languages]
# Offer every known language in pickers and completions, not only the popular ones
all-available-languages = false
"#;

    fs::write(path, default_config).map_err(|source| ConfigError::IoError {
        source,
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.global.respect_gitignore);
        assert!(config.global.exclude.is_empty());
        assert!(!config.languages.all_available_languages);
    }

    #[test]
    fn test_parse_kebab_and_snake_case() {
        let config = Config::from_toml_str(
            r#"
            [global]
            exclude = ["drafts/**"]
            respect_gitignore = false

            [languages]
            all-available-languages = true
            "#,
        )
        .unwrap();
        assert_eq!(config.global.exclude, vec!["drafts/**"]);
        assert!(!config.global.respect_gitignore);
        assert!(config.languages.all_available_languages);

        let config = Config::from_toml_str("[languages]\nall_available_languages = true\n").unwrap();
        assert!(config.languages.all_available_languages);
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml_str("[languages\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_create_and_discover() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".mdfence.toml");
        let path_str = path.to_str().unwrap();

        create_default_config(path_str).unwrap();
        let loaded = Config::load(Some(path_str)).unwrap();
        assert_eq!(loaded, Config::default());

        let nested = dir.path().join("docs/guides");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(Config::discover(&nested), Some(path.clone()));

        let err = create_default_config(path_str).unwrap_err();
        assert!(matches!(err, ConfigError::FileExists { .. }));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = Config::load(Some("/definitely/not/here/.mdfence.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }
}
