//! Configuration management for the application.
//!
//! This module handles loading application configuration in TOML format
//! with platform-specific directory resolution. Components receive
//! resolved paths explicitly; nothing below the CLI reads the
//! environment.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct PathConfig {
    /// Template root containing `project/` and optional `partials/`
    pub template_dir: Option<PathBuf>,
    /// Design-export workspace root (metadata, tree, slices, images)
    pub output_root: Option<PathBuf>,
}

/// Application configuration read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    /// Path settings
    #[serde(default)]
    pub paths: PathConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/dtcgen/`
    /// - macOS: `~/Library/Application Support/dtcgen/`
    /// - Windows: `%APPDATA%\dtcgen\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(crate::constants::APP_NAME))
    }

    /// Gets the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_paths() {
        let config = Config::default();
        assert!(config.paths.template_dir.is_none());
        assert!(config.paths.output_root.is_none());
    }

    #[test]
    fn test_parse_config_paths() {
        let parsed: Config = toml::from_str(
            "[paths]\ntemplate_dir = \"/templates\"\noutput_root = \"/out\"\n",
        )
        .unwrap();
        assert_eq!(
            parsed.paths.template_dir.as_deref(),
            Some(std::path::Path::new("/templates"))
        );
        assert_eq!(
            parsed.paths.output_root.as_deref(),
            Some(std::path::Path::new("/out"))
        );
    }

    #[test]
    fn test_empty_toml_parses_to_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }
}
