use perf_report_engine::AccentPalette;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User defaults for `perf-report`, stored as TOML.
///
/// ```toml
/// general_report = true
/// default_accent = "#334155"
///
/// [accent_colors]
/// "muito bom" = "#0d9488"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Compile in general-report mode unless the command line says otherwise.
    #[serde(default)]
    pub general_report: bool,
    /// Accent for classifications no palette entry matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_accent: Option<String>,
    /// Classification fragment -> color, checked before the built-in entries.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub accent_colors: BTreeMap<String, String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/perf-report");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The engine's built-in palette with this config's entries layered on top.
    pub fn palette(&self) -> AccentPalette {
        let mut palette = AccentPalette::default();
        for (fragment, color) in &self.accent_colors {
            palette = palette.with_entry(fragment, color.clone());
        }
        if let Some(color) = &self.default_accent {
            palette = palette.with_default(color.clone());
        }
        palette
    }

    /// Expands `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
