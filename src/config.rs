use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::affinity::SuggestOptions;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AffinityConfig {
    pub logging: LoggingConfig,
    pub data: DataConfig,
    pub suggest: SuggestConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    /// Base relationship data (JSON).
    pub path: String,
    /// Optional second region laid over the base data.
    pub overlay: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SuggestConfig {
    pub limit: usize,
    pub min_score: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        let path = default_affinity_dir()
            .join("affinity_components.json")
            .to_string_lossy()
            .into_owned();
        Self {
            path,
            overlay: None,
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        let defaults = SuggestOptions::default();
        Self {
            limit: defaults.limit,
            min_score: defaults.min_score,
        }
    }
}

impl SuggestConfig {
    pub fn options(&self) -> SuggestOptions {
        SuggestOptions {
            limit: self.limit,
            min_score: self.min_score,
        }
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns `~/.uma-affinity/`
pub fn default_affinity_dir() -> PathBuf {
    home_dir().join(".uma-affinity")
}

/// Returns the default config file path: `~/.uma-affinity/config.toml`
pub fn default_config_path() -> PathBuf {
    default_affinity_dir().join("config.toml")
}

impl AffinityConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            AffinityConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (AFFINITY_DATA, AFFINITY_OVERLAY, AFFINITY_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AFFINITY_DATA") {
            self.data.path = val;
        }
        if let Ok(val) = std::env::var("AFFINITY_OVERLAY") {
            self.data.overlay = Some(val);
        }
        if let Ok(val) = std::env::var("AFFINITY_LOG_LEVEL") {
            self.logging.log_level = val;
        }
    }

    /// Resolve the base data path, expanding `~` if needed.
    pub fn resolved_data_path(&self) -> PathBuf {
        expand_tilde(&self.data.path)
    }

    pub fn resolved_overlay_path(&self) -> Option<PathBuf> {
        self.data.overlay.as_deref().map(expand_tilde)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AffinityConfig::default();
        assert_eq!(config.logging.log_level, "info");
        assert!(config.data.path.ends_with("affinity_components.json"));
        assert!(config.data.overlay.is_none());
        assert_eq!(config.suggest.limit, 10);
        assert_eq!(config.suggest.min_score, 1);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[logging]
log_level = "debug"

[data]
path = "/tmp/jp.json"
overlay = "/tmp/global.json"

[suggest]
limit = 25
"#;
        let config: AffinityConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.log_level, "debug");
        assert_eq!(config.data.path, "/tmp/jp.json");
        assert_eq!(config.data.overlay.as_deref(), Some("/tmp/global.json"));
        assert_eq!(config.suggest.limit, 25);
        // defaults still apply for unset fields
        assert_eq!(config.suggest.min_score, 1);
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = AffinityConfig::default();
        std::env::set_var("AFFINITY_DATA", "/tmp/override.json");
        std::env::set_var("AFFINITY_OVERLAY", "/tmp/overlay.json");
        std::env::set_var("AFFINITY_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.data.path, "/tmp/override.json");
        assert_eq!(config.data.overlay.as_deref(), Some("/tmp/overlay.json"));
        assert_eq!(config.logging.log_level, "trace");

        // Clean up
        std::env::remove_var("AFFINITY_DATA");
        std::env::remove_var("AFFINITY_OVERLAY");
        std::env::remove_var("AFFINITY_LOG_LEVEL");
    }

    #[test]
    fn tilde_expands_to_home() {
        let expanded = expand_tilde("~/data/affinity.json");
        assert!(expanded.ends_with("data/affinity.json"));
        assert!(!expanded.starts_with("~"));
        assert_eq!(expand_tilde("/abs/path.json"), PathBuf::from("/abs/path.json"));
    }
}
