//! Application configuration.
//!
//! Values are layered, later sources winning:
//! 1. Bundled defaults (`postcraft.toml` compiled into the binary)
//! 2. `~/.config/postcraft/postcraft.toml`
//! 3. `./postcraft.toml`
//!
//! An explicit file passed to [`PostcraftConfig::from_file`] replaces steps
//! 2 and 3. The API key never lives in a file; it comes from
//! `OPENROUTER_API_KEY`.

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use postcraft_error::{ConfigError, PostcraftResult};
use postcraft_models::{ClientConfig, ProviderSettings};
use postcraft_storage::DEFAULT_HISTORY_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../postcraft.toml");

/// Where the post history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// History file; a leading `~/` expands to the home directory
    pub path: PathBuf,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }
}

/// Top-level configuration.
///
/// # Example
///
/// ```toml
/// [provider]
/// text_model = "openai/gpt-4o-mini"
///
/// [history]
/// path = "~/.local/share/postcraft/history.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostcraftConfig {
    /// Remote provider settings
    #[serde(default)]
    pub provider: ProviderSettings,
    /// History file settings
    #[serde(default)]
    pub history: HistorySettings,
}

impl PostcraftConfig {
    /// Loads bundled defaults merged with the home and working-directory files.
    #[instrument]
    pub fn load() -> PostcraftResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/postcraft/postcraft.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("postcraft").required(false));

        Self::finish(builder)
    }

    /// Loads bundled defaults overridden by one explicit file.
    ///
    /// The file must exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PostcraftResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::new(format!(
                "Configuration file not found: {}",
                path.display()
            ))
            .into());
        }

        debug!("Loading configuration from file");
        Self::finish(Self::defaults().add_source(File::from(path)))
    }

    /// Parses configuration from TOML text layered over the bundled defaults.
    pub fn from_toml_str(toml: &str) -> PostcraftResult<Self> {
        Self::finish(Self::defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Remote client configuration: these settings plus the env credential.
    pub fn client_config(&self) -> PostcraftResult<ClientConfig> {
        ClientConfig::from_config(&self.provider)
    }

    /// History file path with `~/` expanded.
    pub fn history_path(&self) -> PathBuf {
        let path = &self.history.path;
        match (path.strip_prefix("~"), dirs::home_dir()) {
            (Ok(rest), Some(home)) => home.join(rest),
            _ => path.clone(),
        }
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> PostcraftResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_match_built_in_values() {
        let config = PostcraftConfig::from_toml_str("").unwrap();
        assert_eq!(config.provider, ProviderSettings::default());
        assert_eq!(config.history, HistorySettings::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PostcraftConfig::from_toml_str(
            r#"
            [provider]
            text_model = "openai/gpt-4o-mini"
            image_timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.provider.text_model, "openai/gpt-4o-mini");
        assert_eq!(config.provider.image_timeout_secs, 5);
        assert_eq!(config.provider.api_base, "https://openrouter.ai/api/v1");
        assert_eq!(config.history.path, PathBuf::from("post_history.json"));
    }

    #[test]
    fn wrong_type_is_config_error() {
        let err = PostcraftConfig::from_toml_str("[provider]\nimage_timeout_secs = \"soon\"")
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn tilde_expands_to_home() {
        let config = PostcraftConfig::from_toml_str("[history]\npath = \"~/posts/history.json\"")
            .unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.history_path(), home.join("posts/history.json"));
        }
    }

    #[test]
    fn relative_path_is_kept() {
        let config = PostcraftConfig::default();
        assert_eq!(config.history_path(), PathBuf::from("post_history.json"));
    }
}
