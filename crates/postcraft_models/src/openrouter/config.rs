//! Client configuration.

use postcraft_error::{ConfigError, PostcraftResult};
use serde::{Deserialize, Serialize};

/// Environment variable holding the OpenRouter API key.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324:free";
const DEFAULT_REFERER: &str = "https://github.com/postcraft/postcraft";
const DEFAULT_TITLE: &str = "Postcraft Social Media Post Generator";

/// Provider settings as they appear in the `[provider]` table of the
/// configuration file. Holds everything except the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Base URL of the chat-completions API
    pub api_base: String,
    /// Model used for post text
    pub text_model: String,
    /// Model used for image suggestions
    pub image_model: String,
    /// Value of the `HTTP-Referer` attribution header
    pub referer: String,
    /// Value of the `X-Title` attribution header
    pub title: String,
    /// Timeout for the image-suggestion call, in seconds
    pub image_timeout_secs: u64,
    /// Output token ceiling for the image-suggestion call
    pub image_max_tokens: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            text_model: DEFAULT_MODEL.to_string(),
            image_model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            image_timeout_secs: 30,
            image_max_tokens: 150,
        }
    }
}

/// Everything the client needs to reach the provider.
///
/// Built once at startup and handed to [`OpenRouterClient::new`](crate::OpenRouterClient::new).
///
/// # Examples
///
/// ```
/// use postcraft_models::ClientConfig;
///
/// let config = ClientConfig::new("sk-test").with_api_base("http://localhost:8080");
/// assert_eq!(config.settings().api_base, "http://localhost:8080");
/// assert!(!format!("{:?}", config).contains("sk-test"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    settings: ProviderSettings,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("settings", &self.settings)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration with default provider settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_settings(api_key, ProviderSettings::default())
    }

    /// Creates a configuration from a key and explicit settings.
    pub fn with_settings(api_key: impl Into<String>, settings: ProviderSettings) -> Self {
        Self {
            api_key: api_key.into(),
            settings,
        }
    }

    /// Reads the key from `OPENROUTER_API_KEY` and uses default settings.
    pub fn from_env() -> PostcraftResult<Self> {
        Self::from_config(&ProviderSettings::default())
    }

    /// Combines file settings with the key from `OPENROUTER_API_KEY`.
    ///
    /// A missing or blank key is a configuration error.
    pub fn from_config(settings: &ProviderSettings) -> PostcraftResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::missing_env(API_KEY_ENV))?;
        Ok(Self::with_settings(api_key, settings.clone()))
    }

    /// Overrides the API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.settings.api_base = api_base.into();
        self
    }

    /// Overrides the text model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.settings.text_model = model.into();
        self
    }

    /// Overrides the image-suggestion model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.settings.image_model = model.into();
        self
    }

    /// Overrides the image-suggestion timeout.
    pub fn with_image_timeout_secs(mut self, seconds: u64) -> Self {
        self.settings.image_timeout_secs = seconds;
        self
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Provider settings.
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// Chat-completions endpoint URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.settings.api_base.trim_end_matches('/'))
    }
}
