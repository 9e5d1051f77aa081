//! Generation request type.

use crate::{Language, Length, Platform};
use postcraft_error::{ConfigError, PostcraftResult};
use serde::{Deserialize, Serialize};

/// Everything the pipeline needs to produce one post.
///
/// Stored verbatim as the `metadata` of the generated post. Tone is free
/// text; no validation beyond enum membership is performed.
///
/// # Examples
///
/// ```
/// use postcraft_core::{GenerationRequest, Language, Length, Platform};
///
/// let request = GenerationRequest::builder()
///     .topic("focus")
///     .length(Length::Short)
///     .platform(Platform::Twitter)
///     .tone("Friendly")
///     .language(Language::English)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.topic, "focus");
/// assert_eq!(request.platform, Platform::Twitter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Subject of the post
    pub topic: String,
    /// Length tier
    pub length: Length,
    /// Target platform
    pub platform: Platform,
    /// Voice of the post, e.g. "Inspirational" or "Casual"
    pub tone: String,
    /// Output language; entries written before languages existed read as English
    #[serde(default)]
    pub language: Language,
}

impl GenerationRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Builds a request from raw option strings.
    ///
    /// Option names are matched case-insensitively. An unknown length,
    /// platform or language is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_core::{GenerationRequest, Language};
    ///
    /// let request = GenerationRequest::parse("focus", "short", "Twitter", "Friendly", "bm").unwrap();
    /// assert_eq!(request.language, Language::Malay);
    ///
    /// let err = GenerationRequest::parse("focus", "short", "MySpace", "Friendly", "EN").unwrap_err();
    /// assert!(err.is_config());
    /// ```
    pub fn parse(
        topic: &str,
        length: &str,
        platform: &str,
        tone: &str,
        language: &str,
    ) -> PostcraftResult<Self> {
        let length = length
            .parse::<Length>()
            .map_err(|_| ConfigError::unsupported("length", length))?;
        let platform = platform
            .parse::<Platform>()
            .map_err(|_| ConfigError::unsupported("platform", platform))?;
        let language = language
            .parse::<Language>()
            .map_err(|_| ConfigError::unsupported("language", language))?;

        Ok(Self {
            topic: topic.to_string(),
            length,
            platform,
            tone: tone.to_string(),
            language,
        })
    }
}
