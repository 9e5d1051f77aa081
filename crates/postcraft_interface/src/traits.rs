//! Trait definitions for remote post generation.

use async_trait::async_trait;
use postcraft_core::PromptContext;
use postcraft_error::RemoteError;

/// A remote model that writes post text and image ideas.
///
/// Each call is a single request/response with no retry. Implementations
/// are stateless and safe to share between concurrent generations.
#[async_trait]
pub trait PostGenerator: Send + Sync {
    /// Generate post text for a fully built prompt.
    ///
    /// The returned text is trimmed of surrounding whitespace.
    async fn generate_text(&self, prompt: &PromptContext) -> Result<String, RemoteError>;

    /// Suggest images for a post, one suggestion per element.
    ///
    /// Callers use the first two entries; fewer than two is an error.
    async fn generate_image_suggestions(
        &self,
        topic: &str,
        tone: &str,
    ) -> Result<Vec<String>, RemoteError>;

    /// Provider name (e.g., "openrouter").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for post text.
    fn model_name(&self) -> &str;
}
