//! Remote LLM client for Postcraft.
//!
//! Provides [`OpenRouterClient`], a client for OpenRouter and any other
//! provider that speaks the OpenAI chat-completions format. It implements
//! [`postcraft_interface::PostGenerator`].
//!
//! # Example
//!
//! ```no_run
//! use postcraft_core::{Length, PromptContext};
//! use postcraft_interface::PostGenerator;
//! use postcraft_models::{ClientConfig, OpenRouterClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenRouterClient::new(ClientConfig::from_env()?)?;
//! let prompt = PromptContext::new("You are a copywriter.", "Write about focus.", Length::Short.budget());
//! let text = client.generate_text(&prompt).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openrouter;

pub use openrouter::{
    API_KEY_ENV, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, Choice, ClientConfig,
    OpenRouterClient, ProviderSettings, ResponseMessage, Usage, parse_suggestions,
};
