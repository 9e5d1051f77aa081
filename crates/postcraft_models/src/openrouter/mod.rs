//! OpenRouter chat-completions client.
//!
//! Any OpenAI-compatible endpoint works by pointing `api_base` elsewhere.

mod client;
mod config;
mod dto;

pub use client::{OpenRouterClient, parse_suggestions};
pub use config::{API_KEY_ENV, ClientConfig, ProviderSettings};
pub use dto::{ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, Choice, ResponseMessage, Usage};
